use actix_web::http::StatusCode;
use actix_web::test;
use jobportal::auth::scopes;
use jobportal_test_support::error_envelope::assert_resource_error;
use serde_json::json;

use crate::common::{init_logging, json_body};
use crate::support::auth::bearer;
use crate::support::{build_test_state, create_test_app, factory};

const ALL: &[&str] = &[
    scopes::POST_APPLICATION,
    scopes::DELETE_APPLICATION,
    scopes::GET_APPLICATIONS,
    scopes::GET_CANDIDATES,
];

#[actix_web::test]
async fn second_application_for_same_pair_is_not_acceptable() {
    init_logging();
    let state = build_test_state().await;
    let company_id = factory::company(&state).await;
    let vacancy_id = factory::vacancy(&state, company_id).await;
    let candidate_id = factory::candidate(&state).await;
    let app = create_test_app(state).build().await;

    let submit = || {
        test::TestRequest::post()
            .uri(&format!("/vacancies/{vacancy_id}/applications"))
            .insert_header(bearer(ALL))
            .set_json(json!({"candidate_id": candidate_id, "cover_letter": "Pick me"}))
            .to_request()
    };

    let first = json_body(test::call_service(&app, submit()).await, StatusCode::OK).await;
    assert_eq!(first["success"], true);

    assert_resource_error(
        test::call_service(&app, submit()).await,
        StatusCode::NOT_ACCEPTABLE,
    )
    .await;
}

#[actix_web::test]
async fn application_inherits_vacancy_company() {
    init_logging();
    let state = build_test_state().await;
    let company_id = factory::company(&state).await;
    let vacancy_id = factory::vacancy(&state, company_id).await;
    let candidate_id = factory::candidate(&state).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri(&format!("/vacancies/{vacancy_id}/applications"))
        .insert_header(bearer(ALL))
        .set_json(json!({"candidate_id": candidate_id}))
        .to_request();
    json_body(test::call_service(&app, req).await, StatusCode::OK).await;

    let req = test::TestRequest::get()
        .uri(&format!("/candidates/{candidate_id}/applications"))
        .insert_header(bearer(ALL))
        .to_request();
    let body = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    let row = &body["applications_list"][0];
    assert_eq!(row["company_id"], company_id);
    assert_eq!(row["vacancy_id"], vacancy_id);
    assert_eq!(row["cover_letter"], json!(null));
}

#[actix_web::test]
async fn mismatched_company_is_unprocessable() {
    init_logging();
    let state = build_test_state().await;
    let owner = factory::company(&state).await;
    let other = factory::company(&state).await;
    let vacancy_id = factory::vacancy(&state, owner).await;
    let candidate_id = factory::candidate(&state).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri(&format!("/vacancies/{vacancy_id}/applications"))
        .insert_header(bearer(ALL))
        .set_json(json!({"candidate_id": candidate_id, "company_id": other}))
        .to_request();
    assert_resource_error(
        test::call_service(&app, req).await,
        StatusCode::UNPROCESSABLE_ENTITY,
    )
    .await;
}

#[actix_web::test]
async fn unknown_vacancy_or_candidate() {
    init_logging();
    let state = build_test_state().await;
    let company_id = factory::company(&state).await;
    let vacancy_id = factory::vacancy(&state, company_id).await;
    let candidate_id = factory::candidate(&state).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/vacancies/999/applications")
        .insert_header(bearer(ALL))
        .set_json(json!({"candidate_id": candidate_id}))
        .to_request();
    assert_resource_error(test::call_service(&app, req).await, StatusCode::NOT_FOUND).await;

    let req = test::TestRequest::post()
        .uri(&format!("/vacancies/{vacancy_id}/applications"))
        .insert_header(bearer(ALL))
        .set_json(json!({"candidate_id": 999}))
        .to_request();
    assert_resource_error(
        test::call_service(&app, req).await,
        StatusCode::UNPROCESSABLE_ENTITY,
    )
    .await;
}

#[actix_web::test]
async fn withdraw_then_withdraw_again() {
    init_logging();
    let state = build_test_state().await;
    let company_id = factory::company(&state).await;
    let vacancy_id = factory::vacancy(&state, company_id).await;
    let candidate_id = factory::candidate(&state).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri(&format!("/vacancies/{vacancy_id}/applications"))
        .insert_header(bearer(ALL))
        .set_json(json!({"candidate_id": candidate_id}))
        .to_request();
    let id = json_body(test::call_service(&app, req).await, StatusCode::OK).await["id"]
        .as_i64()
        .expect("id");

    let withdraw = || {
        test::TestRequest::delete()
            .uri(&format!("/applications/{id}"))
            .insert_header(bearer(ALL))
            .to_request()
    };
    let body = json_body(test::call_service(&app, withdraw()).await, StatusCode::OK).await;
    assert_eq!(body, json!({"success": true, "id": id}));

    assert_resource_error(
        test::call_service(&app, withdraw()).await,
        StatusCode::NOT_FOUND,
    )
    .await;
}
