use actix_web::http::StatusCode;
use actix_web::test;
use jobportal::auth::scopes;
use jobportal_test_support::error_envelope::assert_resource_error;
use serde_json::{json, Value};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::common::{init_logging, json_body};
use crate::support::auth::bearer;
use crate::support::{build_test_state, create_test_app, factory};

const ALL: &[&str] = &[
    scopes::POST_VACANCIES,
    scopes::PATCH_VACANCIES,
    scopes::DELETE_VACANCIES,
];

fn posted_at(vacancy: &Value) -> OffsetDateTime {
    let raw = vacancy["date_posted"].as_str().expect("date_posted string");
    OffsetDateTime::parse(raw, &Rfc3339).expect("RFC 3339")
}

#[actix_web::test]
async fn create_then_fetch_round_trips_every_field() {
    init_logging();
    let state = build_test_state().await;
    let company_id = factory::company(&state).await;
    let app = create_test_app(state).build().await;
    let submitted = json!({
        "company_id": company_id,
        "job_title": "Welder",
        "job_description": "Join metal",
        "requirements": "Certified TIG welding",
        "benefits": "Dental",
        "city": "Pittsburgh",
        "region": "PA",
        "min_salary": 40000,
    });

    let req = test::TestRequest::post()
        .uri("/vacancies")
        .insert_header(bearer(ALL))
        .set_json(&submitted)
        .to_request();
    let created = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    let id = created["id"].as_i64().expect("id");

    let req = test::TestRequest::get()
        .uri(&format!("/vacancies/{id}"))
        .to_request();
    let fetched = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    let vacancy = &fetched["vacancy"];
    assert_eq!(vacancy["id"], id);
    for (key, value) in submitted.as_object().expect("object") {
        assert_eq!(&vacancy[key], value, "field {key}");
    }
    assert!(vacancy["company_name"].as_str().is_some_and(|n| !n.is_empty()));
    posted_at(vacancy);
}

#[actix_web::test]
async fn create_stamps_date_and_joins_company_name() {
    init_logging();
    let state = build_test_state().await;
    let company_id = factory::company(&state).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/vacancies")
        .insert_header(bearer(ALL))
        .set_json(json!({
            "company_id": company_id,
            "job_title": "Welder",
            "job_description": "Join metal",
            "min_salary": 40000,
        }))
        .to_request();
    let id = json_body(test::call_service(&app, req).await, StatusCode::OK).await["id"]
        .as_i64()
        .expect("id");

    let req = test::TestRequest::get()
        .uri(&format!("/vacancies/{id}"))
        .to_request();
    let body = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    let vacancy = &body["vacancy"];
    assert_eq!(vacancy["job_title"], "Welder");
    assert_eq!(vacancy["job_description"], "Join metal");
    assert_eq!(vacancy["company_id"], company_id);
    assert!(vacancy["company_name"].as_str().is_some_and(|n| n.starts_with("company-")));
    posted_at(vacancy);
}

#[actix_web::test]
async fn list_uses_short_format() {
    init_logging();
    let state = build_test_state().await;
    let company_id = factory::company(&state).await;
    factory::vacancy(&state, company_id).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/vacancies").to_request();
    let body = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    let vacancies = body["vacancies"].as_array().expect("list");
    assert_eq!(vacancies.len(), 1);
    let short = vacancies[0].as_object().expect("object");
    assert!(short.contains_key("company_name"));
    assert!(!short.contains_key("job_description"));
    assert!(!short.contains_key("requirements"));
}

#[actix_web::test]
async fn unknown_company_is_unprocessable() {
    init_logging();
    let app = create_test_app(build_test_state().await).build().await;
    let req = test::TestRequest::post()
        .uri("/vacancies")
        .insert_header(bearer(ALL))
        .set_json(json!({"company_id": 999, "job_title": "Ghost"}))
        .to_request();
    assert_resource_error(
        test::call_service(&app, req).await,
        StatusCode::UNPROCESSABLE_ENTITY,
    )
    .await;
}

#[actix_web::test]
async fn patch_restamps_date_and_validates_company() {
    init_logging();
    let state = build_test_state().await;
    let company_id = factory::company(&state).await;
    let id = factory::vacancy(&state, company_id).await;
    let app = create_test_app(state).build().await;

    let get = || test::TestRequest::get().uri(&format!("/vacancies/{id}")).to_request();
    let before = json_body(test::call_service(&app, get()).await, StatusCode::OK).await;

    let req = test::TestRequest::patch()
        .uri(&format!("/vacancies/{id}"))
        .insert_header(bearer(ALL))
        .set_json(json!({"benefits": "Dental"}))
        .to_request();
    json_body(test::call_service(&app, req).await, StatusCode::OK).await;

    let after = json_body(test::call_service(&app, get()).await, StatusCode::OK).await;
    assert_eq!(after["vacancy"]["benefits"], "Dental");
    assert_eq!(after["vacancy"]["job_title"], before["vacancy"]["job_title"]);
    assert!(posted_at(&after["vacancy"]) >= posted_at(&before["vacancy"]));

    let req = test::TestRequest::patch()
        .uri(&format!("/vacancies/{id}"))
        .insert_header(bearer(ALL))
        .set_json(json!({"company_id": 999}))
        .to_request();
    assert_resource_error(
        test::call_service(&app, req).await,
        StatusCode::UNPROCESSABLE_ENTITY,
    )
    .await;

    let req = test::TestRequest::patch()
        .uri(&format!("/vacancies/{id}"))
        .insert_header(bearer(ALL))
        .set_json(json!({"job_title": null}))
        .to_request();
    assert_resource_error(
        test::call_service(&app, req).await,
        StatusCode::UNPROCESSABLE_ENTITY,
    )
    .await;
}

#[actix_web::test]
async fn patch_missing_vacancy_is_not_found() {
    init_logging();
    let state = build_test_state().await;
    let company_id = factory::company(&state).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::patch()
        .uri("/vacancies/999")
        .insert_header(bearer(ALL))
        .set_json(json!({"company_id": company_id}))
        .to_request();
    assert_resource_error(test::call_service(&app, req).await, StatusCode::NOT_FOUND).await;
}
