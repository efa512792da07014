use actix_web::http::StatusCode;
use actix_web::test;
use jobportal::auth::scopes;
use jobportal_test_support::error_envelope::assert_auth_error;

use crate::common::{init_logging, json_body};
use crate::support::auth::{bearer, claims, mint};
use crate::support::{build_stateless, build_test_state, create_test_app, factory};

#[actix_web::test]
async fn missing_permissions_claim_is_403() {
    init_logging();
    let app = create_test_app(build_stateless().await).build().await;
    let mut no_permissions = claims(&[]);
    no_permissions
        .as_object_mut()
        .expect("claims object")
        .remove("permissions");

    let req = test::TestRequest::delete()
        .uri("/companies/1")
        .insert_header(("Authorization", format!("Bearer {}", mint(&no_permissions))))
        .to_request();
    let description = assert_auth_error(
        test::call_service(&app, req).await,
        StatusCode::FORBIDDEN,
        "invalid_claims",
    )
    .await;
    assert_eq!(description, "Permissions not included in JWT.");
}

#[actix_web::test]
async fn wrong_scope_is_403() {
    init_logging();
    let app = create_test_app(build_stateless().await).build().await;
    // patch grant does not cover delete
    let req = test::TestRequest::delete()
        .uri("/companies/1")
        .insert_header(bearer(&[scopes::PATCH_COMPANIES]))
        .to_request();
    let description = assert_auth_error(
        test::call_service(&app, req).await,
        StatusCode::FORBIDDEN,
        "unauthorized",
    )
    .await;
    assert_eq!(description, "Permission not found.");
}

#[actix_web::test]
async fn every_mutation_needs_its_own_scope() {
    init_logging();
    let app = create_test_app(build_stateless().await).build().await;
    let cases = [
        (test::TestRequest::post().uri("/companies"), scopes::POST_COMPANIES),
        (test::TestRequest::patch().uri("/companies/1"), scopes::PATCH_COMPANIES),
        (test::TestRequest::delete().uri("/companies/1"), scopes::DELETE_COMPANIES),
        (test::TestRequest::post().uri("/candidates"), scopes::POST_CANDIDATES),
        (test::TestRequest::patch().uri("/candidates/1"), scopes::PATCH_CANDIDATES),
        (test::TestRequest::delete().uri("/candidates/1"), scopes::DELETE_CANDIDATES),
        (test::TestRequest::post().uri("/vacancies"), scopes::POST_VACANCIES),
        (test::TestRequest::patch().uri("/vacancies/1"), scopes::PATCH_VACANCIES),
        (test::TestRequest::delete().uri("/vacancies/1"), scopes::DELETE_VACANCIES),
        (test::TestRequest::get().uri("/candidates/1/applications"), scopes::GET_APPLICATIONS),
        (test::TestRequest::get().uri("/vacancies/1/applications"), scopes::GET_CANDIDATES),
        (test::TestRequest::post().uri("/vacancies/1/applications"), scopes::POST_APPLICATION),
        (test::TestRequest::delete().uri("/applications/1"), scopes::DELETE_APPLICATION),
    ];

    for (req, scope) in cases {
        // Every scope except the required one
        let others: Vec<&str> = all_scopes().into_iter().filter(|s| *s != scope).collect();
        let resp = test::call_service(&app, req.insert_header(bearer(&others)).to_request()).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "scope {scope}");
    }
}

#[actix_web::test]
async fn public_reads_need_no_token() {
    init_logging();
    let state = build_test_state().await;
    let company_id = factory::company(&state).await;
    factory::vacancy(&state, company_id).await;
    let candidate_id = factory::candidate(&state).await;
    let app = create_test_app(state).build().await;

    for uri in [
        "/companies".to_string(),
        format!("/companies/{company_id}"),
        "/candidates".to_string(),
        format!("/candidates/{candidate_id}"),
        "/vacancies".to_string(),
    ] {
        let req = test::TestRequest::get().uri(&uri).to_request();
        let body = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
        assert_eq!(body["success"], true, "{uri}");
    }
}

#[actix_web::test]
async fn granted_scope_reaches_handler() {
    init_logging();
    let app = create_test_app(build_test_state().await).build().await;
    let req = test::TestRequest::post()
        .uri("/companies")
        .insert_header(bearer(&[scopes::POST_COMPANIES]))
        .set_json(serde_json::json!({"name": "Acme"}))
        .to_request();
    let body = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(body["success"], true);
    assert!(body["id"].as_i64().is_some());
}

fn all_scopes() -> Vec<&'static str> {
    vec![
        scopes::POST_COMPANIES,
        scopes::PATCH_COMPANIES,
        scopes::DELETE_COMPANIES,
        scopes::POST_CANDIDATES,
        scopes::PATCH_CANDIDATES,
        scopes::DELETE_CANDIDATES,
        scopes::POST_VACANCIES,
        scopes::PATCH_VACANCIES,
        scopes::DELETE_VACANCIES,
        scopes::GET_APPLICATIONS,
        scopes::GET_CANDIDATES,
        scopes::POST_APPLICATION,
        scopes::DELETE_APPLICATION,
    ]
}
