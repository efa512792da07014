use actix_web::http::StatusCode;
use actix_web::test;
use jobportal_test_support::error_envelope::assert_auth_error;

use crate::common::init_logging;
use crate::support::{build_stateless, create_test_app};

async fn post_companies(authorization: Option<&str>) -> actix_web::dev::ServiceResponse {
    let app = create_test_app(build_stateless().await).build().await;
    let mut req = test::TestRequest::post()
        .uri("/companies")
        .set_json(serde_json::json!({"name": "Acme"}));
    if let Some(value) = authorization {
        req = req.insert_header(("Authorization", value));
    }
    test::call_service(&app, req.to_request()).await
}

#[actix_web::test]
async fn missing_header_is_401() {
    init_logging();
    let resp = post_companies(None).await;
    let description =
        assert_auth_error(resp, StatusCode::UNAUTHORIZED, "authorization_header_missing").await;
    assert_eq!(description, "Authorization header is expected.");
}

#[actix_web::test]
async fn wrong_scheme_is_invalid_header() {
    init_logging();
    for value in ["Basic dXNlcjpwdw==", "bearer abc", ""] {
        let resp = post_companies(Some(value)).await;
        let description =
            assert_auth_error(resp, StatusCode::UNAUTHORIZED, "invalid_header").await;
        assert_eq!(
            description, "Authorization header must start with Bearer",
            "header {value:?}"
        );
    }
}

#[actix_web::test]
async fn bearer_without_token() {
    init_logging();
    let resp = post_companies(Some("Bearer")).await;
    let description = assert_auth_error(resp, StatusCode::UNAUTHORIZED, "invalid_header").await;
    assert_eq!(description, "Token not found.");
}

#[actix_web::test]
async fn too_many_parts() {
    init_logging();
    let resp = post_companies(Some("Bearer abc def")).await;
    let description = assert_auth_error(resp, StatusCode::UNAUTHORIZED, "invalid_header").await;
    assert_eq!(description, "Authorization header must be bearer token.");
}

#[actix_web::test]
async fn unparseable_token() {
    init_logging();
    let resp = post_companies(Some("Bearer not-a-jwt")).await;
    let description = assert_auth_error(resp, StatusCode::UNAUTHORIZED, "invalid_header").await;
    assert_eq!(description, "Unable to parse authentication token.");
}
