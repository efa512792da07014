use actix_web::http::StatusCode;
use actix_web::test;
use jobportal_test_support::error_envelope::assert_resource_error;
use serde_json::json;

use crate::common::{init_logging, json_body};
use crate::support::{build_stateless, create_test_app};

#[actix_web::test]
async fn index_greets() {
    init_logging();
    let app = create_test_app(build_stateless().await).build().await;
    let req = test::TestRequest::get().uri("/").to_request();
    let body = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(body, json!({"message": "Welcome to the job portal API"}));
}

#[actix_web::test]
async fn unknown_path_is_json_not_found() {
    init_logging();
    let app = create_test_app(build_stateless().await).build().await;
    for uri in ["/nope", "/companies/1/logo", "/applications"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        assert_resource_error(test::call_service(&app, req).await, StatusCode::NOT_FOUND).await;
    }
}

#[actix_web::test]
async fn unrouted_method_is_json_not_found() {
    init_logging();
    let app = create_test_app(build_stateless().await).build().await;
    let req = test::TestRequest::put().uri("/companies/1").to_request();
    assert_resource_error(test::call_service(&app, req).await, StatusCode::NOT_FOUND).await;
}

#[actix_web::test]
async fn every_response_carries_a_request_id() {
    init_logging();
    let app = create_test_app(build_stateless().await).build().await;
    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id");
    assert_eq!(request_id.len(), 36);
}

#[actix_web::test]
async fn error_trace_id_matches_request_id() {
    init_logging();
    let app = create_test_app(build_stateless().await).build().await;
    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;
    let header = |name: &str| {
        resp.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    assert_eq!(header("x-trace-id"), header("x-request-id"));
    assert!(header("x-trace-id").is_some());
}

#[actix_web::test]
async fn reads_without_database_are_internal_errors() {
    init_logging();
    let app = create_test_app(build_stateless().await).build().await;
    let req = test::TestRequest::get().uri("/companies").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = test::read_body_json(resp).await;
    // Internal detail stays in the logs
    assert_eq!(body["message"], "Internal server error");
}
