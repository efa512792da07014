//! Assertions for the two error body shapes the API returns.
//!
//! Resource errors: `{"success": false, "error": <status>, "message": ...}`.
//! Auth errors: `{"code": ..., "description": ...}`.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ResourceErrorLike {
    success: bool,
    error: u16,
    message: String,
}

#[derive(Debug, Deserialize)]
struct AuthErrorLike {
    code: String,
    description: String,
}

fn assert_trace_header(headers: &HeaderMap) {
    let trace_id = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");
    assert!(!trace_id.is_empty(), "x-trace-id should not be empty");
}

/// Check status, `x-trace-id`, and the `{"success": false, ...}` envelope.
pub fn assert_resource_error_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_status: StatusCode,
) {
    assert_eq!(status, expected_status);
    assert_trace_header(headers);

    let envelope: ResourceErrorLike =
        serde_json::from_slice(body).expect("body should be the resource error envelope");
    assert!(!envelope.success);
    assert_eq!(envelope.error, expected_status.as_u16());
    assert!(!envelope.message.is_empty());
}

/// Check status, `x-trace-id`, the auth error code, and (on 401) the
/// `WWW-Authenticate` challenge. Returns the description for finer checks.
pub fn assert_auth_error_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_status: StatusCode,
    expected_code: &str,
) -> String {
    assert_eq!(status, expected_status);
    assert_trace_header(headers);

    if expected_status == StatusCode::UNAUTHORIZED {
        let challenge = headers
            .get("www-authenticate")
            .expect("401 should carry WWW-Authenticate");
        assert_eq!(challenge, "Bearer");
    }

    let envelope: AuthErrorLike =
        serde_json::from_slice(body).expect("body should be the auth error envelope");
    assert_eq!(envelope.code, expected_code);
    envelope.description
}

pub async fn assert_resource_error(resp: ServiceResponse<BoxBody>, expected_status: StatusCode) {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;
    assert_resource_error_parts(status, &headers, &body, expected_status);
}

pub async fn assert_auth_error(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
) -> String {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;
    assert_auth_error_parts(status, &headers, &body, expected_status, expected_code)
}
