use std::sync::Arc;
use std::time::Duration;

use jobportal::auth::error::{AuthError, HeaderProblem};
use jobportal::auth::key_set::KeySetError;
use jobportal::auth::{CredentialVerifier, KeySetCache, KeySource, RemoteKeySource};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::init_logging;
use crate::support::auth::{claims, jwks_json, mint, AUDIENCE, ISSUER, KID, SUBJECT};

const JWKS_PATH: &str = "/.well-known/jwks.json";

fn remote(server: &MockServer, timeout: Duration) -> RemoteKeySource {
    RemoteKeySource::new(format!("{}{JWKS_PATH}", server.uri()), timeout).expect("client")
}

fn verifier(server: &MockServer, ttl: Duration) -> CredentialVerifier {
    let source = remote(server, Duration::from_secs(2));
    CredentialVerifier::new(ISSUER, AUDIENCE, KeySetCache::new(Arc::new(source), ttl))
}

fn bearer() -> String {
    format!("Bearer {}", mint(&claims(&["post:companies"])))
}

#[tokio::test]
async fn fetches_published_keys() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JWKS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(jwks_json()))
        .mount(&server)
        .await;

    let set = remote(&server, Duration::from_secs(2)).fetch().await.expect("jwks");
    assert!(set.keys.iter().any(|k| k.common.key_id.as_deref() == Some(KID)));
}

#[tokio::test]
async fn verification_fetches_once_then_serves_from_cache() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JWKS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(jwks_json()))
        .expect(1)
        .mount(&server)
        .await;

    let verifier = verifier(&server, Duration::from_secs(3600));
    for _ in 0..3 {
        let claims = verifier.verify(Some(&bearer())).await.expect("verified");
        assert_eq!(claims.sub, SUBJECT);
    }
    // `expect(1)` is checked when the server drops
}

#[tokio::test]
async fn expired_snapshot_is_refetched() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JWKS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(jwks_json()))
        .expect(2)
        .mount(&server)
        .await;

    let verifier = verifier(&server, Duration::from_millis(50));
    verifier.verify(Some(&bearer())).await.expect("first");
    tokio::time::sleep(Duration::from_millis(120)).await;
    verifier.verify(Some(&bearer())).await.expect("second");
}

#[tokio::test]
async fn invalidate_forces_a_refetch() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JWKS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(jwks_json()))
        .expect(2)
        .mount(&server)
        .await;

    let cache = KeySetCache::new(
        Arc::new(remote(&server, Duration::from_secs(2))),
        Duration::from_secs(3600),
    );
    assert!(cache.decoding_key(KID).await.expect("first").is_some());
    cache.invalidate();
    assert!(cache.decoding_key(KID).await.expect("second").is_some());
}

#[tokio::test]
async fn error_status_is_reported() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JWKS_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = remote(&server, Duration::from_secs(2)).fetch().await.unwrap_err();
    assert!(matches!(err, KeySetError::Status(503)));
}

#[tokio::test]
async fn slow_issuer_times_out_into_invalid_header() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JWKS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(jwks_json())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let source = remote(&server, Duration::from_millis(100));
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, KeySetError::Fetch(_)));

    let verifier = CredentialVerifier::new(
        ISSUER,
        AUDIENCE,
        KeySetCache::new(Arc::new(source), Duration::from_secs(3600)),
    );
    let err = verifier.verify(Some(&bearer())).await.unwrap_err();
    assert_eq!(err, AuthError::InvalidHeader(HeaderProblem::KeySetUnavailable));
}

#[tokio::test]
async fn garbage_body_is_a_decode_error() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JWKS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = remote(&server, Duration::from_secs(2)).fetch().await.unwrap_err();
    assert!(matches!(err, KeySetError::Decode(_)));
}
