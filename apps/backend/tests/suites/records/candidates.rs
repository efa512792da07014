use actix_web::http::StatusCode;
use actix_web::test;
use jobportal::auth::scopes;
use jobportal_test_support::error_envelope::assert_resource_error;
use serde_json::json;

use crate::common::{init_logging, json_body};
use crate::support::auth::bearer;
use crate::support::{build_test_state, create_test_app};

const ALL: &[&str] = &[
    scopes::POST_CANDIDATES,
    scopes::PATCH_CANDIDATES,
    scopes::DELETE_CANDIDATES,
];

#[actix_web::test]
async fn create_then_fetch_round_trips_every_field() {
    init_logging();
    let app = create_test_app(build_test_state().await).build().await;
    let submitted = json!({
        "name": "Ada",
        "surname": "Lovelace",
        "date_of_birth": "1815-12-10",
        "city": "London",
        "region": "Middlesex",
        "email": "ada@engine.test",
        "phone": "+44 20 7946 0000",
        "facebook_link": "https://facebook.com/ada",
        "linkedin_link": "https://linkedin.com/in/ada",
        "address": "12 St James's Square",
        "work_experience": "Analytical engine notes",
        "education": "Private tutoring",
        "seeking_job": true,
        "desired_salary": 90000,
        "desired_industry": "Computing",
    });

    let req = test::TestRequest::post()
        .uri("/candidates")
        .insert_header(bearer(ALL))
        .set_json(&submitted)
        .to_request();
    let created = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    let id = created["id"].as_i64().expect("id");

    let req = test::TestRequest::get()
        .uri(&format!("/candidates/{id}"))
        .to_request();
    let fetched = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    let candidate = &fetched["candidate"];
    assert_eq!(candidate["id"], id);
    for (key, value) in submitted.as_object().expect("object") {
        assert_eq!(&candidate[key], value, "field {key}");
    }
}

#[actix_web::test]
async fn dotted_birth_date_is_stored_and_rendered_iso() {
    init_logging();
    let app = create_test_app(build_test_state().await).build().await;
    let req = test::TestRequest::post()
        .uri("/candidates")
        .insert_header(bearer(ALL))
        .set_json(json!({
            "name": "Ada",
            "surname": "Lovelace",
            "date_of_birth": "10.12.1815",
            "seeking_job": true,
            "desired_salary": 90000,
        }))
        .to_request();
    let id = json_body(test::call_service(&app, req).await, StatusCode::OK).await["id"]
        .as_i64()
        .expect("id");

    let req = test::TestRequest::get()
        .uri(&format!("/candidates/{id}"))
        .to_request();
    let body = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    let candidate = &body["candidate"];
    assert_eq!(candidate["date_of_birth"], "1815-12-10");
    assert_eq!(candidate["seeking_job"], true);
    assert_eq!(candidate["desired_salary"], 90000);
    assert_eq!(candidate["email"], json!(null));
}

#[actix_web::test]
async fn list_shows_full_names() {
    init_logging();
    let app = create_test_app(build_test_state().await).build().await;
    for body in [
        json!({"name": "Ada", "surname": "Lovelace"}),
        json!({"name": "Plato"}),
    ] {
        let req = test::TestRequest::post()
            .uri("/candidates")
            .insert_header(bearer(ALL))
            .set_json(body)
            .to_request();
        json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    }

    let req = test::TestRequest::get().uri("/candidates").to_request();
    let body = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    let names: Vec<&str> = body["candidates"]
        .as_object()
        .expect("map")
        .values()
        .filter_map(|v| v.as_str())
        .collect();
    assert!(names.contains(&"Ada Lovelace"));
    assert!(names.contains(&"Plato"));
}

#[actix_web::test]
async fn unreadable_birth_date_is_unprocessable() {
    init_logging();
    let app = create_test_app(build_test_state().await).build().await;
    let req = test::TestRequest::post()
        .uri("/candidates")
        .insert_header(bearer(ALL))
        .set_json(json!({"name": "Ada", "date_of_birth": "tenth of December"}))
        .to_request();
    assert_resource_error(
        test::call_service(&app, req).await,
        StatusCode::UNPROCESSABLE_ENTITY,
    )
    .await;
}

#[actix_web::test]
async fn patch_updates_only_named_fields() {
    init_logging();
    let app = create_test_app(build_test_state().await).build().await;
    let req = test::TestRequest::post()
        .uri("/candidates")
        .insert_header(bearer(ALL))
        .set_json(json!({"name": "Ada", "city": "London", "date_of_birth": "1815-12-10"}))
        .to_request();
    let id = json_body(test::call_service(&app, req).await, StatusCode::OK).await["id"]
        .as_i64()
        .expect("id");

    let req = test::TestRequest::patch()
        .uri(&format!("/candidates/{id}"))
        .insert_header(bearer(ALL))
        .set_json(json!({"date_of_birth": null, "education": "Home tutoring"}))
        .to_request();
    json_body(test::call_service(&app, req).await, StatusCode::OK).await;

    let req = test::TestRequest::get()
        .uri(&format!("/candidates/{id}"))
        .to_request();
    let candidate = json_body(test::call_service(&app, req).await, StatusCode::OK).await
        ["candidate"]
        .clone();
    assert_eq!(candidate["city"], "London");
    assert_eq!(candidate["date_of_birth"], json!(null));
    assert_eq!(candidate["education"], "Home tutoring");
}

#[actix_web::test]
async fn non_numeric_id_is_not_found() {
    init_logging();
    let app = create_test_app(build_test_state().await).build().await;
    let req = test::TestRequest::get().uri("/candidates/abc").to_request();
    assert_resource_error(test::call_service(&app, req).await, StatusCode::NOT_FOUND).await;
}
