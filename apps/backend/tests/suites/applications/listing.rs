use actix_web::http::StatusCode;
use actix_web::test;
use jobportal::auth::scopes;
use jobportal::db::require_db;
use jobportal::services::applications::{ApplicationService, Submission};
use jobportal::state::app_state::AppState;
use jobportal_test_support::error_envelope::assert_resource_error;

use crate::common::{init_logging, json_body};
use crate::support::auth::bearer;
use crate::support::{build_test_state, create_test_app, factory};

/// One vacancy with `n` applicants; returns (vacancy_id, candidate ids).
async fn vacancy_with_applicants(state: &AppState, n: usize) -> (i32, Vec<i32>) {
    let company_id = factory::company(state).await;
    let vacancy_id = factory::vacancy(state, company_id).await;
    let candidates = factory::candidates(state, n).await;
    let db = require_db(state).expect("db");
    for &candidate_id in &candidates {
        ApplicationService::new()
            .submit(
                db,
                vacancy_id,
                Submission {
                    candidate_id,
                    cover_letter: None,
                    company_id: None,
                },
            )
            .await
            .expect("submit");
    }
    (vacancy_id, candidates)
}

fn page_uri(vacancy_id: i32, query: &str) -> String {
    format!("/vacancies/{vacancy_id}/applications{query}")
}

#[actix_web::test]
async fn twenty_five_applicants_span_three_pages() {
    init_logging();
    let state = build_test_state().await;
    let (vacancy_id, candidates) = vacancy_with_applicants(&state, 25).await;
    let app = create_test_app(state).build().await;

    let get = |query: &str| {
        test::TestRequest::get()
            .uri(&page_uri(vacancy_id, query))
            .insert_header(bearer(&[scopes::GET_CANDIDATES]))
            .to_request()
    };

    for (query, expected) in [("", 10), ("?page=1", 10), ("?page=2", 10), ("?page=3", 5)] {
        let body = json_body(test::call_service(&app, get(query)).await, StatusCode::OK).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["number_applications"], 25);
        assert_eq!(
            body["applications_list"].as_array().expect("list").len(),
            expected,
            "query {query:?}"
        );
    }

    // Ordered by application id, so page 3 holds the last five applicants
    let body = json_body(test::call_service(&app, get("?page=3")).await, StatusCode::OK).await;
    let on_page: Vec<i64> = body["applications_list"]
        .as_array()
        .expect("list")
        .iter()
        .filter_map(|row| row["candidate_id"].as_i64())
        .collect();
    let expected: Vec<i64> = candidates[20..].iter().map(|&id| i64::from(id)).collect();
    assert_eq!(on_page, expected);

    for query in ["?page=4", "?page=0", "?page=-1"] {
        assert_resource_error(test::call_service(&app, get(query)).await, StatusCode::NOT_FOUND)
            .await;
    }

    // Non-numeric falls back to page 1
    let body = json_body(test::call_service(&app, get("?page=abc")).await, StatusCode::OK).await;
    assert_eq!(body["applications_list"].as_array().expect("list").len(), 10);
}

#[actix_web::test]
async fn vacancy_rows_carry_candidate_names() {
    init_logging();
    let state = build_test_state().await;
    let (vacancy_id, _) = vacancy_with_applicants(&state, 1).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get()
        .uri(&page_uri(vacancy_id, ""))
        .insert_header(bearer(&[scopes::GET_CANDIDATES]))
        .to_request();
    let body = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    let row = &body["applications_list"][0];
    assert_eq!(row["vacancy_id"], vacancy_id);
    assert!(row["candidate_name"].as_str().is_some_and(|n| n.starts_with("cand-")));
    assert_eq!(row["candidate_surname"], "Tester");
    assert!(row["date_submitted"].is_string());
}

#[actix_web::test]
async fn candidate_rows_carry_vacancy_and_company() {
    init_logging();
    let state = build_test_state().await;
    let (vacancy_id, candidates) = vacancy_with_applicants(&state, 1).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get()
        .uri(&format!("/candidates/{}/applications", candidates[0]))
        .insert_header(bearer(&[scopes::GET_APPLICATIONS]))
        .to_request();
    let body = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(body["number_applications"], 1);
    let row = &body["applications_list"][0];
    assert_eq!(row["vacancy_id"], vacancy_id);
    assert!(row["vacancy_job_title"].as_str().is_some_and(|t| t.starts_with("role-")));
    assert!(row["company_name"].as_str().is_some_and(|n| n.starts_with("company-")));
    assert!(row["application_id"].as_i64().is_some());
}

#[actix_web::test]
async fn empty_listing_is_not_found() {
    init_logging();
    let state = build_test_state().await;
    let (vacancy_id, _) = vacancy_with_applicants(&state, 0).await;
    let candidate_id = factory::candidate(&state).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get()
        .uri(&page_uri(vacancy_id, ""))
        .insert_header(bearer(&[scopes::GET_CANDIDATES]))
        .to_request();
    assert_resource_error(test::call_service(&app, req).await, StatusCode::NOT_FOUND).await;

    let req = test::TestRequest::get()
        .uri(&format!("/candidates/{candidate_id}/applications"))
        .insert_header(bearer(&[scopes::GET_APPLICATIONS]))
        .to_request();
    assert_resource_error(test::call_service(&app, req).await, StatusCode::NOT_FOUND).await;
}
