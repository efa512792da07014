use actix_web::{guard, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::Mutated;
use crate::auth::{scopes, ClaimSet};
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{PageQuery, ValidatedJson};
use crate::middleware::RequireScope;
use crate::pagination::Page;
use crate::services::applications::{ApplicationService, Submission};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct ApplicationListResponse<T> {
    success: bool,
    applications_list: Vec<T>,
    number_applications: usize,
}

impl<T> From<Page<T>> for ApplicationListResponse<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            success: true,
            applications_list: page.items,
            number_applications: page.total,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewApplication {
    pub candidate_id: i32,
    pub cover_letter: Option<String>,
    pub company_id: Option<i32>,
}

impl From<NewApplication> for Submission {
    fn from(body: NewApplication) -> Self {
        Self {
            candidate_id: body.candidate_id,
            cover_letter: body.cover_letter,
            company_id: body.company_id,
        }
    }
}

async fn candidate_applications(
    _claims: ClaimSet,
    path: web::Path<i32>,
    page: PageQuery,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let page = ApplicationService::new()
        .for_candidate(db, path.into_inner(), page.get())
        .await?;

    Ok(HttpResponse::Ok().json(ApplicationListResponse::from(page)))
}

async fn vacancy_applications(
    _claims: ClaimSet,
    path: web::Path<i32>,
    page: PageQuery,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let page = ApplicationService::new()
        .for_vacancy(db, path.into_inner(), page.get())
        .await?;

    Ok(HttpResponse::Ok().json(ApplicationListResponse::from(page)))
}

async fn submit_application(
    claims: ClaimSet,
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<NewApplication>,
) -> Result<HttpResponse, AppError> {
    let vacancy_id = path.into_inner();
    let submission = Submission::from(body.into_inner());
    let application = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            ApplicationService::new()
                .submit(txn, vacancy_id, submission)
                .await
        })
    })
    .await?;

    info!(application_id = application.id, subject = %claims.sub, "application accepted");
    Ok(HttpResponse::Ok().json(Mutated::new(application.id)))
}

async fn withdraw_application(
    claims: ClaimSet,
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    with_txn(&app_state, move |txn| {
        Box::pin(async move { ApplicationService::new().withdraw(txn, id).await })
    })
    .await?;

    info!(application_id = id, subject = %claims.sub, "application withdrawn");
    Ok(HttpResponse::Ok().json(Mutated::new(id)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/candidates/{id}/applications")
            .guard(guard::Get())
            .wrap(RequireScope::new(scopes::GET_APPLICATIONS))
            .route(web::get().to(candidate_applications)),
    )
    .service(
        web::resource("/vacancies/{id}/applications")
            .guard(guard::Get())
            .wrap(RequireScope::new(scopes::GET_CANDIDATES))
            .route(web::get().to(vacancy_applications)),
    )
    .service(
        web::resource("/vacancies/{id}/applications")
            .guard(guard::Post())
            .wrap(RequireScope::new(scopes::POST_APPLICATION))
            .route(web::post().to(submit_application)),
    )
    .service(
        web::resource("/applications/{id}")
            .guard(guard::Delete())
            .wrap(RequireScope::new(scopes::DELETE_APPLICATION))
            .route(web::delete().to(withdraw_application)),
    );
}
