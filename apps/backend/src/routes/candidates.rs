use std::collections::BTreeMap;

use actix_web::{guard, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;
use time::Date;
use tracing::info;

use super::{not_null, Mutated};
use crate::auth::{scopes, ClaimSet};
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::middleware::RequireScope;
use crate::repos::candidates::{self, Candidate, CandidateCreate, CandidatePatch};
use crate::state::app_state::AppState;
use crate::utils::dates::parse_date;

#[derive(Debug, Serialize)]
struct CandidateListResponse {
    success: bool,
    /// id -> "name surname"
    candidates: BTreeMap<i32, String>,
}

#[derive(Debug, Serialize)]
struct CandidateResponse {
    success: bool,
    candidate: Candidate,
}

fn birth_date(raw: Option<String>) -> Result<Option<Date>, AppError> {
    raw.map(|raw| {
        parse_date(&raw).map_err(|_| {
            AppError::unprocessable("date_of_birth must be YYYY-MM-DD or DD.MM.YYYY")
        })
    })
    .transpose()
}

#[derive(Debug, Deserialize)]
pub struct NewCandidate {
    pub name: String,
    pub surname: Option<String>,
    pub date_of_birth: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub facebook_link: Option<String>,
    pub linkedin_link: Option<String>,
    pub address: Option<String>,
    pub work_experience: Option<String>,
    pub education: Option<String>,
    pub seeking_job: Option<bool>,
    pub desired_salary: Option<i32>,
    pub desired_industry: Option<String>,
}

impl TryFrom<NewCandidate> for CandidateCreate {
    type Error = AppError;

    fn try_from(body: NewCandidate) -> Result<Self, Self::Error> {
        Ok(Self {
            name: body.name,
            surname: body.surname,
            date_of_birth: birth_date(body.date_of_birth)?,
            city: body.city,
            region: body.region,
            email: body.email,
            phone: body.phone,
            facebook_link: body.facebook_link,
            linkedin_link: body.linkedin_link,
            address: body.address,
            work_experience: body.work_experience,
            education: body.education,
            seeking_job: body.seeking_job,
            desired_salary: body.desired_salary,
            desired_industry: body.desired_industry,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateChanges {
    #[serde(default, with = "double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub surname: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub date_of_birth: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub city: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub region: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub email: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub phone: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub facebook_link: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub linkedin_link: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub address: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub work_experience: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub education: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub seeking_job: Option<Option<bool>>,
    #[serde(default, with = "double_option")]
    pub desired_salary: Option<Option<i32>>,
    #[serde(default, with = "double_option")]
    pub desired_industry: Option<Option<String>>,
}

impl TryFrom<CandidateChanges> for CandidatePatch {
    type Error = AppError;

    fn try_from(body: CandidateChanges) -> Result<Self, Self::Error> {
        Ok(Self {
            name: not_null(body.name, "name")?,
            surname: body.surname,
            date_of_birth: body.date_of_birth.map(birth_date).transpose()?,
            city: body.city,
            region: body.region,
            email: body.email,
            phone: body.phone,
            facebook_link: body.facebook_link,
            linkedin_link: body.linkedin_link,
            address: body.address,
            work_experience: body.work_experience,
            education: body.education,
            seeking_job: body.seeking_job,
            desired_salary: body.desired_salary,
            desired_industry: body.desired_industry,
        })
    }
}

async fn list_candidates(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let candidates = candidates::list(db)
        .await?
        .into_iter()
        .map(|c| (c.id, c.full_name()))
        .collect();

    Ok(HttpResponse::Ok().json(CandidateListResponse {
        success: true,
        candidates,
    }))
}

async fn get_candidate(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let candidate = candidates::require(db, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(CandidateResponse {
        success: true,
        candidate,
    }))
}

async fn create_candidate(
    claims: ClaimSet,
    app_state: web::Data<AppState>,
    body: ValidatedJson<NewCandidate>,
) -> Result<HttpResponse, AppError> {
    let dto = CandidateCreate::try_from(body.into_inner())?;
    let candidate = with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(candidates::create(txn, dto).await?) })
    })
    .await?;

    info!(candidate_id = candidate.id, subject = %claims.sub, "candidate created");
    Ok(HttpResponse::Ok().json(Mutated::new(candidate.id)))
}

async fn update_candidate(
    claims: ClaimSet,
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CandidateChanges>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let patch = CandidatePatch::try_from(body.into_inner())?;
    with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(candidates::update(txn, id, patch).await?) })
    })
    .await?;

    info!(candidate_id = id, subject = %claims.sub, "candidate updated");
    Ok(HttpResponse::Ok().json(Mutated::new(id)))
}

async fn delete_candidate(
    claims: ClaimSet,
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(candidates::delete(txn, id).await?) })
    })
    .await?;

    info!(candidate_id = id, subject = %claims.sub, "candidate deleted");
    Ok(HttpResponse::Ok().json(Mutated::new(id)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/candidates")
            .guard(guard::Get())
            .route(web::get().to(list_candidates)),
    )
    .service(
        web::resource("/candidates")
            .guard(guard::Post())
            .wrap(RequireScope::new(scopes::POST_CANDIDATES))
            .route(web::post().to(create_candidate)),
    )
    .service(
        web::resource("/candidates/{id}")
            .guard(guard::Get())
            .route(web::get().to(get_candidate)),
    )
    .service(
        web::resource("/candidates/{id}")
            .guard(guard::Patch())
            .wrap(RequireScope::new(scopes::PATCH_CANDIDATES))
            .route(web::patch().to(update_candidate)),
    )
    .service(
        web::resource("/candidates/{id}")
            .guard(guard::Delete())
            .wrap(RequireScope::new(scopes::DELETE_CANDIDATES))
            .route(web::delete().to(delete_candidate)),
    );
}
