use actix_web::{guard, web, HttpResponse};
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;
use tracing::info;

use super::{not_null, Mutated};
use crate::auth::{scopes, ClaimSet};
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::extractors::ValidatedJson;
use crate::middleware::RequireScope;
use crate::repos::companies;
use crate::repos::vacancies::{self, Vacancy, VacancyCreate, VacancyPatch, VacancySummary};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct VacancyListResponse {
    success: bool,
    vacancies: Vec<VacancySummary>,
}

#[derive(Debug, Serialize)]
struct VacancyResponse {
    success: bool,
    vacancy: Vacancy,
}

#[derive(Debug, Deserialize)]
pub struct NewVacancy {
    pub job_title: String,
    pub company_id: i32,
    pub job_description: Option<String>,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub min_salary: Option<i32>,
}

impl From<NewVacancy> for VacancyCreate {
    fn from(body: NewVacancy) -> Self {
        Self {
            company_id: body.company_id,
            job_title: body.job_title,
            job_description: body.job_description,
            requirements: body.requirements,
            benefits: body.benefits,
            city: body.city,
            region: body.region,
            min_salary: body.min_salary,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct VacancyChanges {
    #[serde(default, with = "double_option")]
    pub job_title: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub company_id: Option<Option<i32>>,
    #[serde(default, with = "double_option")]
    pub job_description: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub requirements: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub benefits: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub city: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub region: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub min_salary: Option<Option<i32>>,
}

impl TryFrom<VacancyChanges> for VacancyPatch {
    type Error = AppError;

    fn try_from(body: VacancyChanges) -> Result<Self, Self::Error> {
        Ok(Self {
            company_id: not_null(body.company_id, "company_id")?,
            job_title: not_null(body.job_title, "job_title")?,
            job_description: body.job_description,
            requirements: body.requirements,
            benefits: body.benefits,
            city: body.city,
            region: body.region,
            min_salary: body.min_salary,
        })
    }
}

/// A vacancy may only point at a company that exists.
async fn ensure_company<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    company_id: i32,
) -> Result<(), DomainError> {
    match companies::find(conn, company_id).await? {
        Some(_) => Ok(()),
        None => Err(DomainError::validation(format!(
            "company {company_id} does not exist"
        ))),
    }
}

async fn list_vacancies(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let vacancies = vacancies::list(db)
        .await?
        .into_iter()
        .map(VacancySummary::from)
        .collect();

    Ok(HttpResponse::Ok().json(VacancyListResponse {
        success: true,
        vacancies,
    }))
}

async fn get_vacancy(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let vacancy = vacancies::require(db, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(VacancyResponse {
        success: true,
        vacancy,
    }))
}

async fn create_vacancy(
    claims: ClaimSet,
    app_state: web::Data<AppState>,
    body: ValidatedJson<NewVacancy>,
) -> Result<HttpResponse, AppError> {
    let dto = VacancyCreate::from(body.into_inner());
    let id = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            ensure_company(txn, dto.company_id).await?;
            Ok(vacancies::create(txn, dto).await?)
        })
    })
    .await?;

    info!(vacancy_id = id, subject = %claims.sub, "vacancy created");
    Ok(HttpResponse::Ok().json(Mutated::new(id)))
}

async fn update_vacancy(
    claims: ClaimSet,
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<VacancyChanges>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let patch = VacancyPatch::try_from(body.into_inner())?;
    with_txn(&app_state, move |txn| {
        Box::pin(async move {
            // 404 for the path beats 422 for the body
            vacancies::require(txn, id).await?;
            if let Some(company_id) = patch.company_id {
                ensure_company(txn, company_id).await?;
            }
            Ok(vacancies::update(txn, id, patch).await?)
        })
    })
    .await?;

    info!(vacancy_id = id, subject = %claims.sub, "vacancy updated");
    Ok(HttpResponse::Ok().json(Mutated::new(id)))
}

async fn delete_vacancy(
    claims: ClaimSet,
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(vacancies::delete(txn, id).await?) })
    })
    .await?;

    info!(vacancy_id = id, subject = %claims.sub, "vacancy deleted");
    Ok(HttpResponse::Ok().json(Mutated::new(id)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/vacancies")
            .guard(guard::Get())
            .route(web::get().to(list_vacancies)),
    )
    .service(
        web::resource("/vacancies")
            .guard(guard::Post())
            .wrap(RequireScope::new(scopes::POST_VACANCIES))
            .route(web::post().to(create_vacancy)),
    )
    .service(
        web::resource("/vacancies/{id}")
            .guard(guard::Get())
            .route(web::get().to(get_vacancy)),
    )
    .service(
        web::resource("/vacancies/{id}")
            .guard(guard::Patch())
            .wrap(RequireScope::new(scopes::PATCH_VACANCIES))
            .route(web::patch().to(update_vacancy)),
    )
    .service(
        web::resource("/vacancies/{id}")
            .guard(guard::Delete())
            .wrap(RequireScope::new(scopes::DELETE_VACANCIES))
            .route(web::delete().to(delete_vacancy)),
    );
}
