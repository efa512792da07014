use std::collections::BTreeMap;

use actix_web::{guard, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;
use tracing::info;

use super::{not_null, Mutated};
use crate::auth::{scopes, ClaimSet};
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::middleware::RequireScope;
use crate::repos::companies::{self, Company, CompanyCreate, CompanyPatch};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct CompanyListResponse {
    success: bool,
    /// id -> name
    companies: BTreeMap<i32, String>,
}

#[derive(Debug, Serialize)]
struct CompanyResponse {
    success: bool,
    company: Company,
}

#[derive(Debug, Deserialize)]
pub struct NewCompany {
    pub name: String,
    pub industry: Option<String>,
    pub employee: Option<i32>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub logo_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub description: Option<String>,
    pub seeking_employee: Option<bool>,
}

impl From<NewCompany> for CompanyCreate {
    fn from(body: NewCompany) -> Self {
        Self {
            name: body.name,
            industry: body.industry,
            employee: body.employee,
            city: body.city,
            region: body.region,
            address: body.address,
            email: body.email,
            phone: body.phone,
            logo_link: body.logo_link,
            facebook_link: body.facebook_link,
            website_link: body.website_link,
            description: body.description,
            seeking_employee: body.seeking_employee,
        }
    }
}

// Option<Option<T>>: absent = keep, null = clear, value = set.
#[derive(Debug, Default, Deserialize)]
pub struct CompanyChanges {
    #[serde(default, with = "double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub industry: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub employee: Option<Option<i32>>,
    #[serde(default, with = "double_option")]
    pub city: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub region: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub address: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub email: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub phone: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub logo_link: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub facebook_link: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub website_link: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub seeking_employee: Option<Option<bool>>,
}

impl TryFrom<CompanyChanges> for CompanyPatch {
    type Error = AppError;

    fn try_from(body: CompanyChanges) -> Result<Self, Self::Error> {
        Ok(Self {
            name: not_null(body.name, "name")?,
            industry: body.industry,
            employee: body.employee,
            city: body.city,
            region: body.region,
            address: body.address,
            email: body.email,
            phone: body.phone,
            logo_link: body.logo_link,
            facebook_link: body.facebook_link,
            website_link: body.website_link,
            description: body.description,
            seeking_employee: body.seeking_employee,
        })
    }
}

async fn list_companies(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let companies = companies::list(db)
        .await?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();

    Ok(HttpResponse::Ok().json(CompanyListResponse {
        success: true,
        companies,
    }))
}

async fn get_company(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let company = companies::require(db, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(CompanyResponse {
        success: true,
        company,
    }))
}

async fn create_company(
    claims: ClaimSet,
    app_state: web::Data<AppState>,
    body: ValidatedJson<NewCompany>,
) -> Result<HttpResponse, AppError> {
    let dto = CompanyCreate::from(body.into_inner());
    let company = with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(companies::create(txn, dto).await?) })
    })
    .await?;

    info!(company_id = company.id, subject = %claims.sub, "company created");
    Ok(HttpResponse::Ok().json(Mutated::new(company.id)))
}

async fn update_company(
    claims: ClaimSet,
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CompanyChanges>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let patch = CompanyPatch::try_from(body.into_inner())?;
    with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(companies::update(txn, id, patch).await?) })
    })
    .await?;

    info!(company_id = id, subject = %claims.sub, "company updated");
    Ok(HttpResponse::Ok().json(Mutated::new(id)))
}

async fn delete_company(
    claims: ClaimSet,
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(companies::delete(txn, id).await?) })
    })
    .await?;

    info!(company_id = id, subject = %claims.sub, "company deleted");
    Ok(HttpResponse::Ok().json(Mutated::new(id)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/companies")
            .guard(guard::Get())
            .route(web::get().to(list_companies)),
    )
    .service(
        web::resource("/companies")
            .guard(guard::Post())
            .wrap(RequireScope::new(scopes::POST_COMPANIES))
            .route(web::post().to(create_company)),
    )
    .service(
        web::resource("/companies/{id}")
            .guard(guard::Get())
            .route(web::get().to(get_company)),
    )
    .service(
        web::resource("/companies/{id}")
            .guard(guard::Patch())
            .wrap(RequireScope::new(scopes::PATCH_COMPANIES))
            .route(web::patch().to(update_company)),
    )
    .service(
        web::resource("/companies/{id}")
            .guard(guard::Delete())
            .wrap(RequireScope::new(scopes::DELETE_COMPANIES))
            .route(web::delete().to(delete_company)),
    );
}
