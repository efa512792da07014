//! Company repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::companies_sea as companies_adapter;
pub use crate::adapters::companies_sea::{CompanyCreate, CompanyPatch};
use crate::entities::companies;
use crate::errors::domain::DomainError;

/// Company domain model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Company {
    pub id: i32,
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

pub async fn list<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<Company>, DomainError> {
    let rows = companies_adapter::list_all(conn).await?;
    Ok(rows.into_iter().map(Company::from).collect())
}

pub async fn find<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<Company>, DomainError> {
    let row = companies_adapter::find_by_id(conn, id).await?;
    Ok(row.map(Company::from))
}

/// Like [`find`], but a missing row is `NotFound`.
pub async fn require<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Company, DomainError> {
    find(conn, id)
        .await?
        .ok_or_else(|| DomainError::company_not_found(id))
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CompanyCreate,
) -> Result<Company, DomainError> {
    let row = companies_adapter::create(conn, dto).await?;
    Ok(Company::from(row))
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
    patch: CompanyPatch,
) -> Result<Company, DomainError> {
    companies_adapter::update(conn, id, patch)
        .await?
        .map(Company::from)
        .ok_or_else(|| DomainError::company_not_found(id))
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<(), DomainError> {
    if companies_adapter::delete(conn, id).await? {
        Ok(())
    } else {
        Err(DomainError::company_not_found(id))
    }
}

impl From<companies::Model> for Company {
    fn from(model: companies::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            industry: model.industry,
            employee: model.employee,
            city: model.city,
            region: model.region,
            address: model.address,
            email: model.email,
            phone: model.phone,
            logo_link: model.logo_link,
            facebook_link: model.facebook_link,
            website_link: model.website_link,
            description: model.description,
            seeking_employee: model.seeking_employee,
        }
    }
}
