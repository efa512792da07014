//! Vacancy repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::vacancies_sea as vacancies_adapter;
pub use crate::adapters::vacancies_sea::{VacancyCreate, VacancyPatch};
use crate::entities::{companies, vacancies};
use crate::errors::domain::DomainError;

/// Vacancy domain model, including the owning company's name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vacancy {
    pub id: i32,
    pub job_title: String,
    pub job_description: Option<String>,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub min_salary: Option<i32>,
    #[serde(with = "time::serde::rfc3339")]
    pub date_posted: OffsetDateTime,
    pub company_id: i32,
    pub company_name: String,
}

/// The listing view of a vacancy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VacancySummary {
    pub id: i32,
    pub job_title: String,
    pub city: Option<String>,
    pub region: Option<String>,
    pub min_salary: Option<i32>,
    #[serde(with = "time::serde::rfc3339")]
    pub date_posted: OffsetDateTime,
    pub company_id: i32,
    pub company_name: String,
}

impl From<Vacancy> for VacancySummary {
    fn from(v: Vacancy) -> Self {
        Self {
            id: v.id,
            job_title: v.job_title,
            city: v.city,
            region: v.region,
            min_salary: v.min_salary,
            date_posted: v.date_posted,
            company_id: v.company_id,
            company_name: v.company_name,
        }
    }
}

pub async fn list<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<Vacancy>, DomainError> {
    let rows = vacancies_adapter::list_with_company(conn).await?;
    Ok(rows.into_iter().map(Vacancy::from).collect())
}

pub async fn find<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<Vacancy>, DomainError> {
    let row = vacancies_adapter::find_with_company(conn, id).await?;
    Ok(row.map(Vacancy::from))
}

pub async fn require<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Vacancy, DomainError> {
    find(conn, id)
        .await?
        .ok_or_else(|| DomainError::vacancy_not_found(id))
}

/// Returns the new vacancy's id.
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: VacancyCreate,
) -> Result<i32, DomainError> {
    let row = vacancies_adapter::create(conn, dto).await?;
    Ok(row.id)
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
    patch: VacancyPatch,
) -> Result<i32, DomainError> {
    vacancies_adapter::update(conn, id, patch)
        .await?
        .map(|row| row.id)
        .ok_or_else(|| DomainError::vacancy_not_found(id))
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<(), DomainError> {
    if vacancies_adapter::delete(conn, id).await? {
        Ok(())
    } else {
        Err(DomainError::vacancy_not_found(id))
    }
}

impl From<(vacancies::Model, Option<companies::Model>)> for Vacancy {
    fn from((model, company): (vacancies::Model, Option<companies::Model>)) -> Self {
        Self {
            id: model.id,
            job_title: model.job_title,
            job_description: model.job_description,
            requirements: model.requirements,
            benefits: model.benefits,
            city: model.city,
            region: model.region,
            min_salary: model.min_salary,
            date_posted: model.date_posted,
            company_id: model.company_id,
            // company_id is a NOT NULL foreign key, so the join always matches.
            company_name: company.map(|c| c.name).unwrap_or_default(),
        }
    }
}
