//! Application repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::applications_sea as applications_adapter;
use crate::adapters::applications_sea::{CandidateApplicationRow, VacancyApplicationRow};
pub use crate::adapters::applications_sea::ApplicationCreate;
use crate::entities::applications;
use crate::errors::domain::DomainError;

/// Application domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub id: i32,
    pub company_id: i32,
    pub vacancy_id: i32,
    pub candidate_id: i32,
    pub cover_letter: Option<String>,
    pub date_submitted: OffsetDateTime,
}

/// One of a candidate's applications.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateApplication {
    pub application_id: i32,
    pub vacancy_id: i32,
    pub vacancy_job_title: String,
    pub company_id: i32,
    pub company_name: String,
    pub cover_letter: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub date_submitted: OffsetDateTime,
}

/// One application received by a vacancy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VacancyApplication {
    pub vacancy_id: i32,
    pub application_id: i32,
    pub candidate_id: i32,
    pub candidate_name: String,
    pub candidate_surname: Option<String>,
    pub cover_letter: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub date_submitted: OffsetDateTime,
}

pub async fn exists_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    candidate_id: i32,
    vacancy_id: i32,
) -> Result<bool, DomainError> {
    Ok(applications_adapter::exists_for(conn, candidate_id, vacancy_id).await?)
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ApplicationCreate,
) -> Result<Application, DomainError> {
    let row = applications_adapter::create(conn, dto).await?;
    Ok(Application::from(row))
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<(), DomainError> {
    if applications_adapter::delete(conn, id).await? {
        Ok(())
    } else {
        Err(DomainError::application_not_found(id))
    }
}

pub async fn list_for_candidate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    candidate_id: i32,
) -> Result<Vec<CandidateApplication>, DomainError> {
    let rows = applications_adapter::list_for_candidate(conn, candidate_id).await?;
    Ok(rows.into_iter().map(CandidateApplication::from).collect())
}

pub async fn list_for_vacancy<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    vacancy_id: i32,
) -> Result<Vec<VacancyApplication>, DomainError> {
    let rows = applications_adapter::list_for_vacancy(conn, vacancy_id).await?;
    Ok(rows.into_iter().map(VacancyApplication::from).collect())
}

impl From<applications::Model> for Application {
    fn from(model: applications::Model) -> Self {
        Self {
            id: model.id,
            company_id: model.company_id,
            vacancy_id: model.vacancy_id,
            candidate_id: model.candidate_id,
            cover_letter: model.cover_letter,
            date_submitted: model.date_submitted,
        }
    }
}

impl From<CandidateApplicationRow> for CandidateApplication {
    fn from(row: CandidateApplicationRow) -> Self {
        Self {
            application_id: row.application_id,
            vacancy_id: row.vacancy_id,
            vacancy_job_title: row.vacancy_job_title,
            company_id: row.company_id,
            company_name: row.company_name,
            cover_letter: row.cover_letter,
            date_submitted: row.date_submitted,
        }
    }
}

impl From<VacancyApplicationRow> for VacancyApplication {
    fn from(row: VacancyApplicationRow) -> Self {
        Self {
            vacancy_id: row.vacancy_id,
            application_id: row.application_id,
            candidate_id: row.candidate_id,
            candidate_name: row.candidate_name,
            candidate_surname: row.candidate_surname,
            cover_letter: row.cover_letter,
            date_submitted: row.date_submitted,
        }
    }
}
