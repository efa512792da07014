//! DTOs for applications_sea adapter.

use sea_orm::FromQueryResult;
use time::OffsetDateTime;

/// DTO for inserting an application. `date_submitted` is stamped by the adapter.
#[derive(Debug, Clone)]
pub struct ApplicationCreate {
    pub company_id: i32,
    pub vacancy_id: i32,
    pub candidate_id: i32,
    pub cover_letter: Option<String>,
}

/// An application as seen from the candidate's side.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct CandidateApplicationRow {
    pub application_id: i32,
    pub vacancy_id: i32,
    pub vacancy_job_title: String,
    pub company_id: i32,
    pub company_name: String,
    pub cover_letter: Option<String>,
    pub date_submitted: OffsetDateTime,
}

/// An application as seen from the vacancy's side.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct VacancyApplicationRow {
    pub vacancy_id: i32,
    pub application_id: i32,
    pub candidate_id: i32,
    pub candidate_name: String,
    pub candidate_surname: Option<String>,
    pub cover_letter: Option<String>,
    pub date_submitted: OffsetDateTime,
}
