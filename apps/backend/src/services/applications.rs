//! Application domain service: submission rules and paged listings.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::pagination::{paginate, Page, ITEMS_PER_PAGE};
use crate::repos::applications::{
    self as applications_repo, Application, ApplicationCreate, CandidateApplication,
    VacancyApplication,
};
use crate::repos::{candidates as candidates_repo, vacancies as vacancies_repo};

/// What a caller submits against a vacancy.
#[derive(Debug, Clone)]
pub struct Submission {
    pub candidate_id: i32,
    pub cover_letter: Option<String>,
    /// Optional; when present it must match the vacancy's company.
    pub company_id: Option<i32>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ApplicationService;

impl ApplicationService {
    pub fn new() -> Self {
        Self
    }

    /// File `submission` against `vacancy_id`.
    ///
    /// A missing vacancy is `NotFound`; a missing candidate or a mismatched
    /// company is a validation failure; a second application by the same
    /// candidate is `DuplicateApplication`.
    pub async fn submit<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        vacancy_id: i32,
        submission: Submission,
    ) -> Result<Application, AppError> {
        let vacancy = vacancies_repo::require(conn, vacancy_id).await?;

        if let Some(company_id) = submission.company_id {
            if company_id != vacancy.company_id {
                return Err(DomainError::validation(format!(
                    "company {company_id} does not own vacancy {vacancy_id}"
                ))
                .into());
            }
        }

        if candidates_repo::find(conn, submission.candidate_id)
            .await?
            .is_none()
        {
            return Err(DomainError::validation(format!(
                "candidate {} does not exist",
                submission.candidate_id
            ))
            .into());
        }

        if applications_repo::exists_for(conn, submission.candidate_id, vacancy_id).await? {
            return Err(DomainError::conflict(
                ConflictKind::DuplicateApplication,
                format!(
                    "candidate {} already applied to vacancy {vacancy_id}",
                    submission.candidate_id
                ),
            )
            .into());
        }

        // The unique index still catches a concurrent duplicate; db_errors
        // maps it to the same conflict.
        let application = applications_repo::create(
            conn,
            ApplicationCreate {
                company_id: vacancy.company_id,
                vacancy_id,
                candidate_id: submission.candidate_id,
                cover_letter: submission.cover_letter,
            },
        )
        .await?;

        info!(
            application_id = application.id,
            vacancy_id,
            candidate_id = application.candidate_id,
            "application submitted"
        );
        Ok(application)
    }

    pub async fn withdraw<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        application_id: i32,
    ) -> Result<(), AppError> {
        applications_repo::delete(conn, application_id).await?;
        Ok(())
    }

    pub async fn for_candidate<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        candidate_id: i32,
        page: u64,
    ) -> Result<Page<CandidateApplication>, AppError> {
        let all = applications_repo::list_for_candidate(conn, candidate_id).await?;
        Ok(paginate(all, page, ITEMS_PER_PAGE)?)
    }

    pub async fn for_vacancy<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        vacancy_id: i32,
        page: u64,
    ) -> Result<Page<VacancyApplication>, AppError> {
        let all = applications_repo::list_for_vacancy(conn, vacancy_id).await?;
        Ok(paginate(all, page, ITEMS_PER_PAGE)?)
    }
}
