//! Domain-level error type used across repos and services.
//!
//! HTTP- and DB-agnostic. Handlers return `Result<_, crate::error::AppError>`
//! and convert through `From<DomainError> for AppError`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    DbUnavailable,
    Other(String),
}

/// Records that can be missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Company,
    Candidate,
    Vacancy,
    Application,
    Record,
}

/// Conflicts that map to their own response
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// Same candidate applied to the same vacancy twice.
    DuplicateApplication,
    /// A row is still referenced, or references a missing row.
    ForeignKey,
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input rejected by a business rule
    Validation(String),
    Conflict(ConflictKind, String),
    NotFound(NotFoundKind, String),
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(d) => write!(f, "validation error: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    pub fn company_not_found(id: i32) -> Self {
        Self::not_found(NotFoundKind::Company, format!("company {id} not found"))
    }
    pub fn candidate_not_found(id: i32) -> Self {
        Self::not_found(NotFoundKind::Candidate, format!("candidate {id} not found"))
    }
    pub fn vacancy_not_found(id: i32) -> Self {
        Self::not_found(NotFoundKind::Vacancy, format!("vacancy {id} not found"))
    }
    pub fn application_not_found(id: i32) -> Self {
        Self::not_found(
            NotFoundKind::Application,
            format!("application {id} not found"),
        )
    }
}
