use actix_web::error::ResponseError;
use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::auth::AuthError;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind};
use crate::pagination::PaginationError;
use crate::trace_ctx;

/// Body for every non-auth failure.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

/// Body for authentication and authorization failures.
#[derive(Debug, Serialize)]
pub struct AuthErrorBody {
    pub code: &'static str,
    pub description: &'static str,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("Bad request: {detail}")]
    BadRequest { detail: String },
    #[error("Not found: {detail}")]
    NotFound { detail: String },
    #[error("Not acceptable: {detail}")]
    NotAcceptable { detail: String },
    #[error("Unprocessable: {detail}")]
    Unprocessable { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Database unavailable")]
    DbUnavailable,
}

impl AppError {
    /// Public message for the envelope. Details stay in logs.
    fn message(&self) -> &'static str {
        match self {
            AppError::Auth(e) => e.description(),
            AppError::BadRequest { .. } => "Bad request",
            AppError::NotFound { .. } => "Not found",
            AppError::NotAcceptable { .. } => "Not acceptable",
            AppError::Unprocessable { .. } => "Unprocessable",
            AppError::Internal { .. } | AppError::Config { .. } | AppError::DbUnavailable => {
                "Internal server error"
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Auth(e) => e.status(),
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::NotAcceptable { .. } => StatusCode::NOT_ACCEPTABLE,
            AppError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal { .. } | AppError::Config { .. } | AppError::DbUnavailable => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::BadRequest {
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound {
            detail: detail.into(),
        }
    }

    pub fn not_acceptable(detail: impl Into<String>) -> Self {
        Self::NotAcceptable {
            detail: detail.into(),
        }
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::Unprocessable {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn db_unavailable() -> Self {
        Self::DbUnavailable
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(_, detail) => AppError::NotFound { detail },
            DomainError::Conflict(ConflictKind::DuplicateApplication, detail) => {
                AppError::NotAcceptable { detail }
            }
            DomainError::Conflict(_, detail) | DomainError::Validation(detail) => {
                AppError::Unprocessable { detail }
            }
            DomainError::Infra(InfraErrorKind::DbUnavailable, _) => AppError::DbUnavailable,
            DomainError::Infra(kind, detail) => AppError::Internal {
                detail: format!("{kind:?}: {detail}"),
            },
        }
    }
}

impl From<PaginationError> for AppError {
    fn from(e: PaginationError) -> Self {
        AppError::not_found(e.to_string())
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::from(e).into()
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let trace_id = trace_ctx::trace_id();

        if status.is_server_error() {
            error!(trace_id = %trace_id, error = %self, "request failed");
        } else {
            debug!(trace_id = %trace_id, error = %self, "request rejected");
        }

        let mut builder = HttpResponse::build(status);
        builder.insert_header(("x-trace-id", trace_id));

        match self {
            AppError::Auth(e) => {
                if status == StatusCode::UNAUTHORIZED {
                    builder.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
                }
                builder.json(AuthErrorBody {
                    code: e.code(),
                    description: e.description(),
                })
            }
            _ => builder.json(ErrorBody {
                success: false,
                error: status.as_u16(),
                message: self.message(),
            }),
        }
    }
}
