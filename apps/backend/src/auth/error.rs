//! Typed reasons a request fails authentication or authorization.
//!
//! Every variant carries a stable wire code and a human description. The
//! HTTP boundary renders these as `{"code": .., "description": ..}`.

use actix_web::http::StatusCode;
use thiserror::Error;

/// Why the `Authorization` header itself was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderProblem {
    /// First part is not the literal `Bearer`.
    MissingScheme,
    /// `Bearer` with nothing after it.
    MissingToken,
    /// More than two space-separated parts.
    Malformed,
    /// JOSE header could not be decoded.
    Unparseable,
    /// JOSE header decoded but carries no `kid`.
    MissingKeyId,
    /// No key in the key set matches the `kid`.
    UnknownKey,
    /// The key set could not be loaded at all.
    KeySetUnavailable,
}

impl HeaderProblem {
    pub const fn description(self) -> &'static str {
        match self {
            HeaderProblem::MissingScheme => "Authorization header must start with Bearer",
            HeaderProblem::MissingToken => "Token not found.",
            HeaderProblem::Malformed => "Authorization header must be bearer token.",
            HeaderProblem::Unparseable => "Unable to parse authentication token.",
            HeaderProblem::MissingKeyId => "Authorization malformed.",
            HeaderProblem::UnknownKey => "Unable to find the appropriate key.",
            HeaderProblem::KeySetUnavailable => "Unable to fetch the key set.",
        }
    }
}

/// Which claim check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimProblem {
    /// Audience, issuer or a required registered claim did not validate.
    AudienceOrIssuer,
    /// Token verified but has no `permissions` claim.
    PermissionsMissing,
}

impl ClaimProblem {
    pub const fn description(self) -> &'static str {
        match self {
            ClaimProblem::AudienceOrIssuer => {
                "Incorrect claims. Please, check the audience and issuer."
            }
            ClaimProblem::PermissionsMissing => "Permissions not included in JWT.",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("authorization header missing")]
    AuthorizationHeaderMissing,
    #[error("invalid header: {}", .0.description())]
    InvalidHeader(HeaderProblem),
    #[error("invalid token signature")]
    InvalidToken,
    #[error("token expired")]
    TokenExpired,
    #[error("invalid claims: {}", .0.description())]
    InvalidClaims(ClaimProblem),
    #[error("required scope not granted")]
    Unauthorized,
}

impl AuthError {
    pub const fn code(&self) -> &'static str {
        match self {
            AuthError::AuthorizationHeaderMissing => "authorization_header_missing",
            AuthError::InvalidHeader(_) => "invalid_header",
            AuthError::InvalidToken => "invalid_token",
            AuthError::TokenExpired => "token_expired",
            AuthError::InvalidClaims(_) => "invalid_claims",
            AuthError::Unauthorized => "unauthorized",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            AuthError::AuthorizationHeaderMissing => "Authorization header is expected.",
            AuthError::InvalidHeader(problem) => problem.description(),
            AuthError::InvalidToken => "Unable to verify token signature.",
            AuthError::TokenExpired => "Token expired.",
            AuthError::InvalidClaims(problem) => problem.description(),
            AuthError::Unauthorized => "Permission not found.",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::InvalidClaims(ClaimProblem::PermissionsMissing)
            | AuthError::Unauthorized => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}
