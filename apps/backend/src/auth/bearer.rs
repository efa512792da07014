use super::error::{AuthError, HeaderProblem};

/// Pull the raw token out of an `Authorization` header value.
///
/// The scheme must be exactly `Bearer` followed by a single token.
pub fn token_from_header(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::AuthorizationHeaderMissing)?;
    let parts: Vec<&str> = header.split_whitespace().collect();

    match parts.as_slice() {
        ["Bearer", token] => Ok(token),
        ["Bearer"] => Err(AuthError::InvalidHeader(HeaderProblem::MissingToken)),
        ["Bearer", ..] => Err(AuthError::InvalidHeader(HeaderProblem::Malformed)),
        _ => Err(AuthError::InvalidHeader(HeaderProblem::MissingScheme)),
    }
}
