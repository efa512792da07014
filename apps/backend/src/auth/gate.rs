use super::claims::ClaimSet;
use super::error::{AuthError, ClaimProblem};

/// Decide whether `claims` grant `required_scope`.
pub fn authorize(claims: &ClaimSet, required_scope: &str) -> Result<(), AuthError> {
    if claims.permissions.is_none() {
        return Err(AuthError::InvalidClaims(ClaimProblem::PermissionsMissing));
    }

    if claims.has_permission(required_scope) {
        Ok(())
    } else {
        Err(AuthError::Unauthorized)
    }
}
