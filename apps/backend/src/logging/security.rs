use tracing::{debug, warn};

use crate::auth::AuthError;
use crate::trace_ctx;

/// Log a rejected request on a protected route.
pub fn access_denied(scope: &str, path: &str, err: &AuthError) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_ACCESS_DENIED",
        %trace_id,
        scope,
        path,
        reason = err.code(),
        status = err.status().as_u16(),
        "Access denied"
    );
}

/// Log an admitted request on a protected route.
pub fn access_granted(scope: &str, path: &str, subject: &str) {
    let trace_id = trace_ctx::trace_id();

    debug!(
        event = "SECURITY_ACCESS_GRANTED",
        %trace_id,
        scope,
        path,
        subject,
        "Access granted"
    );
}
