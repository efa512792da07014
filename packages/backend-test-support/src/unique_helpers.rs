//! Unique test data built from ULIDs, so rows created by different tests
//! never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`
///
/// ```
/// use jobportal_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("acme");
/// assert_ne!(a, unique_str("acme"));
/// assert!(a.starts_with("acme-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// `{prefix}-{ulid}@example.test`
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new())
}
