use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

// Literal patterns; a failure here is a programming error caught by the tests below.
#[allow(clippy::unwrap_used)]
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Za-z0-9._%+-])[A-Za-z0-9._%+-]*(@[A-Za-z0-9.-]+\.[A-Za-z]+)\b").unwrap());

#[allow(clippy::unwrap_used)]
static JWT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\beyJ[A-Za-z0-9_-]*\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]*").unwrap()
});

#[allow(clippy::unwrap_used)]
static OPAQUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9+/_-]{24,}={0,2}").unwrap());

/// Mask e-mail addresses and anything that looks like a credential.
///
/// E-mails keep their first character and domain. Compact JWTs are replaced
/// whole, then any remaining long opaque run.
pub fn redact(input: &str) -> String {
    let masked = EMAIL.replace_all(input, "$1***$2");
    let masked = JWT.replace_all(&masked, "[REDACTED_JWT]");
    OPAQUE.replace_all(&masked, "[REDACTED]").into_owned()
}

/// Display wrapper that redacts on format, for log fields.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
