use serde::{Deserialize, Serialize};

/// `aud` may be a single string or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    One(String),
    Many(Vec<String>),
}

/// Verified token payload. Produced once per request and handed to the
/// handler untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSet {
    pub iss: String,
    pub sub: String,
    pub aud: Audience,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Granted scopes. `None` when the claim is absent, which is distinct
    /// from an empty grant.
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
}

impl ClaimSet {
    pub fn has_permission(&self, scope: &str) -> bool {
        self.permissions
            .as_deref()
            .is_some_and(|granted| granted.iter().any(|p| p == scope))
    }
}
