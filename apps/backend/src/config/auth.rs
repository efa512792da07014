use std::sync::Arc;
use std::time::Duration;

use super::{must_var, parsed_var};
use crate::auth::{CredentialVerifier, KeySetCache, RemoteKeySource};
use crate::error::AppError;

const DEFAULT_JWKS_TTL_SECS: u64 = 3600;
const DEFAULT_JWKS_FETCH_TIMEOUT_MS: u64 = 5000;

/// Identity provider settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthConfig {
    /// Issuer host, e.g. `tenant.eu.auth0.com`.
    pub domain: String,
    pub audience: String,
    pub jwks_ttl: Duration,
    pub jwks_fetch_timeout: Duration,
}

impl AuthConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let domain = must_var("AUTH0_DOMAIN")?;
        let domain = domain
            .trim()
            .trim_start_matches("https://")
            .trim_end_matches('/')
            .to_string();
        if domain.is_empty() {
            return Err(AppError::config("AUTH0_DOMAIN is empty"));
        }

        Ok(Self {
            domain,
            audience: must_var("API_AUDIENCE")?,
            jwks_ttl: Duration::from_secs(parsed_var("JWKS_CACHE_TTL_SECS", DEFAULT_JWKS_TTL_SECS)?),
            jwks_fetch_timeout: Duration::from_millis(parsed_var(
                "JWKS_FETCH_TIMEOUT_MS",
                DEFAULT_JWKS_FETCH_TIMEOUT_MS,
            )?),
        })
    }

    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain)
    }

    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.domain)
    }

    /// Verifier backed by the issuer's published key set.
    pub fn build_verifier(&self) -> Result<CredentialVerifier, AppError> {
        let source = RemoteKeySource::new(self.jwks_url(), self.jwks_fetch_timeout)
            .map_err(|e| AppError::config(e.to_string()))?;
        let keys = KeySetCache::new(Arc::new(source), self.jwks_ttl);
        Ok(CredentialVerifier::new(
            self.issuer(),
            self.audience.clone(),
            keys,
        ))
    }
}
