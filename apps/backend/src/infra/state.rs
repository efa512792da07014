use crate::auth::CredentialVerifier;
use crate::config::auth::AuthConfig;
use crate::config::db::{DbOwner, DbProfile};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
#[derive(Default)]
pub struct StateBuilder {
    db_profile: Option<DbProfile>,
    verifier: Option<CredentialVerifier>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    /// Use this verifier instead of one built from `AUTH0_*` settings.
    pub fn with_verifier(mut self, verifier: CredentialVerifier) -> Self {
        self.verifier = Some(verifier);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let verifier = match self.verifier {
            Some(verifier) => verifier,
            None => AuthConfig::from_env()?.build_verifier()?,
        };

        match self.db_profile {
            // single entrypoint: connect + migrate
            Some(profile) => {
                let conn = bootstrap_db(profile, DbOwner::App).await?;
                Ok(AppState::new(conn, verifier))
            }
            None => Ok(AppState::without_db(verifier)),
        }
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
