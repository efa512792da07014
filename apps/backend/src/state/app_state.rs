use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::auth::CredentialVerifier;

/// Shared resources handed to every worker.
#[derive(Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    pub db: Option<DatabaseConnection>,
    pub verifier: Arc<CredentialVerifier>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, verifier: CredentialVerifier) -> Self {
        Self {
            db: Some(db),
            verifier: Arc::new(verifier),
        }
    }

    pub fn without_db(verifier: CredentialVerifier) -> Self {
        Self {
            db: None,
            verifier: Arc::new(verifier),
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
