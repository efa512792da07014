pub mod auth;
pub mod db;

use std::env;

use crate::error::AppError;

/// Required environment variable, or a configuration error naming it.
pub(crate) fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}

/// Optional variable parsed as `T`, with a default when unset.
pub(crate) fn parsed_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("Environment variable '{name}' is not valid: '{raw}'"))),
        Err(_) => Ok(default),
    }
}
