use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;

use crate::error::AppError;

pub mod applications;
pub mod candidates;
pub mod companies;
pub mod health;
pub mod index;
pub mod vacancies;

/// Register every route plus the extractor configs they rely on.
///
/// The JSON not-found fallback is an `App` setting; pair this with
/// `.default_service(web::to(routes::not_found))`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // `/companies/abc` is a path that does not exist, not a bad request.
    cfg.app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::not_found(err.to_string()).into()),
    );

    cfg.configure(index::configure_routes)
        .configure(health::configure_routes)
        .configure(companies::configure_routes)
        .configure(candidates::configure_routes)
        .configure(vacancies::configure_routes)
        .configure(applications::configure_routes);
}

/// Fallback for unknown paths and methods.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(format!(
        "no route for {} {}",
        req.method(),
        req.path()
    )))
}

/// `{"success": true, "id": id}`, the reply to every mutation.
#[derive(Debug, Serialize)]
pub struct Mutated {
    pub success: bool,
    pub id: i32,
}

impl Mutated {
    pub fn new(id: i32) -> Self {
        Self { success: true, id }
    }
}

/// Collapse a PATCH field for a NOT NULL column: absent stays absent, an
/// explicit `null` is rejected.
pub(crate) fn not_null<T>(value: Option<Option<T>>, field: &str) -> Result<Option<T>, AppError> {
    match value {
        None => Ok(None),
        Some(Some(v)) => Ok(Some(v)),
        Some(None) => Err(AppError::unprocessable(format!("{field} cannot be null"))),
    }
}
