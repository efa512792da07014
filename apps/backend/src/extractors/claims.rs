use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::auth::ClaimSet;
use crate::error::AppError;

/// Hands the claims verified by `RequireScope` to the handler.
///
/// Only valid behind `RequireScope`; on an unguarded route there is nothing
/// in the extensions and extraction fails closed with 500.
impl FromRequest for ClaimSet {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<ClaimSet>()
                .cloned()
                .ok_or_else(|| AppError::internal("claims requested on an unguarded route")),
        )
    }
}
