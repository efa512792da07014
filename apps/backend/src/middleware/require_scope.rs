//! Per-route authorization.
//!
//! `RequireScope::new("post:companies")` wraps a single route. Each request
//! runs the credential verifier and then the access gate; on success the
//! verified `ClaimSet` is stored in the request extensions for the handler,
//! otherwise the auth error envelope is returned and the handler never runs.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage};
use futures_util::future::LocalBoxFuture;

use crate::auth::{authorize, AuthError, ClaimSet};
use crate::error::AppError;
use crate::logging::security;
use crate::state::app_state::AppState;

#[derive(Debug, Clone, Copy)]
pub struct RequireScope {
    scope: &'static str,
}

impl RequireScope {
    pub fn new(scope: &'static str) -> Self {
        Self { scope }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireScope
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireScopeMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireScopeMiddleware {
            service: Rc::new(service),
            scope: self.scope,
        }))
    }
}

pub struct RequireScopeMiddleware<S> {
    service: Rc<S>,
    scope: &'static str,
}

impl<S, B> Service<ServiceRequest> for RequireScopeMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let scope = self.scope;

        // A value that is not visible ASCII cannot start with "Bearer".
        let authorization = req
            .headers()
            .get(header::AUTHORIZATION)
            .map(|value| value.to_str().unwrap_or_default().to_string());
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let path = req.path().to_string();

        Box::pin(async move {
            let Some(state) = state else {
                let err = AppError::internal("AppState not available");
                return Ok(req.error_response(err).map_into_right_body());
            };

            match admit(&state, authorization.as_deref(), scope).await {
                Ok(claims) => {
                    security::access_granted(scope, &path, &claims.sub);
                    req.extensions_mut().insert(claims);
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(err) => {
                    security::access_denied(scope, &path, &err);
                    Ok(req
                        .error_response(AppError::from(err))
                        .map_into_right_body())
                }
            }
        })
    }
}

async fn admit(
    state: &AppState,
    authorization: Option<&str>,
    scope: &str,
) -> Result<ClaimSet, AuthError> {
    let claims = state.verifier.verify(authorization).await?;
    authorize(&claims, scope)?;
    Ok(claims)
}
