use std::collections::HashMap;
use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};

use crate::error::AppError;

/// The `?page=` query parameter. Absent or non-numeric means page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery(pub u64);

impl PageQuery {
    pub fn parse(query: &str) -> Self {
        let page = web::Query::<HashMap<String, String>>::from_query(query)
            .ok()
            .and_then(|params| params.get("page").and_then(|v| v.trim().parse::<i64>().ok()))
            .unwrap_or(1);
        // Negative pages can never hold items; 0 is rejected by the slicer.
        PageQuery(u64::try_from(page).unwrap_or(0))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl FromRequest for PageQuery {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(PageQuery::parse(req.query_string())))
    }
}
