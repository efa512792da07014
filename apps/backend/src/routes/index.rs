use actix_web::{web, HttpResponse};
use serde_json::json;

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Welcome to the job portal API" }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
}
