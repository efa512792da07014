use actix_web::{web, App, HttpServer};
use jobportal::config::db::DbProfile;
use jobportal::infra::state::build_state;
use jobportal::middleware::{cors_middleware, RequestTrace, StructuredLogger, TraceSpan};
use jobportal::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: docker-compose env_file or docker run --env-file
    // - Local dev: source an env file (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("JOBPORTAL_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("PORT must be a valid port number");
            std::process::exit(1);
        });

    // Verifier comes from AUTH0_DOMAIN / API_AUDIENCE
    let app_state = match build_state().with_db(DbProfile::Prod).build().await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(%host, port, "job portal listening");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        // last wrap is outermost
        App::new()
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .wrap(StructuredLogger)
            .wrap(cors_middleware())
            .app_data(data.clone())
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
