use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use anyhow::Context;
use tracing::{error, info};

use text_compare_service::config::{Config, SecurityConfig};
use text_compare_service::{init_tracing, routes, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Load configuration
    let config_path = std::env::var("CONFIG_PATH").ok();
    let config = match Config::discover(config_path.as_deref().map(std::path::Path::new)) {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState::new(config.clone()).context("failed to build comparison service")?;

    info!(
        "Starting text compare service on port {} ({} algorithm, {} stop words)",
        config.server.port,
        state.compare_service.algorithm(),
        state.compare_service.stopwords().len()
    );

    // Create HTTP server
    let security = config.security.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors(&security))
            .wrap(Logger::default())
            .configure(routes::configure(state.clone()))
    })
    .bind(format!("{}:{}", config.server.host, config.server.port))?;

    info!(
        "Server started successfully at http://{}:{}",
        config.server.host, config.server.port
    );

    // Run the server
    server.workers(config.server.workers).run().await?;
    Ok(())
}

fn cors(security: &SecurityConfig) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    if security.allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_any_origin();
    }
    security
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
