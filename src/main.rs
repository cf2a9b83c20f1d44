use std::sync::Arc;

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use creator_portfolio::{
    constants::START_TIME,
    db::mongo::connect,
    graceful_shutdown::shutdown_signal,
    repositories::document_store::{DocumentStore, SharedStore},
    routes::configure_routes,
    settings::{AppConfig, AppEnvironment},
    telemetry::init_tracing,
    web::cors::build_cors,
    AppState,
};
use dotenv::dotenv;
use once_cell::sync::Lazy;
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    init_tracing(&AppEnvironment::current());
    Lazy::force(&START_TIME);

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        },
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let store: SharedStore = Arc::new(connect(&config).await);
    tracing::info!("Database gateway {}", store.status());

    let app_state = web::Data::new(AppState::new(&config, store));
    let cors_origins = config.cors_origins();

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(build_cors(&cors_origins))
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}
