use mongodb::{
    bson::doc,
    options::ClientOptions,
    Client, Database,
};
use std::time::Duration;
use tracing::{error, info, warn};

use crate::{
    constants::DEFAULT_DATABASE_NAME,
    repositories::mongo_repo::MongoGateway,
    settings::AppConfig,
};

/// Connects the process-wide gateway. Never fails: a missing URL or an
/// unreachable server yields a gateway in the unavailable state.
pub async fn connect(config: &AppConfig) -> MongoGateway {
    let Some(url) = config.database_url.as_deref().filter(|url| !url.trim().is_empty()) else {
        warn!("DATABASE_URL not set, running without a database");
        return MongoGateway::unavailable("DATABASE_URL not set");
    };

    info!(
        budget = ?config.database_connect_budget(),
        "Connecting to the database before binding the port"
    );

    match open_database(url, config).await {
        Ok(db) => {
            info!(database = %db.name(), "Database connection established.");
            MongoGateway::connected(db)
        }
        Err(e) => {
            error!("Database unavailable, continuing in degraded mode: {}", e);
            MongoGateway::unavailable(e.to_string())
        }
    }
}

async fn open_database(url: &str, config: &AppConfig) -> Result<Database, mongodb::error::Error> {
    let mut options = ClientOptions::parse(url).await?;
    options.app_name = Some(config.name.clone());
    options.server_selection_timeout = Some(Duration::from_secs(config.database_timeout_secs));

    let database_name = config
        .database_name
        .clone()
        .or_else(|| options.default_database.clone())
        .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string());

    let client = Client::with_options(options)?;
    let db = client.database(&database_name);

    let max_retries = config.database_connect_retries;
    let mut retry_count = 0;
    let mut wait_seconds = 1;

    loop {
        match db.run_command(doc! { "ping": 1 }, None).await {
            Ok(_) => return Ok(db),
            Err(e) if retry_count < max_retries => {
                retry_count += 1;
                info!(
                    "Failed to reach database (attempt {}/{}): {}. Retrying in {}s...",
                    retry_count, max_retries, e, wait_seconds);

                tokio::time::sleep(Duration::from_secs(wait_seconds)).await;

                wait_seconds *= 2;
            }
            Err(e) => return Err(e),
        }
    }
}
