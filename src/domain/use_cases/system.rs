use std::time::Duration;

use humantime::format_duration;
use tracing::warn;

use crate::{
    constants::{MAX_CHECK_ERROR_LEN, MAX_LISTED_COLLECTIONS, START_TIME},
    entities::system::{
        IntrospectionReport, CONNECTED, DATABASE_AVAILABLE, DATABASE_NOT_AVAILABLE, DATABASE_WORKING,
    },
    repositories::document_store::{DocumentStore, GatewayStatus},
    utils::truncate::truncate_chars,
};

pub struct SystemHandler<S>
where
    S: DocumentStore,
{
    pub store: S,
    database_url_set: bool,
}

impl<S> SystemHandler<S>
where
    S: DocumentStore,
{
    pub fn new(store: S, database_url_set: bool) -> Self {
        SystemHandler { store, database_url_set }
    }

    /// Builds the `/test` report. Each check only touches its own fields, so
    /// a failing collection listing still reports name and connection state.
    pub async fn introspect(&self) -> IntrospectionReport {
        let mut report = IntrospectionReport::new(self.database_url_set, uptime());

        match self.store.status() {
            GatewayStatus::Unavailable(reason) => {
                warn!("Introspection: database unavailable: {}", reason);
                report.database = format!(
                    "{}: {}",
                    DATABASE_NOT_AVAILABLE,
                    truncate_chars(&reason, MAX_CHECK_ERROR_LEN)
                );
                return report;
            }
            GatewayStatus::Connected => {
                report.database = DATABASE_AVAILABLE.to_string();
                report.connection_status = CONNECTED.to_string();
            }
        }

        report.database_name = Some(
            self.store
                .database_name()
                .unwrap_or_else(|| "✅ Connected".to_string()),
        );

        match self.store.list_collection_names().await {
            Ok(mut names) => {
                names.truncate(MAX_LISTED_COLLECTIONS);
                report.collections = names;
                report.database = DATABASE_WORKING.to_string();
            }
            Err(e) => {
                report.database = format!(
                    "⚠️  Connected but Error: {}",
                    truncate_chars(&e.detail(), MAX_CHECK_ERROR_LEN)
                );
            }
        }

        report
    }
}

fn uptime() -> String {
    let elapsed = chrono::Utc::now().signed_duration_since(*START_TIME);
    format_duration(Duration::from_secs(elapsed.num_seconds().max(0) as u64)).to_string()
}
