use serde::Serialize;

pub const BACKEND_RUNNING: &str = "✅ Running";
pub const DATABASE_NOT_AVAILABLE: &str = "❌ Not Available";
pub const DATABASE_AVAILABLE: &str = "✅ Available";
pub const DATABASE_WORKING: &str = "✅ Connected & Working";
pub const DATABASE_URL_SET: &str = "✅ Set";
pub const DATABASE_URL_NOT_SET: &str = "❌ Not Set";
pub const CONNECTED: &str = "Connected";
pub const NOT_CONNECTED: &str = "Not Connected";

/// Body of `GET /test`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IntrospectionReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
    pub version: String,
    pub uptime: String,
}

impl IntrospectionReport {
    /// Starting point before any check has run: nothing connected.
    pub fn new(database_url_set: bool, uptime: String) -> Self {
        IntrospectionReport {
            backend: BACKEND_RUNNING.to_string(),
            database: DATABASE_NOT_AVAILABLE.to_string(),
            database_url: if database_url_set { DATABASE_URL_SET } else { DATABASE_URL_NOT_SET }.to_string(),
            database_name: None,
            connection_status: NOT_CONNECTED.to_string(),
            collections: Vec::new(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime,
        }
    }
}
