use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use async_trait::async_trait;
use creator_portfolio::{
    errors::AppError,
    repositories::{
        document_store::{DocumentStore, GatewayStatus, SharedStore},
        mongo_repo::MongoGateway,
    },
    routes::configure_routes,
    settings::{AppConfig, AppEnvironment},
    web::cors::build_cors,
    AppState,
};
use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime, Document};
use reqwest::Client;
use serde_json::Value;
use std::{
    collections::HashMap,
    net::TcpListener,
    sync::{Arc, Mutex},
    time::Duration,
};

pub struct TestApp {
    pub address: String,
    pub client: Client,
}

impl TestApp {
    pub async fn spawn(store: SharedStore) -> Self {
        Self::spawn_with_config(store, test_config()).await
    }

    pub async fn spawn_with_config(store: SharedStore, config: AppConfig) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let state = web::Data::new(AppState::new(&config, store));
        let cors_origins = config.cors_origins();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .wrap(NormalizePath::trim())
                .wrap(build_cors(&cors_origins))
                .configure(configure_routes)
        })
        .listen(listener)
        .expect("Failed to bind server")
        .workers(config.worker_count)
        .run();

        tokio::spawn(server);

        let client = Client::new();
        while client.get(&format!("{}/", address)).send().await.is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        Self { address, client }
    }

    pub async fn submit_contact(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(&format!("{}/api/contact", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to submit contact message")
    }

    pub async fn list_contacts(&self, limit: Option<&str>) -> reqwest::Response {
        let url = match limit {
            Some(limit) => format!("{}/api/contact?limit={}", self.address, limit),
            None => format!("{}/api/contact", self.address),
        };

        self.client
            .get(&url)
            .send()
            .await
            .expect("Failed to list contact messages")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(&format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Request failed")
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Creator Portfolio Test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        worker_count: 1,
        database_url: Some("mongodb://127.0.0.1:27017/portfolio_test".to_string()),
        database_name: None,
        database_connect_retries: 0,
        database_timeout_secs: 1,
        cors_allowed_origins: vec!["*".to_string()],
    }
}

pub fn valid_contact() -> Value {
    serde_json::json!({
        "name": "Ada",
        "email": "ada@example.com",
        "message": "Hi"
    })
}

/// Document store kept in memory, newest documents last.
#[derive(Default)]
pub struct InMemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
}

impl InMemoryStore {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn create_document(&self, collection: &str, mut document: Document) -> Result<String, AppError> {
        let id = ObjectId::new();
        document.insert("_id", id);
        document.insert("created_at", BsonDateTime::now());

        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(id.to_hex())
    }

    async fn get_documents(&self, collection: &str, limit: u32) -> Result<Vec<Document>, AppError> {
        let collections = self.collections.lock().unwrap();
        Ok(collections
            .get(collection)
            .map(|docs| docs.iter().rev().take(limit as usize).cloned().collect())
            .unwrap_or_default())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        Ok(self.collections.lock().unwrap().keys().cloned().collect())
    }

    fn database_name(&self) -> Option<String> {
        Some("memory".to_string())
    }

    fn status(&self) -> GatewayStatus {
        GatewayStatus::Connected
    }
}

/// A connected store whose every I/O call is rejected.
pub struct BrokenStore;

#[async_trait]
impl DocumentStore for BrokenStore {
    async fn create_document(&self, _collection: &str, _document: Document) -> Result<String, AppError> {
        Err(AppError::persistence("write rejected: not primary"))
    }

    async fn get_documents(&self, _collection: &str, _limit: u32) -> Result<Vec<Document>, AppError> {
        Err(AppError::persistence("read rejected: connection reset"))
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        Err(AppError::persistence("server selection timed out after 1000 ms while listing collections"))
    }

    fn database_name(&self) -> Option<String> {
        Some("portfolio".to_string())
    }

    fn status(&self) -> GatewayStatus {
        GatewayStatus::Connected
    }
}

pub fn unavailable_gateway() -> SharedStore {
    Arc::new(MongoGateway::unavailable("DATABASE_URL not set"))
}
