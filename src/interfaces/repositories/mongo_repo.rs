use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime as BsonDateTime, Document},
    options::FindOptions,
    Collection, Database,
};

use crate::{
    errors::AppError,
    repositories::document_store::{DocumentStore, GatewayStatus},
    utils::normalize_id::normalize_id,
};

#[derive(Clone, Debug)]
enum Connection {
    Connected(Database),
    Unavailable(String),
}

/// MongoDB backed [`DocumentStore`].
#[derive(Clone, Debug)]
pub struct MongoGateway {
    connection: Connection,
}

impl MongoGateway {
    pub fn connected(db: Database) -> Self {
        MongoGateway { connection: Connection::Connected(db) }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        MongoGateway { connection: Connection::Unavailable(reason.into()) }
    }

    fn database(&self) -> Result<&Database, AppError> {
        match &self.connection {
            Connection::Connected(db) => Ok(db),
            Connection::Unavailable(reason) => Err(AppError::persistence(
                format!("Database not available: {}", reason)
            )),
        }
    }

    fn collection(&self, name: &str) -> Result<Collection<Document>, AppError> {
        Ok(self.database()?.collection::<Document>(name))
    }
}

/// Newest-first find options, or `None` when nothing should be fetched.
/// MongoDB reads a limit of 0 as "no limit".
fn list_options(limit: u32) -> Option<FindOptions> {
    if limit == 0 {
        return None;
    }

    Some(
        FindOptions::builder()
            .sort(doc! { "created_at": -1, "_id": -1 })
            .limit(i64::from(limit))
            .build(),
    )
}

#[async_trait]
impl DocumentStore for MongoGateway {
    async fn create_document(&self, collection: &str, mut document: Document) -> Result<String, AppError> {
        let now = BsonDateTime::now();
        document.insert("created_at", now);
        document.insert("updated_at", now);

        let result = self.collection(collection)?
            .insert_one(document, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to insert document: {}", e);
                AppError::from(e)
            })?;

        Ok(normalize_id(&result.inserted_id))
    }

    async fn get_documents(&self, collection: &str, limit: u32) -> Result<Vec<Document>, AppError> {
        let coll = self.collection(collection)?;

        let Some(options) = list_options(limit) else {
            return Ok(Vec::new());
        };

        let cursor = coll.find(doc! {}, options).await.map_err(|e| {
            tracing::error!(collection = %collection, "Failed to query documents: {}", e);
            AppError::from(e)
        })?;

        let documents: Vec<Document> = cursor.try_collect().await.map_err(|e| {
            tracing::error!(collection = %collection, "Failed to collect documents: {}", e);
            AppError::from(e)
        })?;

        Ok(documents)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        self.database()?
            .list_collection_names(None)
            .await
            .map_err(|e| {
                tracing::warn!("Failed to list collections: {}", e);
                AppError::from(e)
            })
    }

    fn database_name(&self) -> Option<String> {
        match &self.connection {
            Connection::Connected(db) => Some(db.name().to_string()),
            Connection::Unavailable(_) => None,
        }
    }

    fn status(&self) -> GatewayStatus {
        match &self.connection {
            Connection::Connected(_) => GatewayStatus::Connected,
            Connection::Unavailable(reason) => GatewayStatus::Unavailable(reason.clone()),
        }
    }
}
