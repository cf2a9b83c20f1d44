use std::sync::Arc;

use async_trait::async_trait;
use derive_more::Display;
use mongodb::bson::Document;

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Display)]
pub enum GatewayStatus {
    #[display("connected")]
    Connected,

    #[display("unavailable: {_0}")]
    Unavailable(String),
}

/// Document database access used by the use cases.
///
/// Implementations hold one long-lived connection for the whole process and
/// report every I/O failure as [`AppError::PersistenceError`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts `document` into `collection` and returns the new identifier.
    async fn create_document(&self, collection: &str, document: Document) -> Result<String, AppError>;

    /// Up to `limit` documents from `collection`, newest first.
    async fn get_documents(&self, collection: &str, limit: u32) -> Result<Vec<Document>, AppError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError>;

    fn database_name(&self) -> Option<String>;

    fn status(&self) -> GatewayStatus;
}

pub type SharedStore = Arc<dyn DocumentStore>;

#[async_trait]
impl<T> DocumentStore for Arc<T>
where
    T: DocumentStore + ?Sized,
{
    async fn create_document(&self, collection: &str, document: Document) -> Result<String, AppError> {
        (**self).create_document(collection, document).await
    }

    async fn get_documents(&self, collection: &str, limit: u32) -> Result<Vec<Document>, AppError> {
        (**self).get_documents(collection, limit).await
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        (**self).list_collection_names().await
    }

    fn database_name(&self) -> Option<String> {
        (**self).database_name()
    }

    fn status(&self) -> GatewayStatus {
        (**self).status()
    }
}
