use mongodb::bson;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    constants::CONTACT_COLLECTION,
    entities::contact_me::{ContactMessageView, ContactSubmitted},
    errors::AppError,
    repositories::document_store::DocumentStore,
    validation::parse_contact_message,
};

pub struct ContactHandler<S>
where
    S: DocumentStore,
{
    pub store: S,
}

impl<S> ContactHandler<S>
where
    S: DocumentStore,
{
    pub fn new(store: S) -> Self {
        ContactHandler { store }
    }

    /// Validates and stores a contact form submission.
    /// Nothing is written when validation fails.
    pub async fn submit_contact_message(&self, payload: Value) -> Result<ContactSubmitted, AppError> {
        let message = parse_contact_message(&payload)?;

        let document = bson::to_document(&message)?;

        let id = self.store.create_document(CONTACT_COLLECTION, document).await?;
        info!(contact_id = %id, "Contact message stored");

        Ok(ContactSubmitted::ok(id))
    }

    /// The `limit` most recent messages, newest first.
    ///
    /// Unreadable stored records still count towards `limit` and are
    /// dropped afterwards, so the result can be shorter than `limit`.
    pub async fn list_contact_messages(&self, limit: u32) -> Result<Vec<ContactMessageView>, AppError> {
        let documents = self.store.get_documents(CONTACT_COLLECTION, limit).await?;

        let mut skipped = 0usize;
        let messages: Vec<ContactMessageView> = documents
            .into_iter()
            .take(limit as usize)
            .filter_map(|document| match ContactMessageView::try_from(document) {
                Ok(view) => Some(view),
                Err(e) => {
                    warn!("Skipping unreadable contact message: {}", e);
                    skipped += 1;
                    None
                }
            })
            .collect();

        if skipped > 0 {
            debug!(skipped, returned = messages.len(), limit, "Contact listing came back short");
        }

        Ok(messages)
    }
}
