use chrono::{DateTime, Utc};
use mongodb::bson::{self, DateTime as BsonDateTime, Document};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{errors::AppError, utils::normalize_id::normalize_id, validation::not_blank};

/// A contact form submission that passed structural validation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ContactMessage {
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[validate(custom(function = "not_blank"))]
    pub email: String,

    #[validate(custom(function = "not_blank"))]
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// Shape of a `contactmessage` document as it sits in the database.
#[derive(Debug, Deserialize)]
struct StoredContactMessage {
    name: String,
    email: String,
    message: String,
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    created_at: Option<BsonDateTime>,
}

/// A stored message ready for the wire, with its identifier as a string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactMessageView {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl TryFrom<Document> for ContactMessageView {
    type Error = AppError;

    fn try_from(document: Document) -> Result<Self, Self::Error> {
        let id = document
            .get("_id")
            .map(normalize_id)
            .ok_or_else(|| AppError::persistence("Stored contact message has no _id"))?;

        let stored: StoredContactMessage = bson::from_document(document)?;

        Ok(ContactMessageView {
            id,
            name: stored.name,
            email: stored.email,
            message: stored.message,
            subject: stored.subject,
            created_at: stored.created_at.map(|ts| ts.to_chrono()),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactSubmitted {
    pub status: String,
    pub id: String,
}

impl ContactSubmitted {
    pub fn ok(id: String) -> Self {
        ContactSubmitted {
            status: "ok".to_string(),
            id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ContactListQuery {
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};

    #[test]
    fn view_normalizes_object_id() {
        let oid = ObjectId::new();
        let now = BsonDateTime::now();
        let document = doc! {
            "_id": oid,
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hi",
            "created_at": now,
            "updated_at": now,
        };

        let view = ContactMessageView::try_from(document).unwrap();

        assert_eq!(view.id, oid.to_hex());
        assert_eq!(view.name, "Ada");
        assert_eq!(view.subject, None);
        assert_eq!(view.created_at, Some(now.to_chrono()));
    }

    #[test]
    fn view_serializes_identifier_as_string() {
        let document = doc! {
            "_id": ObjectId::new(),
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hi",
        };

        let view = ContactMessageView::try_from(document).unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert!(json["_id"].is_string());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn view_rejects_document_without_id() {
        let document = doc! { "name": "Ada", "email": "ada@example.com", "message": "Hi" };
        assert!(ContactMessageView::try_from(document).is_err());
    }

    #[test]
    fn view_rejects_document_missing_fields() {
        let document = doc! { "_id": ObjectId::new(), "name": "Ada" };
        assert!(matches!(
            ContactMessageView::try_from(document),
            Err(AppError::PersistenceError(_))
        ));
    }

    #[test]
    fn message_without_subject_omits_it_in_storage() {
        let message = ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hi".into(),
            subject: None,
        };

        let document = bson::to_document(&message).unwrap();

        assert!(!document.contains_key("subject"));
        assert_eq!(document.get_str("email").ok(), Some("ada@example.com"));
    }
}
