use std::borrow::Cow;

use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

use crate::{entities::contact_me::ContactMessage, errors::{AppError, FieldError}};

const REQUIRED: &str = "field required";
const NOT_A_STRING: &str = "must be a string";

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be empty")));
    }
    Ok(())
}

/// Turns an arbitrary JSON payload into a [`ContactMessage`].
///
/// Every offending field is reported, not only the first one. Presence and
/// type are checked against the raw payload, emptiness through the
/// `Validate` rules on the typed message. Unknown fields are ignored.
pub fn parse_contact_message(payload: &Value) -> Result<ContactMessage, AppError> {
    let Some(object) = payload.as_object() else {
        return Err(AppError::ValidationError(vec![
            FieldError::new("body", "must be a JSON object"),
        ]));
    };

    let mut errors = Vec::new();
    let name = required_string(object, "name", &mut errors);
    let email = required_string(object, "email", &mut errors);
    let message = required_string(object, "message", &mut errors);
    let subject = optional_string(object, "subject", &mut errors);

    let contact = ContactMessage {
        name: name.unwrap_or_default(),
        email: email.unwrap_or_default(),
        message: message.unwrap_or_default(),
        subject,
    };

    if let Err(validation) = contact.validate() {
        if let AppError::ValidationError(rule_errors) = AppError::from(validation) {
            for rule_error in rule_errors {
                if !errors.iter().any(|e: &FieldError| e.field == rule_error.field) {
                    errors.push(rule_error);
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(contact)
    } else {
        errors.sort_by(|a, b| a.field.cmp(&b.field));
        Err(AppError::ValidationError(errors))
    }
}

fn required_string(object: &Map<String, Value>, field: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    match object.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(field, REQUIRED));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new(field, NOT_A_STRING));
            None
        }
    }
}

fn optional_string(object: &Map<String, Value>, field: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    match object.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new(field, NOT_A_STRING));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field_errors(result: Result<ContactMessage, AppError>) -> Vec<FieldError> {
        match result {
            Err(AppError::ValidationError(errors)) => errors,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn accepts_complete_message() {
        let contact = parse_contact_message(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hi",
        }))
        .unwrap();

        assert_eq!(contact.name, "Ada");
        assert_eq!(contact.subject, None);
    }

    #[test]
    fn keeps_subject_and_ignores_unknown_fields() {
        let contact = parse_contact_message(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hi",
            "subject": "Collab",
            "newsletter": true,
        }))
        .unwrap();

        assert_eq!(contact.subject.as_deref(), Some("Collab"));
    }

    #[test]
    fn email_format_is_not_checked() {
        let result = parse_contact_message(&json!({
            "name": "Ada",
            "email": "not-an-email",
            "message": "Hi",
        }));
        assert!(result.is_ok());
    }

    #[test]
    fn reports_every_missing_field() {
        let errors = field_errors(parse_contact_message(&json!({})));

        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "message", "name"]);
        assert!(errors.iter().all(|e| e.message == REQUIRED));
    }

    #[test]
    fn reports_empty_and_wrong_type_together() {
        let errors = field_errors(parse_contact_message(&json!({
            "name": "   ",
            "email": 42,
            "message": "Hi",
        })));

        assert_eq!(errors, vec![
            FieldError::new("email", NOT_A_STRING),
            FieldError::new("name", "must not be empty"),
        ]);
    }

    #[test]
    fn null_counts_as_missing() {
        let errors = field_errors(parse_contact_message(&json!({
            "name": null,
            "email": "ada@example.com",
            "message": "Hi",
        })));

        assert_eq!(errors, vec![FieldError::new("name", REQUIRED)]);
    }

    #[test]
    fn rejects_non_string_subject() {
        let errors = field_errors(parse_contact_message(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hi",
            "subject": ["a"],
        })));

        assert_eq!(errors, vec![FieldError::new("subject", NOT_A_STRING)]);
    }

    #[test]
    fn rejects_non_object_payload() {
        let errors = field_errors(parse_contact_message(&json!(["Ada"])));
        assert_eq!(errors[0].field, "body");
    }
}
