use mongodb::bson::Bson;

/// Renders a database identifier as a plain string.
///
/// `ObjectId`s become their 24 character hex form, strings pass through
/// untouched and anything else falls back to its BSON display form.
pub fn normalize_id(value: &Bson) -> String {
    match value {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}
