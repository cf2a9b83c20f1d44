pub mod normalize_id;
pub mod truncate;
