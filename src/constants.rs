use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const CONTACT_COLLECTION: &str = "contactmessage";
pub const DEFAULT_CONTACT_LIMIT: u32 = 10;
pub const DEFAULT_DATABASE_NAME: &str = "portfolio";

pub const MAX_LISTED_COLLECTIONS: usize = 10;
pub const MAX_CHECK_ERROR_LEN: usize = 50;
pub const MAX_ERROR_DETAIL_LEN: usize = 200;
