mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases, validation};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, telemetry, utils, web};

use repositories::document_store::SharedStore;
use use_cases::{contact::ContactHandler, system::SystemHandler};

pub struct AppState {
    pub contact_handler: ContactHandler<SharedStore>,
    pub system_handler: SystemHandler<SharedStore>,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, store: SharedStore) -> Self {
        AppState {
            contact_handler: ContactHandler::new(store.clone()),
            system_handler: SystemHandler::new(store, config.database_url_set()),
        }
    }
}
