use actix_web::web;

use crate::handlers::{home::home, system::test_database};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(test_database);
}
