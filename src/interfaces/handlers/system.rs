use actix_web::{get, web, HttpResponse, Responder};
use tracing::instrument;

use crate::AppState;

/// Health and database introspection. Always answers 200; problems are
/// reported inside the body.
#[get("/test")]
#[instrument(skip(state))]
pub async fn test_database(state: web::Data<AppState>) -> impl Responder {
    let report = state.system_handler.introspect().await;
    HttpResponse::Ok().json(report)
}
