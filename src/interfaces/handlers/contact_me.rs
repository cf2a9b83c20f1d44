use actix_web::{web, HttpResponse, Responder};
use serde_json::Value;
use tracing::instrument;

use crate::{
    constants::DEFAULT_CONTACT_LIMIT,
    entities::contact_me::ContactListQuery,
    errors::AppError,
    AppState,
};

#[instrument(skip(state, payload))]
pub async fn submit_contact(
    state: web::Data<AppState>,
    payload: web::Json<Value>,
) -> Result<impl Responder, AppError> {
    let response = state.contact_handler
        .submit_contact_message(payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(state, query))]
pub async fn list_contacts(
    state: web::Data<AppState>,
    query: web::Query<ContactListQuery>,
) -> Result<impl Responder, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_CONTACT_LIMIT);

    let messages = state.contact_handler
        .list_contact_messages(limit)
        .await?;

    Ok(HttpResponse::Ok().json(messages))
}
