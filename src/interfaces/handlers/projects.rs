use actix_web::{HttpResponse, Responder};

use crate::entities::project::catalog;

pub async fn get_projects() -> impl Responder {
    HttpResponse::Ok().json(catalog())
}
