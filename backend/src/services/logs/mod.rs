//! Read/append access to the `logs` table.
//!
//! None of the client intents write here; these routes are the only way in.

use crate::data::Repository;
use actix_web::web::{get, post, scope};
use actix_web::{web, HttpResponse, Responder, Scope};
use common::model::log_entry::LogEntry;
use common::requests::NewLogRequest;

const API_PATH: &str = "/api/logs";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list))
        .route("", post().to(create))
}

async fn list(repository: web::Data<Repository>) -> impl Responder {
    match repository.get_all_logs().await {
        Ok(logs) => HttpResponse::Ok().json(logs),
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("Error al leer logs: {}", e)),
    }
}

async fn create(
    payload: web::Json<NewLogRequest>,
    repository: web::Data<Repository>,
) -> impl Responder {
    let entry = LogEntry::new(payload.into_inner().comment);
    match repository.insert_log(entry).await {
        Ok(id) => HttpResponse::Ok().json(serde_json::json!({ "id": id })),
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("Error al guardar log: {}", e)),
    }
}
