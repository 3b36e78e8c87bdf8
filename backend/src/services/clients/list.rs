use crate::view_model::ClientsViewModel;
use actix_web::{web, HttpResponse, Responder};

/// Actix web handler for `GET /api/clients`.
///
/// Reloads the list from the store and returns it, so the answer always
/// reflects every stored row, duplicates included.
///
/// # Returns
/// - `200 OK` with the client list as a JSON array.
/// - `503 Service Unavailable` with the storage error if the store cannot be read.
///   The list held by the view model is left as it was.
pub async fn process(view_model: web::Data<ClientsViewModel>) -> impl Responder {
    match view_model.fetch_clients().wait().await {
        Ok(()) => HttpResponse::Ok().json(view_model.clients()),
        Err(e) => HttpResponse::ServiceUnavailable()
            .body(format!("Error al cargar clientes: {}", e)),
    }
}
