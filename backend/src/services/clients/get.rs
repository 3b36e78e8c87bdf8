use crate::view_model::ClientsViewModel;
use actix_web::{web, HttpResponse, Responder};

/// Handler for `GET /api/clients/{document}`.
///
/// Reads from the view model's list, not from the store: a client that is
/// stored but not yet fetched into the list is reported as missing.
///
/// # Returns
/// - `200 OK` with the `Client` as JSON.
/// - `404 Not Found` when the list holds no client with that document.
pub async fn process(
    document: web::Path<i32>,
    view_model: web::Data<ClientsViewModel>,
) -> impl Responder {
    match view_model.find_client(document.into_inner()) {
        Some(client) => HttpResponse::Ok().json(client),
        None => HttpResponse::NotFound().body("Cliente no encontrado"),
    }
}
