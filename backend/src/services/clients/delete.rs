//! Backend logic for `DELETE /api/clients/{document}`, the delete button of a
//! row on the client list.
//!
//! Every stored row with the document is removed, then the client list is
//! reloaded from the store. Deleting a document that does not exist succeeds
//! and simply reloads the list.

use crate::view_model::ClientsViewModel;
use actix_web::{web, HttpResponse, Responder};

/// Actix web handler for `DELETE /api/clients/{document}`.
///
/// # Arguments
/// * `document` - The document number, extracted from the URL path.
/// * `view_model` - The shared `ClientsViewModel`, injected by Actix.
///
/// # Returns
/// - `200 OK` once the rows are gone and the list is reloaded.
/// - `503 Service Unavailable` with the storage error if the delete or reload fails.
pub async fn process(
    document: web::Path<i32>,
    view_model: web::Data<ClientsViewModel>,
) -> impl Responder {
    match view_model.delete_client(document.into_inner()).wait().await {
        Ok(()) => HttpResponse::Ok().body("Cliente eliminado"),
        Err(e) => HttpResponse::ServiceUnavailable()
            .body(format!("Error al eliminar cliente: {}", e)),
    }
}
