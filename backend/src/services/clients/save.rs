//! # Client Creation Service
//!
//! Backend logic for `POST /api/clients`, the create-client screen's save button.
//!
//! ## Workflow
//!
//! 1.  **Validation**: the raw form fields are checked with
//!     `common::validation::validate_new_client` (no blank field, integer
//!     document, at most five phones). A rejected form never reaches the store.
//!
//! 2.  **Save intent**: the validated client is handed to
//!     `ClientsViewModel::save_client`, and the handler waits for the intent
//!     worker to insert the row and append it to the client list.
//!
//! A document that is already stored is not an error: a second row with the
//! same document is inserted, and the list keeps showing the first one.

use crate::view_model::ClientsViewModel;
use actix_web::{web, HttpResponse, Responder};
use common::requests::SaveClientRequest;
use common::validation::validate_new_client;
use log::{info, warn};

/// Actix web handler for `POST /api/clients`.
///
/// # Arguments
/// * `payload` - The create form as typed: `document`, `name` and comma separated `phones`.
/// * `view_model` - The shared `ClientsViewModel`, injected by Actix.
///
/// # Returns
/// - `200 OK` with a confirmation message once the client is stored.
/// - `400 Bad Request` with the validation message when the form is incomplete or invalid.
/// - `503 Service Unavailable` with the storage error if the insert fails.
pub async fn process(
    payload: web::Json<SaveClientRequest>,
    view_model: web::Data<ClientsViewModel>,
) -> impl Responder {
    let client = match validate_new_client(&payload) {
        Ok(client) => client,
        Err(e) => {
            warn!("create-client form rejected: {}", e);
            return HttpResponse::BadRequest().body(e.to_string());
        }
    };

    let document = client.document;
    match view_model
        .save_client(client.document, client.name, client.phones)
        .wait()
        .await
    {
        Ok(()) => {
            info!("client {} saved", document);
            HttpResponse::Ok().body("Cliente guardado exitosamente")
        }
        Err(e) => HttpResponse::ServiceUnavailable()
            .body(format!("Error al guardar cliente: {}", e)),
    }
}
