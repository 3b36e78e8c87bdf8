use crate::view_model::ClientsViewModel;
use actix_web::{web, HttpResponse, Responder};
use common::requests::UpdateClientRequest;
use common::validation::validate_client_edit;
use log::warn;

/// Handler for `PUT /api/clients/{document}`.
///
/// The edit form cannot change the document. An unknown document is not an
/// error: the view model skips the update and the response is still `200 OK`.
///
/// # Arguments
/// * `document` - The document number of the client being edited, from the URL path.
/// * `payload` - The edit form as typed: `name` and comma separated `phones`.
/// * `view_model` - The shared `ClientsViewModel`, injected by Actix.
///
/// # Returns
/// - `200 OK` once the update (or the skip) is applied.
/// - `400 Bad Request` with the validation message when the form is incomplete or invalid.
/// - `503 Service Unavailable` with the storage error if the lookup, write or reload fails.
pub async fn process(
    document: web::Path<i32>,
    payload: web::Json<UpdateClientRequest>,
    view_model: web::Data<ClientsViewModel>,
) -> impl Responder {
    let edit = match validate_client_edit(&payload) {
        Ok(edit) => edit,
        Err(e) => {
            warn!("edit-client form rejected: {}", e);
            return HttpResponse::BadRequest().body(e.to_string());
        }
    };

    match view_model
        .update_client(document.into_inner(), edit.name, edit.phones)
        .wait()
        .await
    {
        Ok(()) => HttpResponse::Ok().body("Cliente actualizado exitosamente"),
        Err(e) => HttpResponse::ServiceUnavailable()
            .body(format!("Error al actualizar cliente: {}", e)),
    }
}
