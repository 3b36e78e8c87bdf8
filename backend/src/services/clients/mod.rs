//! # Client Service Module
//!
//! HTTP face of the client screens. Every route turns a screen action into an
//! intent on the shared `ClientsViewModel`, waits for the intent to be applied
//! and answers from the view model's client list.
//!
//! ## Sub-modules:
//! - `list`: reloads and returns the whole client list (list screen).
//! - `get`: looks one client up in the list (edit screen, on open).
//! - `save`: validates the create form and saves a new client.
//! - `update`: validates the edit form and updates an existing client.
//! - `delete`: removes every client with a document.

mod delete;
mod get;
mod list;
mod save;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

/// The base path for all client endpoints.
const API_PATH: &str = "/api/clients";

/// Configures and returns the Actix `Scope` for the client routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**: `list::process`. Fetches every stored client into the list
///     and returns it as JSON.
/// *   **`POST /`**: `save::process`. Expects a `SaveClientRequest` with the raw
///     form fields (`document`, `name`, comma separated `phones`).
/// *   **`GET /{document}`**: `get::process`. `404` when the list holds no such client.
/// *   **`PUT /{document}`**: `update::process`. Expects an `UpdateClientRequest`.
///     Updating an unknown document succeeds without changing anything.
/// *   **`DELETE /{document}`**: `delete::process`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(save::process))
        .route("/{document}", get().to(get::process))
        .route("/{document}", put().to(update::process))
        .route("/{document}", delete().to(delete::process))
}
