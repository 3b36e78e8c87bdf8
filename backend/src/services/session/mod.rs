mod login;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/session";

/// Configures and returns the Actix `Scope` for the login gate.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/login", post().to(login::process))
}
