use serde::{Deserialize, Serialize};

/// Credentials typed on the login form.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of a successful login.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginResponse {
    pub authenticated: bool,
}

/// Raw fields of the create-client form.
///
/// Fields arrive as typed text; `phones` is a comma separated list. They are
/// checked with [`crate::validation::validate_new_client`] before anything is
/// stored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SaveClientRequest {
    pub document: String,
    pub name: String,
    pub phones: String,
}

/// Raw fields of the edit-client form. The document comes from the path.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateClientRequest {
    pub name: String,
    pub phones: String,
}

/// Payload for appending a log entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewLogRequest {
    pub comment: String,
}
