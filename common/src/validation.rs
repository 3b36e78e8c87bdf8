//! Checks applied to the client forms before an intent is issued.
//!
//! Messages are user facing and shown as-is.

use crate::phones;
use crate::requests::{SaveClientRequest, UpdateClientRequest};
use thiserror::Error;

/// Maximum number of phone numbers a client form accepts.
pub const MAX_PHONES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor, complete todos los campos")]
    MissingFields,
    #[error("El documento debe ser un número entero")]
    InvalidDocument,
    #[error("No se pueden agregar más de 5 números de teléfono.")]
    TooManyPhones,
}

/// A create-client form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    pub document: i32,
    pub name: String,
    pub phones: Vec<String>,
}

/// An edit-client form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientEdit {
    pub name: String,
    pub phones: Vec<String>,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Splits the comma separated phone field and enforces [`MAX_PHONES`].
pub fn parse_phone_input(text: &str) -> Result<Vec<String>, ValidationError> {
    let list = phones::decode(text);
    if list.len() > MAX_PHONES {
        return Err(ValidationError::TooManyPhones);
    }
    Ok(list)
}

pub fn validate_new_client(request: &SaveClientRequest) -> Result<NewClient, ValidationError> {
    if is_blank(&request.document) || is_blank(&request.name) || is_blank(&request.phones) {
        return Err(ValidationError::MissingFields);
    }
    let document = request
        .document
        .trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::InvalidDocument)?;
    let phones = parse_phone_input(&request.phones)?;

    Ok(NewClient {
        document,
        name: request.name.clone(),
        phones,
    })
}

pub fn validate_client_edit(request: &UpdateClientRequest) -> Result<ClientEdit, ValidationError> {
    if is_blank(&request.name) || is_blank(&request.phones) {
        return Err(ValidationError::MissingFields);
    }
    let phones = parse_phone_input(&request.phones)?;

    Ok(ClientEdit {
        name: request.name.clone(),
        phones,
    })
}
