//! Types shared by every part of the client registry: the persisted models,
//! the request payloads accepted by the backend, the phone-list codec and the
//! form validation rules.

pub mod model;
pub mod phones;
pub mod requests;
pub mod validation;
