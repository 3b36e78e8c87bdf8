//! Local persisted store: the SQLite handle, one DAO per table and the
//! repository that fronts them.

pub mod client_dao;
pub mod database;
pub mod error;
pub mod log_dao;
pub mod repository;

pub use client_dao::ClientDao;
pub use database::Database;
pub use error::StoreError;
pub use log_dao::LogDao;
pub use repository::Repository;

/// Repository over a fresh in-memory database.
#[cfg(test)]
pub(crate) fn in_memory_repository() -> Repository {
    let db = Database::open_in_memory().expect("in-memory database");
    Repository::new(ClientDao::new(db.clone()), LogDao::new(db))
}
