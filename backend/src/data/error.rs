use thiserror::Error;

/// Failure of a persisted store operation.
///
/// Store and repository calls never swallow these; they surface to whoever
/// issued the operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("blocking store task failed: {0}")]
    Worker(String),

    #[error("client view model is closed")]
    Closed,
}
