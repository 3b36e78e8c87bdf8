use serde::{Deserialize, Serialize};

/// A free-text entry of the append-only `logs` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Surrogate row id, `0` until persisted.
    pub id: i64,
    pub comment: String,
}

impl LogEntry {
    pub fn new(comment: impl Into<String>) -> Self {
        Self {
            id: 0,
            comment: comment.into(),
        }
    }
}
