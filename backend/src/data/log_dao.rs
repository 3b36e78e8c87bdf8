use super::database::Database;
use super::error::StoreError;
use common::model::log_entry::LogEntry;
use rusqlite::params;

/// Append/list access to the `logs` table.
#[derive(Clone)]
pub struct LogDao {
    db: Database,
}

impl LogDao {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn get_all_logs(&self) -> Result<Vec<LogEntry>, StoreError> {
        self.db
            .run(|conn| {
                let mut stmt = conn.prepare("SELECT id, comment FROM logs ORDER BY id")?;
                let logs = stmt
                    .query_map([], |row| {
                        Ok(LogEntry {
                            id: row.get(0)?,
                            comment: row.get(1)?,
                        })
                    })?
                    .collect::<Result<Vec<LogEntry>, _>>()?;
                Ok(logs)
            })
            .await
    }

    pub async fn insert_log(&self, entry: LogEntry) -> Result<i64, StoreError> {
        self.db
            .run(move |conn| {
                conn.execute("INSERT INTO logs (comment) VALUES (?1)", params![entry.comment])?;
                Ok(conn.last_insert_rowid())
            })
            .await
    }
}
