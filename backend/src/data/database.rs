//! SQLite handle shared by the client and log DAOs.
//!
//! One `Database` is opened at startup and cloned into every DAO that needs
//! it. All clones share a single connection behind a mutex, so writes coming
//! from different tasks are applied one after the other.

use super::error::StoreError;
use log::debug;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Opens (or creates) the database file at `path` and makes sure both
    /// tables exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        debug!("opening client database at {}", path.display());
        Self::init_with_connection(Connection::open(path)?)
    }

    /// In-memory database, gone when the last clone is dropped.
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init_with_connection(Connection::open_in_memory()?)
    }

    fn init_with_connection(conn: Connection) -> Result<Self, StoreError> {
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn init_schema(conn: &Connection) -> Result<(), StoreError> {
        // No UNIQUE on `document`: duplicate documents are accepted.
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS clients (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                document INTEGER NOT NULL,
                name TEXT NOT NULL,
                phones TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_clients_document ON clients(document);

            CREATE TABLE IF NOT EXISTS logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                comment TEXT NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    /// Runs `op` against the connection on tokio's blocking pool.
    ///
    /// The caller's task is suspended, not blocked, while SQLite works. A
    /// panic inside `op` comes back as `StoreError::Worker`; the connection
    /// stays usable for the next call.
    pub(crate) async fn run<T, F>(&self, op: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        let handle = tokio::task::spawn_blocking(move || {
            let guard = conn.lock().unwrap_or_else(PoisonError::into_inner);
            op(&guard)
        });

        match handle.await {
            Ok(result) => result,
            Err(join_err) => Err(StoreError::Worker(join_err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn schema_is_created_once() {
        let db = Database::open_in_memory().unwrap();
        let tables: Vec<String> = db
            .run(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('clients', 'logs') ORDER BY name",
                )?;
                let names = stmt
                    .query_map([], |row| row.get(0))?
                    .collect::<Result<Vec<String>, _>>()?;
                Ok(names)
            })
            .await
            .unwrap();
        assert_eq!(tables, vec!["clients", "logs"]);

        // Re-running the schema on an initialised connection is harmless.
        db.run(|conn| Database::init_schema(conn)).await.unwrap();
    }

    #[tokio::test]
    async fn connection_survives_a_panicking_operation() {
        let db = Database::open_in_memory().unwrap();

        let err = db
            .run(|_conn: &Connection| -> Result<(), StoreError> { panic!("query blew up") })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Worker(_)));

        db.run(|conn| {
            conn.execute("INSERT INTO logs (comment) VALUES ('after panic')", [])?;
            Ok(())
        })
        .await
        .unwrap();
        let count: i64 = db
            .run(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM logs", [], |row| row.get(0))?))
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn file_database_keeps_rows_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clients.sqlite");

        {
            let db = Database::open(&path).unwrap();
            db.run(|conn| {
                conn.execute("INSERT INTO logs (comment) VALUES ('first start')", [])?;
                Ok(())
            })
            .await
            .unwrap();
        }

        let reopened = Database::open(&path).unwrap();
        let count: i64 = reopened
            .run(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM logs", [], |row| row.get(0))?))
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
