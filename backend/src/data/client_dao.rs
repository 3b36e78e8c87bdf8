//! Queries over the `clients` table.
//!
//! The phone list is flattened with [`common::phones`] on the way in and
//! expanded on the way out; callers only ever see `Vec<String>`.

use super::database::Database;
use super::error::StoreError;
use common::model::client::Client;
use common::phones;
use log::debug;
use rusqlite::{params, OptionalExtension, Row};

#[derive(Clone)]
pub struct ClientDao {
    db: Database,
}

fn row_to_client(row: &Row<'_>) -> rusqlite::Result<Client> {
    let stored_phones: String = row.get(3)?;
    Ok(Client {
        id: row.get(0)?,
        document: row.get(1)?,
        name: row.get(2)?,
        phones: phones::decode(&stored_phones),
    })
}

impl ClientDao {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Appends a new row and returns its surrogate id. The client's own `id`
    /// is ignored and no check is made for an existing row with the same
    /// document.
    pub async fn insert_client(&self, client: Client) -> Result<i64, StoreError> {
        debug!("inserting client with document {}", client.document);
        self.db
            .run(move |conn| {
                conn.execute(
                    "INSERT INTO clients (document, name, phones) VALUES (?1, ?2, ?3)",
                    params![client.document, client.name, phones::encode(&client.phones)],
                )?;
                Ok(conn.last_insert_rowid())
            })
            .await
    }

    /// Every row, in storage order.
    pub async fn get_all_clients(&self) -> Result<Vec<Client>, StoreError> {
        self.db
            .run(|conn| {
                let mut stmt =
                    conn.prepare("SELECT id, document, name, phones FROM clients ORDER BY id")?;
                let clients = stmt
                    .query_map([], row_to_client)?
                    .collect::<Result<Vec<Client>, _>>()?;
                Ok(clients)
            })
            .await
    }

    /// Rewrites the row whose surrogate id is `client.id`. Returns the number
    /// of rows touched, `0` when the id does not exist.
    pub async fn update(&self, client: Client) -> Result<usize, StoreError> {
        debug!("updating client row {}", client.id);
        self.db
            .run(move |conn| {
                let changed = conn.execute(
                    "UPDATE clients SET document = ?1, name = ?2, phones = ?3 WHERE id = ?4",
                    params![
                        client.document,
                        client.name,
                        phones::encode(&client.phones),
                        client.id
                    ],
                )?;
                Ok(changed)
            })
            .await
    }

    /// Removes every row with `document`; returns how many were removed.
    pub async fn delete_by_document(&self, document: i32) -> Result<usize, StoreError> {
        debug!("deleting clients with document {}", document);
        self.db
            .run(move |conn| {
                let removed =
                    conn.execute("DELETE FROM clients WHERE document = ?1", params![document])?;
                Ok(removed)
            })
            .await
    }

    /// Oldest row with `document`, if any.
    pub async fn get_client_by_document(
        &self,
        document: i32,
    ) -> Result<Option<Client>, StoreError> {
        self.db
            .run(move |conn| {
                let client = conn
                    .query_row(
                        "SELECT id, document, name, phones FROM clients WHERE document = ?1 ORDER BY id LIMIT 1",
                        params![document],
                        row_to_client,
                    )
                    .optional()?;
                Ok(client)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dao() -> ClientDao {
        ClientDao::new(Database::open_in_memory().unwrap())
    }

    fn phones(list: &[&str]) -> Vec<String> {
        list.iter().map(|p| p.to_string()).collect()
    }

    #[tokio::test]
    async fn insert_assigns_fresh_ids() {
        let dao = dao();
        let first = dao
            .insert_client(Client::new(1, "Ana", phones(&["555-1"])))
            .await
            .unwrap();
        let second = dao
            .insert_client(Client::new(2, "Luis", phones(&["555-2"])))
            .await
            .unwrap();
        assert!(first > 0);
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn get_by_document_returns_stored_fields() {
        let dao = dao();
        let id = dao
            .insert_client(Client::new(1001, "Ana", phones(&["555-1", "555-2"])))
            .await
            .unwrap();

        let found = dao.get_client_by_document(1001).await.unwrap().unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.name, "Ana");
        assert_eq!(found.phones, phones(&["555-1", "555-2"]));

        assert!(dao.get_client_by_document(9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_documents_are_accepted() {
        let dao = dao();
        dao.insert_client(Client::new(1001, "Ana", phones(&["555-1", "555-2"])))
            .await
            .unwrap();
        dao.insert_client(Client::new(1001, "Ana B", phones(&["555-3"])))
            .await
            .unwrap();

        let all = dao.get_all_clients().await.unwrap();
        assert_eq!(all.iter().filter(|c| c.document == 1001).count(), 2);

        let found = dao.get_client_by_document(1001).await.unwrap().unwrap();
        assert_eq!(found.document, 1001);
    }

    #[tokio::test]
    async fn delete_removes_every_matching_row() {
        let dao = dao();
        dao.insert_client(Client::new(1, "A", phones(&["1"]))).await.unwrap();
        dao.insert_client(Client::new(1, "A2", phones(&["2"]))).await.unwrap();
        dao.insert_client(Client::new(2, "B", phones(&["3"]))).await.unwrap();

        assert_eq!(dao.delete_by_document(1).await.unwrap(), 2);
        assert_eq!(dao.delete_by_document(1).await.unwrap(), 0);

        let remaining = dao.get_all_clients().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].document, 2);
    }

    #[tokio::test]
    async fn update_matches_on_surrogate_id() {
        let dao = dao();
        dao.insert_client(Client::new(10, "First", phones(&["1"]))).await.unwrap();
        dao.insert_client(Client::new(10, "Second", phones(&["2"]))).await.unwrap();

        let all = dao.get_all_clients().await.unwrap();
        let second = all[1].with_details("Second edited", phones(&["9", "8"]));
        assert_eq!(dao.update(second.clone()).await.unwrap(), 1);

        let all = dao.get_all_clients().await.unwrap();
        assert_eq!(all[0].name, "First");
        assert_eq!(all[1], second);
    }

    #[tokio::test]
    async fn update_of_unknown_id_touches_nothing() {
        let dao = dao();
        let mut ghost = Client::new(3, "Ghost", phones(&["0"]));
        ghost.id = 77;
        assert_eq!(dao.update(ghost).await.unwrap(), 0);
        assert!(dao.get_all_clients().await.unwrap().is_empty());
    }
}
