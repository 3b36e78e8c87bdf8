//! Single data-access seam for the presentation layer.
//!
//! `Repository` forwards every call to the client or log DAO unchanged: same
//! arguments, same results, same errors.

use super::client_dao::ClientDao;
use super::error::StoreError;
use super::log_dao::LogDao;
use common::model::client::Client;
use common::model::log_entry::LogEntry;

#[derive(Clone)]
pub struct Repository {
    client_dao: ClientDao,
    log_dao: LogDao,
}

impl Repository {
    pub fn new(client_dao: ClientDao, log_dao: LogDao) -> Self {
        Self {
            client_dao,
            log_dao,
        }
    }

    pub async fn insert_client(&self, client: Client) -> Result<i64, StoreError> {
        self.client_dao.insert_client(client).await
    }

    pub async fn get_all_clients(&self) -> Result<Vec<Client>, StoreError> {
        self.client_dao.get_all_clients().await
    }

    pub async fn update_client(&self, client: Client) -> Result<usize, StoreError> {
        self.client_dao.update(client).await
    }

    pub async fn delete_client(&self, document: i32) -> Result<usize, StoreError> {
        self.client_dao.delete_by_document(document).await
    }

    pub async fn get_client_by_document(
        &self,
        document: i32,
    ) -> Result<Option<Client>, StoreError> {
        self.client_dao.get_client_by_document(document).await
    }

    pub async fn insert_log(&self, entry: LogEntry) -> Result<i64, StoreError> {
        self.log_dao.insert_log(entry).await
    }

    pub async fn get_all_logs(&self) -> Result<Vec<LogEntry>, StoreError> {
        self.log_dao.get_all_logs().await
    }
}
