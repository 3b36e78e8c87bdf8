//! The task that applies client intents, one at a time, in the order they
//! were issued.

use super::intent::{Intent, IntentRequest};
use crate::data::{Repository, StoreError};
use common::model::client::Client;
use log::{debug, error, info};
use tokio::sync::{mpsc, watch};

/// Runs until every sender of `rx` is gone (or the task is aborted).
///
/// Each request is applied to the store through `repository`, then the
/// outcome is sent back on the request's completion channel. Storage failures
/// are logged here and handed to the caller; they never stop the loop.
pub(crate) async fn start_intent_worker(
    repository: Repository,
    clients: watch::Sender<Vec<Client>>,
    mut rx: mpsc::UnboundedReceiver<IntentRequest>,
) {
    while let Some(request) = rx.recv().await {
        let label = request.intent.label();
        let result = apply_intent(&repository, &clients, request.intent).await;
        match &result {
            Ok(()) => debug!("{} intent applied", label),
            Err(e) => error!("{} intent failed: {}", label, e),
        }
        let _ = request.done.send(result);
    }
    info!("client intent worker stopped");
}

async fn apply_intent(
    repository: &Repository,
    clients: &watch::Sender<Vec<Client>>,
    intent: Intent,
) -> Result<(), StoreError> {
    match intent {
        Intent::Save {
            document,
            name,
            phones,
        } => {
            let mut client = Client::new(document, name, phones);
            client.id = repository.insert_client(client.clone()).await?;
            // Checked against the collection only; the store may now hold a duplicate.
            clients.send_if_modified(|list| {
                if list.iter().any(|c| c.document == document) {
                    return false;
                }
                list.push(client);
                true
            });
            Ok(())
        }
        Intent::Delete { document } => {
            repository.delete_client(document).await?;
            reload(repository, clients).await
        }
        Intent::Fetch => reload(repository, clients).await,
        Intent::Update {
            document,
            name,
            phones,
        } => match repository.get_client_by_document(document).await? {
            Some(current) => {
                repository
                    .update_client(current.with_details(name, phones))
                    .await?;
                reload(repository, clients).await
            }
            None => {
                debug!("no client with document {}, update skipped", document);
                Ok(())
            }
        },
    }
}

/// Replaces the whole collection with a fresh read of the store.
async fn reload(
    repository: &Repository,
    clients: &watch::Sender<Vec<Client>>,
) -> Result<(), StoreError> {
    let all = repository.get_all_clients().await?;
    clients.send_replace(all);
    Ok(())
}
