//! Presentation state for the client screens.
//!
//! `ClientsViewModel` owns the observable list of clients that the screens
//! render and exposes the user's intents (save, delete, fetch, update) plus
//! the login check.
//!
//! The main components are:
//! - `ClientsViewModel`: created through `view_model_factory` and shared with
//!   the HTTP layer in `main.rs`.
//! - The intent worker (`worker.rs`): a single task spawned by the view model
//!   that applies queued intents one at a time and is the only writer of the
//!   client list.
//! - `Pending`: the completion handle each intent returns.

use super::intent::{Intent, IntentRequest, Pending};
use super::worker::start_intent_worker;
use crate::data::Repository;
use common::model::client::Client;
use log::warn;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

/// User name accepted by [`ClientsViewModel::login`].
pub const VALID_USERNAME: &str = "usuario";
/// Password accepted by [`ClientsViewModel::login`].
pub const VALID_PASSWORD: &str = "123456";

/// State holder mediating between the client screens and the repository.
///
/// Intents return immediately. They are queued and applied in issue order by
/// the view model's worker task, so a delete followed by an update of the same
/// document always lands in that order.
///
/// Must be created inside a tokio runtime.
pub struct ClientsViewModel {
    valid_username: &'static str,
    valid_password: &'static str,

    /// Read side of the observable client list. Only the worker holds the
    /// write side.
    clients: watch::Receiver<Vec<Client>>,

    /// Queue feeding the intent worker.
    tx: mpsc::UnboundedSender<IntentRequest>,

    worker: JoinHandle<()>,
}

impl ClientsViewModel {
    /// Builds a view model over `repository` and spawns its intent worker.
    ///
    /// The client list starts empty; call [`fetch_clients`](Self::fetch_clients)
    /// to load it.
    pub fn new(repository: Repository) -> Self {
        let (clients_tx, clients_rx) = watch::channel(Vec::new());
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(start_intent_worker(repository, clients_tx, rx));

        Self {
            valid_username: VALID_USERNAME,
            valid_password: VALID_PASSWORD,
            clients: clients_rx,
            tx,
            worker,
        }
    }

    /// Checks the credentials against the fixed user.
    pub fn login(&self, username: &str, password: &str) -> bool {
        username == self.valid_username && password == self.valid_password
    }

    /// Snapshot of the client list, in insertion/fetch order.
    pub fn clients(&self) -> Vec<Client> {
        self.clients.borrow().clone()
    }

    /// First client in the list with `document`.
    pub fn find_client(&self, document: i32) -> Option<Client> {
        self.clients
            .borrow()
            .iter()
            .find(|client| client.document == document)
            .cloned()
    }

    /// Receiver that is notified every time the worker changes the list.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Client>> {
        self.clients.clone()
    }

    /// Stores a new client, then appends it to the list unless the list
    /// already shows a client with the same document.
    pub fn save_client(&self, document: i32, name: String, phones: Vec<String>) -> Pending {
        self.dispatch(Intent::Save {
            document,
            name,
            phones,
        })
    }

    /// Deletes every stored client with `document`, then reloads the list.
    pub fn delete_client(&self, document: i32) -> Pending {
        self.dispatch(Intent::Delete { document })
    }

    /// Replaces the list with everything in the store.
    pub fn fetch_clients(&self) -> Pending {
        self.dispatch(Intent::Fetch)
    }

    /// Replaces name and phones of the stored client with `document` and
    /// reloads the list. Does nothing when no such client exists.
    pub fn update_client(&self, document: i32, name: String, phones: Vec<String>) -> Pending {
        self.dispatch(Intent::Update {
            document,
            name,
            phones,
        })
    }

    /// Stops the intent worker. Queued intents are dropped; their handles
    /// resolve to `StoreError::Closed`. Writes already committed stay.
    pub fn close(&self) {
        self.worker.abort();
    }

    fn dispatch(&self, intent: Intent) -> Pending {
        let (done, rx) = oneshot::channel();
        if let Err(mpsc::error::SendError(request)) = self.tx.send(IntentRequest { intent, done }) {
            warn!(
                "{} intent dropped: client view model is closed",
                request.intent.label()
            );
        }
        Pending::new(rx)
    }
}

impl Drop for ClientsViewModel {
    fn drop(&mut self) {
        self.worker.abort();
    }
}
