use crate::data::StoreError;
use tokio::sync::oneshot;

/// A user action queued for the intent worker.
#[derive(Debug)]
pub(crate) enum Intent {
    Save {
        document: i32,
        name: String,
        phones: Vec<String>,
    },
    Delete {
        document: i32,
    },
    Fetch,
    Update {
        document: i32,
        name: String,
        phones: Vec<String>,
    },
}

impl Intent {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Intent::Save { .. } => "save",
            Intent::Delete { .. } => "delete",
            Intent::Fetch => "fetch",
            Intent::Update { .. } => "update",
        }
    }
}

/// An intent together with the channel its outcome is reported on.
#[derive(Debug)]
pub(crate) struct IntentRequest {
    pub(crate) intent: Intent,
    pub(crate) done: oneshot::Sender<Result<(), StoreError>>,
}

/// Completion handle returned by every `ClientsViewModel` intent.
///
/// Dropping it does not cancel the intent; the worker applies it anyway.
#[must_use = "drop the handle explicitly to fire and forget"]
pub struct Pending {
    rx: oneshot::Receiver<Result<(), StoreError>>,
}

impl Pending {
    pub(crate) fn new(rx: oneshot::Receiver<Result<(), StoreError>>) -> Self {
        Self { rx }
    }

    /// Waits until the worker has applied the intent and reconciled the
    /// client collection.
    ///
    /// Returns [`StoreError::Closed`] when the view model was shut down before
    /// the intent ran.
    pub async fn wait(self) -> Result<(), StoreError> {
        match self.rx.await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Closed),
        }
    }
}
