use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;

use crossbeam_channel::{Receiver, Sender};

use super::client::{Credentials, ListSource};
use super::pipeline::{FetchReport, retrieve};
use super::progress::FetchMessage;
use crate::error::Result;

/// Cancellation token for stopping retrieval between requests
#[derive(Debug, Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the retrieval pipeline off the UI thread.
///
/// Requests are still issued strictly one after another; the worker thread
/// only keeps the event loop responsive while they are in flight.
pub struct Fetcher<S> {
    source: S,
    credentials: Credentials,
    term: String,
    cancel_token: CancellationToken,
}

impl<S: ListSource + Send + 'static> Fetcher<S> {
    pub fn new(source: S, credentials: Credentials, term: impl Into<String>) -> Self {
        Self {
            source,
            credentials,
            term: term.into(),
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel_token = token;
        self
    }

    /// Start retrieval in the background.
    /// Returns a receiver for progress updates and the worker handle.
    pub fn fetch(self) -> (Receiver<FetchMessage>, JoinHandle<Result<FetchReport>>) {
        let (tx, rx) = crossbeam_channel::unbounded();

        let handle = std::thread::spawn(move || self.fetch_sync(tx));

        (rx, handle)
    }

    fn fetch_sync(self, tx: Sender<FetchMessage>) -> Result<FetchReport> {
        retrieve(
            &self.source,
            &self.credentials,
            &self.term,
            &self.cancel_token,
            &mut |msg| {
                let _ = tx.send(msg);
            },
        )
    }
}
