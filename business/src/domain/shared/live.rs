//! Live-query plumbing shared by every watched collection.
//!
//! A backend adapter answers a watch request with a [`LiveQuery`]: the
//! receiving half of a channel on which it pushes one full snapshot per
//! change. Use cases turn that feed into a [`Subscription`], which drives the
//! feed on a background task and hands [`CollectionState`] values to a
//! caller-supplied callback until it is unsubscribed or dropped.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::errors::RepositoryError;

/// One full result set delivered by a live query.
pub type Snapshot<T> = Result<Vec<T>, RepositoryError>;

/// Sending half kept by the backend adapter for a registered watcher.
pub type SnapshotSender<T> = mpsc::UnboundedSender<Snapshot<T>>;

/// Receiving half of a backend live query. Dropping it detaches the watcher:
/// the adapter notices the closed channel and stops pushing.
#[derive(Debug)]
pub struct LiveQuery<T> {
    receiver: mpsc::UnboundedReceiver<Snapshot<T>>,
}

impl<T> LiveQuery<T> {
    pub fn channel() -> (SnapshotSender<T>, Self) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (sender, Self { receiver })
    }

    /// A query that reports a single snapshot and then ends.
    pub fn once(snapshot: Snapshot<T>) -> Self {
        let (sender, query) = Self::channel();
        let _ = sender.send(snapshot);
        query
    }

    pub async fn next(&mut self) -> Option<Snapshot<T>> {
        self.receiver.recv().await
    }
}

/// What a view renders for a watched collection: the latest records, or an
/// empty set together with the readable error that ended the previous feed.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<T> {
    pub records: Vec<T>,
    pub error: Option<String>,
}

impl<T> CollectionState<T> {
    pub fn ready(records: Vec<T>) -> Self {
        Self {
            records,
            error: None,
        }
    }

    pub fn empty() -> Self {
        Self::ready(Vec::new())
    }

    pub fn failed(err: &dyn std::fmt::Display) -> Self {
        Self {
            records: Vec::new(),
            error: Some(err.to_string()),
        }
    }
}

/// Receives every state emitted by a subscription.
pub type StateCallback<T> = Arc<dyn Fn(CollectionState<T>) + Send + Sync>;

/// Handle on an active live query. Unsubscribing (or dropping the handle)
/// stops all further emissions, including results of lookups that were
/// still in flight.
#[derive(Debug)]
pub struct Subscription {
    cancelled: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl Subscription {
    /// A subscription with nothing behind it; used once the final state has
    /// already been delivered synchronously.
    pub fn inert() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(true)),
            task: None,
        }
    }

    /// Drives `query` on a background task. Each successful snapshot is passed
    /// through `transform` (e.g. enrichment) before reaching `on_change`;
    /// failed snapshots become an empty state carrying the error.
    pub fn spawn<T, U, F, Fut>(
        mut query: LiveQuery<T>,
        transform: F,
        on_change: StateCallback<U>,
    ) -> Self
    where
        T: Send + 'static,
        U: Send + 'static,
        F: Fn(Vec<T>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Vec<U>> + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = cancelled.clone();

        let task = tokio::spawn(async move {
            while let Some(snapshot) = query.next().await {
                if flag.load(Ordering::Acquire) {
                    break;
                }
                let state = match snapshot {
                    Ok(records) => CollectionState::ready(transform(records).await),
                    Err(err) => CollectionState::failed(&err),
                };
                // transform may have awaited past an unsubscribe
                if flag.load(Ordering::Acquire) {
                    break;
                }
                on_change(state);
            }
        });

        Self {
            cancelled,
            task: Some(task),
        }
    }

    /// Same as [`Subscription::spawn`] with no per-snapshot transformation.
    pub fn forward<T>(query: LiveQuery<T>, on_change: StateCallback<T>) -> Self
    where
        T: Send + 'static,
    {
        Self::spawn(query, |records| async move { records }, on_change)
    }

    pub fn is_active(&self) -> bool {
        !self.cancelled.load(Ordering::Acquire)
            && self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn unsubscribe(mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::Release);
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}
