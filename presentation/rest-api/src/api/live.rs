//! Adapters from subscriptions to HTTP responses.

use std::sync::Arc;

use futures_util::stream::{self, BoxStream, StreamExt};
use tokio::sync::mpsc;

use business::domain::shared::live::{CollectionState, StateCallback, Subscription};

pub type States<T> = mpsc::UnboundedReceiver<CollectionState<T>>;

/// A callback that queues every emitted state for the HTTP handler.
pub fn queued_states<T: Send + 'static>() -> (StateCallback<T>, States<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let callback: StateCallback<T> = Arc::new(move |state| {
        let _ = tx.send(state);
    });
    (callback, rx)
}

/// Waits for the first state and releases the subscription.
pub async fn first_state<T>(subscription: Subscription, mut states: States<T>) -> CollectionState<T> {
    let state = states.recv().await.unwrap_or_else(CollectionState::empty);
    subscription.unsubscribe();
    state
}

/// Turns a subscription into a server-sent event stream. The subscription
/// lives as long as the stream: a disconnecting client drops the stream and
/// with it the backend watcher.
pub fn event_stream<T, R>(
    subscription: Subscription,
    states: States<T>,
    to_event: fn(CollectionState<T>) -> R,
) -> BoxStream<'static, R>
where
    T: Send + 'static,
    R: Send + 'static,
{
    stream::unfold((states, subscription), |(mut states, subscription)| async move {
        let state = states.recv().await?;
        Some((state, (states, subscription)))
    })
    .map(to_event)
    .boxed()
}
