//! Bridges Postgres `NOTIFY` events into live queries.
//!
//! Every write to a watched table fires a statement trigger that publishes the
//! table name on [`CHANNEL`]. A single listener connection fans those names
//! out over a broadcast channel; each live query refetches its full snapshot
//! when a table it depends on changes.

use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgListener;
use tokio::sync::broadcast::{self, error::RecvError};

use business::domain::errors::RepositoryError;
use business::domain::shared::live::LiveQuery;

use crate::db::DatabaseError;

pub const CHANNEL: &str = "shopping_changes";

const RECONNECT_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Users,
    Lists,
    ListItems,
    Invitations,
}

impl Table {
    pub const ALL: [Table; 4] = [
        Table::Users,
        Table::Lists,
        Table::ListItems,
        Table::Invitations,
    ];
}

impl FromStr for Table {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "users" => Ok(Table::Users),
            "lists" => Ok(Table::Lists),
            "list_items" => Ok(Table::ListItems),
            "invitations" => Ok(Table::Invitations),
            other => Err(format!("unknown table: {}", other)),
        }
    }
}

#[derive(Clone)]
pub struct ChangeFeed {
    sender: broadcast::Sender<Table>,
}

impl ChangeFeed {
    /// Opens the listener connection and starts relaying notifications.
    pub async fn start(pool: &PgPool) -> Result<Self, DatabaseError> {
        let mut listener = PgListener::connect_with(pool).await.map_err(|err| {
            tracing::error!(error = %err, "could not open change listener");
            DatabaseError::ConnectionError
        })?;
        listener
            .listen(CHANNEL)
            .await
            .map_err(|_| DatabaseError::ConnectionError)?;

        let feed = Self::detached();
        let sender = feed.sender.clone();

        tokio::spawn(async move {
            loop {
                match listener.try_recv().await {
                    Ok(Some(notification)) => match notification.payload().parse::<Table>() {
                        Ok(table) => {
                            let _ = sender.send(table);
                        }
                        Err(err) => tracing::debug!(%err, "ignoring notification"),
                    },
                    // Connection dropped; notifications may have been lost.
                    Ok(None) => {
                        tracing::warn!("change listener reconnecting");
                        for table in Table::ALL {
                            let _ = sender.send(table);
                        }
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "change listener failed");
                        tokio::time::sleep(RECONNECT_DELAY).await;
                    }
                }
            }
        });

        Ok(feed)
    }

    /// A feed with no listener behind it; changes are only those published
    /// through [`ChangeFeed::publish`].
    pub fn detached() -> Self {
        let (sender, _) = broadcast::channel(64);
        Self { sender }
    }

    pub fn publish(&self, table: Table) {
        let _ = self.sender.send(table);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Table> {
        self.sender.subscribe()
    }

    /// Starts a live query that emits `fetch()` once immediately and again
    /// after every change to one of `tables`. The task ends once the
    /// consumer drops its [`LiveQuery`].
    pub fn watch<T, F, Fut>(&self, tables: &'static [Table], fetch: F) -> LiveQuery<T>
    where
        T: Send + 'static,
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = Result<Vec<T>, RepositoryError>> + Send,
    {
        let (sender, query) = LiveQuery::channel();
        // subscribe before the first fetch so no change slips in between
        let mut changes = self.subscribe();

        tokio::spawn(async move {
            if sender.send(fetch().await).is_err() {
                return;
            }
            loop {
                tokio::select! {
                    _ = sender.closed() => break,
                    change = changes.recv() => match change {
                        Ok(table) if !tables.contains(&table) => continue,
                        Ok(_) | Err(RecvError::Lagged(_)) => {}
                        Err(RecvError::Closed) => break,
                    },
                }
                if sender.send(fetch().await).is_err() {
                    break;
                }
            }
        });

        query
    }
}
