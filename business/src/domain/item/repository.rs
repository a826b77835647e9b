use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::live::LiveQuery;

use super::model::{ListItem, ListItemPatch, NewListItem};

/// Items are stored as children of their list; every call is scoped by list id.
#[async_trait]
pub trait ListItemRepository: Send + Sync {
    /// Current items of the list, oldest first.
    async fn get_all(&self, list_id: Uuid) -> Result<Vec<ListItem>, RepositoryError>;
    async fn get_by_id(&self, list_id: Uuid, id: Uuid) -> Result<ListItem, RepositoryError>;
    /// Live items of the list, oldest first.
    async fn watch(&self, list_id: Uuid) -> Result<LiveQuery<ListItem>, RepositoryError>;
    async fn create(&self, item: &NewListItem) -> Result<ListItem, RepositoryError>;
    /// Fails with `NotFound` when the item does not exist.
    async fn update(
        &self,
        list_id: Uuid,
        id: Uuid,
        patch: &ListItemPatch,
    ) -> Result<ListItem, RepositoryError>;
    async fn delete(&self, list_id: Uuid, id: Uuid) -> Result<(), RepositoryError>;
    async fn delete_all(&self, list_id: Uuid) -> Result<u64, RepositoryError>;
}
