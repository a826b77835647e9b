use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::live::LiveQuery;
use crate::domain::shared::value_objects::UserId;

use super::model::{ListPatch, NewShoppingList, ShoppingList};

#[async_trait]
pub trait ListRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<ShoppingList>, RepositoryError>;
    /// Lists the user collaborates on, newest `updated_at` first.
    async fn watch_for_member(
        &self,
        user_id: &UserId,
    ) -> Result<LiveQuery<ShoppingList>, RepositoryError>;
    async fn create(&self, list: &NewShoppingList) -> Result<ShoppingList, RepositoryError>;
    /// Fails with `NotFound` when the list does not exist.
    async fn update(&self, id: Uuid, patch: &ListPatch) -> Result<ShoppingList, RepositoryError>;
    /// Idempotent set-union on the collaborators field.
    async fn add_collaborator(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
