use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::live::LiveQuery;
use crate::domain::shared::value_objects::UserId;

use super::model::{Invitation, InvitationDirection, InvitationStatus, NewInvitation};

#[async_trait]
pub trait InvitationRepository: Send + Sync {
    async fn watch(
        &self,
        direction: InvitationDirection,
        user_id: &UserId,
    ) -> Result<LiveQuery<Invitation>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Invitation>, RepositoryError>;
    async fn find_pending(
        &self,
        list_id: Uuid,
        to_user_id: &UserId,
    ) -> Result<Option<Invitation>, RepositoryError>;
    /// Stores a pending invitation. Stores that enforce uniqueness of pending
    /// `(list_id, to_user_id)` pairs reject a second one with `Duplicated`.
    async fn create(&self, invitation: &NewInvitation) -> Result<Invitation, RepositoryError>;
    /// Unconditional patch of the status field.
    async fn update_status(&self, id: Uuid, status: InvitationStatus)
    -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn delete_for_list(&self, list_id: Uuid) -> Result<u64, RepositoryError>;
}
