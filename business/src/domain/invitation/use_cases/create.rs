use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::invitation::errors::InvitationError;
use crate::domain::invitation::model::Invitation;
use crate::domain::shared::value_objects::UserId;

pub struct CreateInvitationParams {
    pub list_id: Uuid,
    pub from_user_id: UserId,
    pub to_user_id: UserId,
}

/// Creates a pending invitation unless one is already pending for the same
/// list and target user.
#[async_trait]
pub trait CreateInvitationUseCase: Send + Sync {
    async fn execute(&self, params: CreateInvitationParams) -> Result<Invitation, InvitationError>;
}
