use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::invitation::errors::InvitationError;
use crate::domain::invitation::model::Invitation;
use crate::domain::shared::value_objects::UserId;

pub struct InviteByEmailParams {
    pub list_id: Uuid,
    pub from_user_id: Option<UserId>,
    pub email: String,
}

/// Resolves the target user by email, then creates the invitation.
#[async_trait]
pub trait InviteByEmailUseCase: Send + Sync {
    async fn execute(&self, params: InviteByEmailParams) -> Result<Invitation, InvitationError>;
}
