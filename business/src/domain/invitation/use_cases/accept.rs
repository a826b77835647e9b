use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::invitation::errors::InvitationError;
use crate::domain::shared::value_objects::UserId;

pub struct AcceptInvitationParams {
    pub invitation_id: Uuid,
    pub list_id: Uuid,
    pub accepting_user_id: Option<UserId>,
}

/// Adds the accepting user to the list's collaborators, then marks the
/// invitation accepted. If the first step fails the invitation stays pending.
///
/// Nothing is written unless the invitation exists, is addressed to the
/// accepting user and belongs to `list_id`.
#[async_trait]
pub trait AcceptInvitationUseCase: Send + Sync {
    async fn execute(&self, params: AcceptInvitationParams) -> Result<(), InvitationError>;
}
