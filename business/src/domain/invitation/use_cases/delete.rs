use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::invitation::errors::InvitationError;
use crate::domain::shared::value_objects::UserId;

pub struct DeleteInvitationParams {
    pub invitation_id: Uuid,
    pub acting_user_id: Option<UserId>,
}

/// Either side of the invitation may delete it, whatever its status.
#[async_trait]
pub trait DeleteInvitationUseCase: Send + Sync {
    async fn execute(&self, params: DeleteInvitationParams) -> Result<(), InvitationError>;
}
