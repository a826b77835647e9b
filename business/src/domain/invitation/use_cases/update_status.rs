use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::invitation::errors::InvitationError;
use crate::domain::invitation::model::InvitationDecision;
use crate::domain::shared::value_objects::UserId;

pub struct UpdateInvitationStatusParams {
    pub invitation_id: Uuid,
    pub decision: InvitationDecision,
    pub acting_user_id: Option<UserId>,
}

/// Writes the status only, and only on behalf of the addressee. Accepting
/// through this use case does not add the user to the list; use
/// [`super::accept::AcceptInvitationUseCase`] for that.
#[async_trait]
pub trait UpdateInvitationStatusUseCase: Send + Sync {
    async fn execute(&self, params: UpdateInvitationStatusParams) -> Result<(), InvitationError>;
}
