use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::invitation::errors::InvitationError;
use crate::domain::invitation::repository::InvitationRepository;
use crate::domain::invitation::use_cases::delete::{
    DeleteInvitationParams, DeleteInvitationUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::authenticated;

pub struct DeleteInvitationUseCaseImpl {
    pub repository: Arc<dyn InvitationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteInvitationUseCase for DeleteInvitationUseCaseImpl {
    async fn execute(&self, params: DeleteInvitationParams) -> Result<(), InvitationError> {
        let user_id =
            authenticated(params.acting_user_id).ok_or(InvitationError::NotAuthenticated)?;
        self.logger.info(&format!(
            "User {} deleting invitation: {}",
            user_id, params.invitation_id
        ));

        let invitation = self
            .repository
            .get_by_id(params.invitation_id)
            .await?
            .ok_or(InvitationError::NotFound)?;
        if !invitation.involves(&user_id) {
            return Err(InvitationError::NotParticipant);
        }

        // collaborators added by an earlier acceptance stay on the list
        self.repository.delete(invitation.id).await?;
        Ok(())
    }
}
