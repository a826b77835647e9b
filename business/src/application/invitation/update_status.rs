use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::invitation::errors::InvitationError;
use crate::domain::invitation::model::InvitationStatus;
use crate::domain::invitation::repository::InvitationRepository;
use crate::domain::invitation::use_cases::update_status::{
    UpdateInvitationStatusParams, UpdateInvitationStatusUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::authenticated;

pub struct UpdateInvitationStatusUseCaseImpl {
    pub repository: Arc<dyn InvitationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateInvitationStatusUseCase for UpdateInvitationStatusUseCaseImpl {
    async fn execute(&self, params: UpdateInvitationStatusParams) -> Result<(), InvitationError> {
        let user_id =
            authenticated(params.acting_user_id).ok_or(InvitationError::NotAuthenticated)?;
        let status: InvitationStatus = params.decision.into();
        self.logger.info(&format!(
            "User {} marking invitation {} as {}",
            user_id, params.invitation_id, status
        ));

        let invitation = self
            .repository
            .get_by_id(params.invitation_id)
            .await
            .inspect_err(|err| self.logger.failure("load invitation", err))?
            .ok_or(InvitationError::NotFound)?;
        if !invitation.is_addressed_to(&user_id) {
            return Err(InvitationError::NotParticipant);
        }

        self.repository
            .update_status(invitation.id, status)
            .await
            .inspect_err(|err| self.logger.failure("update invitation status", err))?;

        Ok(())
    }
}
