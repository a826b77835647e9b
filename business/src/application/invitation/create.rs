use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::invitation::errors::InvitationError;
use crate::domain::invitation::model::{Invitation, NewInvitation};
use crate::domain::invitation::repository::InvitationRepository;
use crate::domain::invitation::use_cases::create::{
    CreateInvitationParams, CreateInvitationUseCase,
};
use crate::domain::logger::Logger;

pub struct CreateInvitationUseCaseImpl {
    pub repository: Arc<dyn InvitationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateInvitationUseCase for CreateInvitationUseCaseImpl {
    async fn execute(&self, params: CreateInvitationParams) -> Result<Invitation, InvitationError> {
        if params.from_user_id.is_blank() {
            return Err(InvitationError::NotAuthenticated);
        }

        create_pending(
            self.repository.as_ref(),
            self.logger.as_ref(),
            NewInvitation {
                list_id: params.list_id,
                from_user_id: params.from_user_id,
                to_user_id: params.to_user_id,
            },
        )
        .await
    }
}

/// Pending-invitation guard shared by every path that creates invitations.
///
/// The lookup rejects the common case without a write. Stores with a
/// uniqueness constraint on pending pairs also catch the concurrent case,
/// which surfaces as `Duplicated` from `create`.
pub(crate) async fn create_pending(
    repository: &dyn InvitationRepository,
    logger: &dyn Logger,
    invitation: NewInvitation,
) -> Result<Invitation, InvitationError> {
    logger.info(&format!(
        "Inviting {} to list {} on behalf of {}",
        invitation.to_user_id, invitation.list_id, invitation.from_user_id
    ));

    if repository
        .find_pending(invitation.list_id, &invitation.to_user_id)
        .await?
        .is_some()
    {
        logger.warn(&format!(
            "Invitation for {} to list {} is already pending",
            invitation.to_user_id, invitation.list_id
        ));
        return Err(InvitationError::DuplicateInvitation);
    }

    let created = repository
        .create(&invitation)
        .await
        .map_err(|e| match e {
            RepositoryError::Duplicated => InvitationError::DuplicateInvitation,
            other => {
                logger.failure("create invitation", &other);
                InvitationError::Repository(other)
            }
        })?;

    logger.info(&format!("Invitation created with id: {}", created.id));
    Ok(created)
}
