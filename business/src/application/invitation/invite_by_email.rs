use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::invitation::errors::InvitationError;
use crate::domain::invitation::model::{Invitation, NewInvitation};
use crate::domain::invitation::repository::InvitationRepository;
use crate::domain::invitation::use_cases::invite_by_email::{
    InviteByEmailParams, InviteByEmailUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::authenticated;
use crate::domain::user::repository::UserRepository;

use super::create::create_pending;

pub struct InviteByEmailUseCaseImpl {
    pub repository: Arc<dyn InvitationRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl InviteByEmailUseCase for InviteByEmailUseCaseImpl {
    async fn execute(&self, params: InviteByEmailParams) -> Result<Invitation, InvitationError> {
        let from_user_id =
            authenticated(params.from_user_id).ok_or(InvitationError::NotAuthenticated)?;

        let email = params.email.trim();
        if email.is_empty() {
            return Err(InvitationError::EmailEmpty);
        }

        let target = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                self.logger
                    .info(&format!("No user registered with email {}", email));
                InvitationError::UserNotFound
            })?;

        create_pending(
            self.repository.as_ref(),
            self.logger.as_ref(),
            NewInvitation {
                list_id: params.list_id,
                from_user_id,
                to_user_id: target.id,
            },
        )
        .await
    }
}
