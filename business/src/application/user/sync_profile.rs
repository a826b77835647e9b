use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::sync_profile::{SyncUserProfileParams, SyncUserProfileUseCase};

pub struct SyncUserProfileUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SyncUserProfileUseCase for SyncUserProfileUseCaseImpl {
    async fn execute(&self, params: SyncUserProfileParams) -> Result<User, UserError> {
        let user = User::new(params.id, params.email, params.name, params.photo_url)?;

        self.repository.upsert(&user).await.inspect_err(|err| {
            self.logger.failure("sync user profile", err);
        })?;

        self.logger
            .debug(&format!("Profile synced for user {}", user.id));
        Ok(user)
    }
}
