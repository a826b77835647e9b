use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::find_by_email::{
    FindUserByEmailParams, FindUserByEmailUseCase,
};

pub struct FindUserByEmailUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FindUserByEmailUseCase for FindUserByEmailUseCaseImpl {
    async fn execute(&self, params: FindUserByEmailParams) -> Result<User, UserError> {
        let email = params.email.trim();
        if email.is_empty() {
            return Err(UserError::EmailEmpty);
        }

        let user = self
            .repository
            .find_by_email(email)
            .await
            .inspect_err(|err| self.logger.failure("find user by email", err))?;

        user.ok_or_else(|| {
            self.logger
                .info(&format!("No user registered with email {}", email));
            UserError::NotFound
        })
    }
}
