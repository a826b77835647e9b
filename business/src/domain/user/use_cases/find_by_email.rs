use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct FindUserByEmailParams {
    pub email: String,
}

#[async_trait]
pub trait FindUserByEmailUseCase: Send + Sync {
    async fn execute(&self, params: FindUserByEmailParams) -> Result<User, UserError>;
}
