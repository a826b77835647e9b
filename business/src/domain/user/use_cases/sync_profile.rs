use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

/// Identity provider claims of the user who just signed in.
pub struct SyncUserProfileParams {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub photo_url: Option<String>,
}

#[async_trait]
pub trait SyncUserProfileUseCase: Send + Sync {
    async fn execute(&self, params: SyncUserProfileParams) -> Result<User, UserError>;
}
