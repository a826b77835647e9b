use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;
    /// Exact match on email; the first stored match wins when several exist.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    async fn upsert(&self, user: &User) -> Result<(), RepositoryError>;
}
