use async_trait::async_trait;

use crate::domain::list::errors::ListError;
use crate::domain::list::model::ShoppingList;
use crate::domain::shared::value_objects::UserId;

pub struct CreateListParams {
    /// Signed-in user; `None` when there is no session.
    pub owner_id: Option<UserId>,
    pub title: String,
    pub description: Option<String>,
}

#[async_trait]
pub trait CreateListUseCase: Send + Sync {
    async fn execute(&self, params: CreateListParams) -> Result<ShoppingList, ListError>;
}
