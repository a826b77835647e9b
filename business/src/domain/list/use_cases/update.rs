use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::list::errors::ListError;
use crate::domain::list::model::ShoppingList;

pub struct UpdateListParams {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[async_trait]
pub trait UpdateListUseCase: Send + Sync {
    async fn execute(&self, params: UpdateListParams) -> Result<ShoppingList, ListError>;
}
