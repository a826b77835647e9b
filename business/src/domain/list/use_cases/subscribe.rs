use async_trait::async_trait;

use crate::domain::list::errors::ListError;
use crate::domain::list::model::ShoppingList;
use crate::domain::shared::live::{StateCallback, Subscription};
use crate::domain::shared::value_objects::UserId;

pub struct SubscribeListsParams {
    pub user_id: Option<UserId>,
    pub on_change: StateCallback<ShoppingList>,
}

#[async_trait]
pub trait SubscribeListsUseCase: Send + Sync {
    async fn execute(&self, params: SubscribeListsParams) -> Result<Subscription, ListError>;
}
