use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::item::errors::ListItemError;
use crate::domain::item::model::ListItem;
use crate::domain::shared::live::{StateCallback, Subscription};

pub struct SubscribeListItemsParams {
    pub list_id: Uuid,
    pub on_change: StateCallback<ListItem>,
}

#[async_trait]
pub trait SubscribeListItemsUseCase: Send + Sync {
    async fn execute(&self, params: SubscribeListItemsParams)
    -> Result<Subscription, ListItemError>;
}
