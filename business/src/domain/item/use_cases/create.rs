use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::item::errors::ListItemError;
use crate::domain::item::model::{ItemDetails, ListItem};

pub struct CreateListItemParams {
    pub list_id: Uuid,
    pub name: String,
    pub details: ItemDetails,
}

#[async_trait]
pub trait CreateListItemUseCase: Send + Sync {
    async fn execute(&self, params: CreateListItemParams) -> Result<ListItem, ListItemError>;
}
