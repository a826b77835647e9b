use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::item::errors::ListItemError;
use crate::domain::item::model::{ListItem, ListItemPatch};

pub struct UpdateListItemParams {
    pub list_id: Uuid,
    pub id: Uuid,
    pub patch: ListItemPatch,
}

#[async_trait]
pub trait UpdateListItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateListItemParams) -> Result<ListItem, ListItemError>;
}
