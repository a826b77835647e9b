use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::item::errors::ListItemError;
use crate::domain::item::model::ListItem;

pub struct ToggleListItemParams {
    pub list_id: Uuid,
    pub id: Uuid,
}

/// Flips the completed flag of an item.
#[async_trait]
pub trait ToggleListItemUseCase: Send + Sync {
    async fn execute(&self, params: ToggleListItemParams) -> Result<ListItem, ListItemError>;
}
