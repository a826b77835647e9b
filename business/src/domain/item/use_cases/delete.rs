use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::item::errors::ListItemError;

pub struct DeleteListItemParams {
    pub list_id: Uuid,
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteListItemUseCase: Send + Sync {
    async fn execute(&self, params: DeleteListItemParams) -> Result<(), ListItemError>;
}
