use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::list::errors::ListError;

pub struct DeleteListParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteListUseCase: Send + Sync {
    async fn execute(&self, params: DeleteListParams) -> Result<(), ListError>;
}
