use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::item::errors::ListItemError;
use crate::domain::suggestion::model::GroupedSuggestions;

pub struct SuggestItemsParams {
    pub list_id: Uuid,
    pub typed: String,
}

/// Suggestions for the text typed into a list's "add item" field, drawn from
/// the list's current items and the product catalog.
#[async_trait]
pub trait SuggestItemsUseCase: Send + Sync {
    async fn execute(&self, params: SuggestItemsParams)
    -> Result<GroupedSuggestions, ListItemError>;
}
