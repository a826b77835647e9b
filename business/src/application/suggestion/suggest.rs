use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::index::CatalogIndex;
use crate::domain::item::errors::ListItemError;
use crate::domain::item::repository::ListItemRepository;
use crate::domain::logger::Logger;
use crate::domain::suggestion::engine::suggest;
use crate::domain::suggestion::model::GroupedSuggestions;
use crate::domain::suggestion::use_cases::suggest::{SuggestItemsParams, SuggestItemsUseCase};

pub struct SuggestItemsUseCaseImpl {
    pub repository: Arc<dyn ListItemRepository>,
    pub catalog: Arc<CatalogIndex>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SuggestItemsUseCase for SuggestItemsUseCaseImpl {
    async fn execute(
        &self,
        params: SuggestItemsParams,
    ) -> Result<GroupedSuggestions, ListItemError> {
        if params.typed.trim().is_empty() {
            return Ok(GroupedSuggestions::default());
        }

        let items = self
            .repository
            .get_all(params.list_id)
            .await
            .inspect_err(|err| self.logger.failure("load items for suggestions", err))?;

        let grouped = suggest(&items, &params.typed, &self.catalog);
        self.logger.debug(&format!(
            "{} suggestions for '{}' in list {}",
            grouped.len(),
            params.typed,
            params.list_id
        ));
        Ok(grouped)
    }
}
