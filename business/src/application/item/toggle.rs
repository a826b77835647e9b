use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ListItemError;
use crate::domain::item::model::{ListItem, ListItemPatch};
use crate::domain::item::repository::ListItemRepository;
use crate::domain::item::use_cases::toggle::{ToggleListItemParams, ToggleListItemUseCase};
use crate::domain::logger::Logger;

pub struct ToggleListItemUseCaseImpl {
    pub repository: Arc<dyn ListItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleListItemUseCase for ToggleListItemUseCaseImpl {
    async fn execute(&self, params: ToggleListItemParams) -> Result<ListItem, ListItemError> {
        let not_found = |e: RepositoryError| match e {
            RepositoryError::NotFound => ListItemError::NotFound,
            other => ListItemError::Repository(other),
        };

        let current = self
            .repository
            .get_by_id(params.list_id, params.id)
            .await
            .map_err(not_found)?;

        let completed = !current.completed;
        self.logger.debug(&format!(
            "Marking item {} as {}",
            params.id,
            if completed { "completed" } else { "pending" }
        ));

        self.repository
            .update(params.list_id, params.id, &ListItemPatch::completed(completed))
            .await
            .map_err(not_found)
    }
}
