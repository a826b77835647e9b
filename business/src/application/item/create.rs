use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ListItemError;
use crate::domain::item::model::{ListItem, NewListItem};
use crate::domain::item::repository::ListItemRepository;
use crate::domain::item::use_cases::create::{CreateListItemParams, CreateListItemUseCase};
use crate::domain::logger::Logger;

pub struct CreateListItemUseCaseImpl {
    pub repository: Arc<dyn ListItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateListItemUseCase for CreateListItemUseCaseImpl {
    async fn execute(&self, params: CreateListItemParams) -> Result<ListItem, ListItemError> {
        self.logger.info(&format!(
            "Adding item '{}' to list {}",
            params.name, params.list_id
        ));

        let new_item = NewListItem::new(params.list_id, params.name, params.details)?;

        let item = self
            .repository
            .create(&new_item)
            .await
            .inspect_err(|err| self.logger.failure("create list item", err))?;

        Ok(item)
    }
}
