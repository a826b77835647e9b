use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ListItemError;
use crate::domain::item::repository::ListItemRepository;
use crate::domain::item::use_cases::subscribe::{
    SubscribeListItemsParams, SubscribeListItemsUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::live::{LiveQuery, Subscription};

pub struct SubscribeListItemsUseCaseImpl {
    pub repository: Arc<dyn ListItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubscribeListItemsUseCase for SubscribeListItemsUseCaseImpl {
    async fn execute(
        &self,
        params: SubscribeListItemsParams,
    ) -> Result<Subscription, ListItemError> {
        self.logger
            .debug(&format!("Watching items of list {}", params.list_id));

        let query = match self.repository.watch(params.list_id).await {
            Ok(query) => query,
            Err(err) => {
                self.logger.failure("watch list items", &err);
                LiveQuery::once(Err(err))
            }
        };

        Ok(Subscription::forward(query, params.on_change))
    }
}
