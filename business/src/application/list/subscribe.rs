use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::list::errors::ListError;
use crate::domain::list::repository::ListRepository;
use crate::domain::list::use_cases::subscribe::{SubscribeListsParams, SubscribeListsUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::live::{CollectionState, LiveQuery, Subscription};
use crate::domain::shared::value_objects::authenticated;

pub struct SubscribeListsUseCaseImpl {
    pub repository: Arc<dyn ListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubscribeListsUseCase for SubscribeListsUseCaseImpl {
    async fn execute(&self, params: SubscribeListsParams) -> Result<Subscription, ListError> {
        let Some(user_id) = authenticated(params.user_id) else {
            (params.on_change)(CollectionState::empty());
            return Ok(Subscription::inert());
        };

        self.logger
            .debug(&format!("Watching lists of {}", user_id));

        let query = match self.repository.watch_for_member(&user_id).await {
            Ok(query) => query,
            Err(err) => {
                self.logger.failure("watch lists", &err);
                LiveQuery::once(Err(err))
            }
        };

        Ok(Subscription::forward(query, params.on_change))
    }
}
