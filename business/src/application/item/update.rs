use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ListItemError;
use crate::domain::item::model::ListItem;
use crate::domain::item::repository::ListItemRepository;
use crate::domain::item::use_cases::update::{UpdateListItemParams, UpdateListItemUseCase};
use crate::domain::logger::Logger;

pub struct UpdateListItemUseCaseImpl {
    pub repository: Arc<dyn ListItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateListItemUseCase for UpdateListItemUseCaseImpl {
    async fn execute(&self, params: UpdateListItemParams) -> Result<ListItem, ListItemError> {
        self.logger.info(&format!("Updating list item: {}", params.id));

        params.patch.validate()?;

        self.repository
            .update(params.list_id, params.id, &params.patch)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ListItemError::NotFound,
                other => ListItemError::Repository(other),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::model::{ListItemPatch, NewListItem};
    use crate::domain::shared::live::LiveQuery;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ListItemRepo {}

        #[async_trait]
        impl ListItemRepository for ListItemRepo {
            async fn get_all(&self, list_id: Uuid) -> Result<Vec<ListItem>, RepositoryError>;
            async fn get_by_id(&self, list_id: Uuid, id: Uuid) -> Result<ListItem, RepositoryError>;
            async fn watch(&self, list_id: Uuid) -> Result<LiveQuery<ListItem>, RepositoryError>;
            async fn create(&self, item: &NewListItem) -> Result<ListItem, RepositoryError>;
            async fn update(
                &self,
                list_id: Uuid,
                id: Uuid,
                patch: &ListItemPatch,
            ) -> Result<ListItem, RepositoryError>;
            async fn delete(&self, list_id: Uuid, id: Uuid) -> Result<(), RepositoryError>;
            async fn delete_all(&self, list_id: Uuid) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn sample_item(list_id: Uuid, name: &str, completed: bool) -> ListItem {
        let now = chrono::Utc::now();
        ListItem::from_repository(
            Uuid::new_v4(),
            list_id,
            name.to_string(),
            None,
            None,
            None,
            None,
            completed,
            now,
            now,
        )
    }

    #[tokio::test]
    async fn should_apply_patch_to_item() {
        let list_id = Uuid::new_v4();
        let mut mock_repo = MockListItemRepo::new();
        mock_repo
            .expect_update()
            .withf(|_, _, patch| patch.quantity.as_deref() == Some("2 l"))
            .returning(|list_id, _, patch| {
                let mut item = sample_item(list_id, "Milk", false);
                item.apply(patch, chrono::Utc::now());
                Ok(item)
            });

        let use_case = UpdateListItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let item = use_case
            .execute(UpdateListItemParams {
                list_id,
                id: Uuid::new_v4(),
                patch: ListItemPatch {
                    quantity: Some("2 l".to_string()),
                    ..ListItemPatch::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(item.quantity.as_deref(), Some("2 l"));
        assert_eq!(item.name, "Milk");
    }

    #[tokio::test]
    async fn should_reject_blank_name() {
        let use_case = UpdateListItemUseCaseImpl {
            repository: Arc::new(MockListItemRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateListItemParams {
                list_id: Uuid::new_v4(),
                id: Uuid::new_v4(),
                patch: ListItemPatch {
                    name: Some("".to_string()),
                    ..ListItemPatch::default()
                },
            })
            .await;

        assert!(matches!(result.unwrap_err(), ListItemError::NameEmpty));
    }

    #[tokio::test]
    async fn should_map_missing_item_to_not_found() {
        let mut mock_repo = MockListItemRepo::new();
        mock_repo
            .expect_update()
            .returning(|_, _, _| Err(RepositoryError::NotFound));

        let use_case = UpdateListItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateListItemParams {
                list_id: Uuid::new_v4(),
                id: Uuid::new_v4(),
                patch: ListItemPatch::completed(true),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ListItemError::NotFound));
    }
}
