use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ListItemError;
use crate::domain::item::repository::ListItemRepository;
use crate::domain::item::use_cases::delete::{DeleteListItemParams, DeleteListItemUseCase};
use crate::domain::logger::Logger;

pub struct DeleteListItemUseCaseImpl {
    pub repository: Arc<dyn ListItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteListItemUseCase for DeleteListItemUseCaseImpl {
    async fn execute(&self, params: DeleteListItemParams) -> Result<(), ListItemError> {
        self.logger.info(&format!("Deleting list item: {}", params.id));

        self.repository
            .get_by_id(params.list_id, params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ListItemError::NotFound,
                other => ListItemError::Repository(other),
            })?;

        self.repository.delete(params.list_id, params.id).await?;

        self.logger.info(&format!("List item deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::model::{ListItem, ListItemPatch, NewListItem};
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
    async fn should_delete_existing_item() {
        let mut mock_repo = MockListItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|list_id, _| Ok(sample_item(list_id, "Milk", true)));
        mock_repo.expect_delete().times(1).returning(|_, _| Ok(()));

        let use_case = DeleteListItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteListItemParams {
                list_id: Uuid::new_v4(),
                id: Uuid::new_v4(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_not_delete_missing_item() {
        let mut mock_repo = MockListItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = DeleteListItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteListItemParams {
                list_id: Uuid::new_v4(),
                id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ListItemError::NotFound));
    }
}
