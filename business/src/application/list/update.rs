use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::list::errors::ListError;
use crate::domain::list::model::{ListPatch, ShoppingList};
use crate::domain::list::repository::ListRepository;
use crate::domain::list::use_cases::update::{UpdateListParams, UpdateListUseCase};
use crate::domain::logger::Logger;

pub struct UpdateListUseCaseImpl {
    pub repository: Arc<dyn ListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateListUseCase for UpdateListUseCaseImpl {
    async fn execute(&self, params: UpdateListParams) -> Result<ShoppingList, ListError> {
        self.logger.info(&format!("Updating list: {}", params.id));

        let patch = ListPatch::new(params.title, params.description)?;

        let list = self
            .repository
            .update(params.id, &patch)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ListError::NotFound,
                other => {
                    self.logger.failure("update list", &other);
                    ListError::Repository(other)
                }
            })?;

        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::list::model::NewShoppingList;
    use crate::domain::shared::live::LiveQuery;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ListRepo {}

        #[async_trait]
        impl ListRepository for ListRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<Option<ShoppingList>, RepositoryError>;
            async fn watch_for_member(
                &self,
                user_id: &UserId,
            ) -> Result<LiveQuery<ShoppingList>, RepositoryError>;
            async fn create(&self, list: &NewShoppingList) -> Result<ShoppingList, RepositoryError>;
            async fn update(&self, id: Uuid, patch: &ListPatch) -> Result<ShoppingList, RepositoryError>;
            async fn add_collaborator(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
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

    fn sample_list(id: Uuid, owner: &str, title: &str) -> ShoppingList {
        let now = chrono::Utc::now();
        ShoppingList::from_repository(
            id,
            UserId::new(owner),
            title.to_string(),
            None,
            vec![UserId::new(owner)],
            now,
            now,
        )
    }

    #[tokio::test]
    async fn should_patch_title_and_clear_blank_description() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockListRepo::new();
        mock_repo
            .expect_update()
            .withf(move |list_id, patch| {
                *list_id == id
                    && patch.title.as_deref() == Some("Weekend")
                    && patch.description == Some(None)
            })
            .returning(move |_, patch| {
                let mut list = sample_list(id, "alice", "Groceries");
                list.apply(patch, chrono::Utc::now());
                Ok(list)
            });

        let use_case = UpdateListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let list = use_case
            .execute(UpdateListParams {
                id,
                title: Some("Weekend".to_string()),
                description: Some("".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(list.title, "Weekend");
        assert_eq!(list.description, None);
    }

    #[tokio::test]
    async fn should_map_missing_list_to_not_found() {
        let mut mock_repo = MockListRepo::new();
        mock_repo
            .expect_update()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = UpdateListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateListParams {
                id: Uuid::new_v4(),
                title: Some("Weekend".to_string()),
                description: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ListError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_blank_title() {
        let use_case = UpdateListUseCaseImpl {
            repository: Arc::new(MockListRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateListParams {
                id: Uuid::new_v4(),
                title: Some(" ".to_string()),
                description: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ListError::TitleEmpty));
    }
}
