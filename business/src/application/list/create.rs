use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::list::errors::ListError;
use crate::domain::list::model::{NewShoppingList, ShoppingList};
use crate::domain::list::repository::ListRepository;
use crate::domain::list::use_cases::create::{CreateListParams, CreateListUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::authenticated;

pub struct CreateListUseCaseImpl {
    pub repository: Arc<dyn ListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateListUseCase for CreateListUseCaseImpl {
    async fn execute(&self, params: CreateListParams) -> Result<ShoppingList, ListError> {
        let owner_id = authenticated(params.owner_id).ok_or(ListError::NotAuthenticated)?;

        self.logger
            .info(&format!("Creating list '{}' for {}", params.title, owner_id));

        let new_list = NewShoppingList::new(owner_id, params.title, params.description)?;

        let list = self
            .repository
            .create(&new_list)
            .await
            .inspect_err(|err| self.logger.failure("create list", err))?;

        self.logger.info(&format!("List created with id: {}", list.id));
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::list::model::ListPatch;
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

    fn params(owner: Option<&str>, title: &str) -> CreateListParams {
        CreateListParams {
            owner_id: owner.map(UserId::new),
            title: title.to_string(),
            description: Some("   ".to_string()),
        }
    }

    #[tokio::test]
    async fn should_create_list_with_owner_as_collaborator() {
        let mut mock_repo = MockListRepo::new();
        mock_repo
            .expect_create()
            .withf(|list| {
                list.owner_id.as_str() == "alice"
                    && list.collaborators == vec![UserId::new("alice")]
                    && list.description.is_none()
            })
            .times(1)
            .returning(|list| Ok(sample_list(Uuid::new_v4(), list.owner_id.as_str(), &list.title)));

        let use_case = CreateListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let list = use_case.execute(params(Some("alice"), "Groceries")).await.unwrap();

        assert_eq!(list.title, "Groceries");
        assert!(list.is_member(&list.owner_id));
    }

    #[tokio::test]
    async fn should_reject_when_signed_out() {
        let use_case = CreateListUseCaseImpl {
            repository: Arc::new(MockListRepo::new()),
            logger: mock_logger(),
        };

        let missing = use_case.execute(params(None, "Groceries")).await;
        let blank = use_case.execute(params(Some("  "), "Groceries")).await;

        assert!(matches!(missing.unwrap_err(), ListError::NotAuthenticated));
        assert!(matches!(blank.unwrap_err(), ListError::NotAuthenticated));
    }

    #[tokio::test]
    async fn should_reject_blank_title_before_write() {
        let use_case = CreateListUseCaseImpl {
            repository: Arc::new(MockListRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(Some("alice"), " ")).await;

        assert!(matches!(result.unwrap_err(), ListError::TitleEmpty));
    }

    #[tokio::test]
    async fn should_surface_backend_failure() {
        let mut mock_repo = MockListRepo::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::unavailable("offline")));

        let use_case = CreateListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(Some("alice"), "Groceries")).await;

        assert!(matches!(result.unwrap_err(), ListError::Repository(_)));
    }
}
