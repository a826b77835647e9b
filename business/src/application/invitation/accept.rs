use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::invitation::errors::InvitationError;
use crate::domain::invitation::model::InvitationStatus;
use crate::domain::invitation::repository::InvitationRepository;
use crate::domain::invitation::use_cases::accept::{
    AcceptInvitationParams, AcceptInvitationUseCase,
};
use crate::domain::list::repository::ListRepository;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::authenticated;

/// The two writes are independent. A failure between them leaves the user a
/// collaborator of a still pending invitation, which a retry reconciles since
/// adding a collaborator is idempotent.
pub struct AcceptInvitationUseCaseImpl {
    pub repository: Arc<dyn InvitationRepository>,
    pub list_repository: Arc<dyn ListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AcceptInvitationUseCase for AcceptInvitationUseCaseImpl {
    async fn execute(&self, params: AcceptInvitationParams) -> Result<(), InvitationError> {
        let user_id = authenticated(params.accepting_user_id)
            .ok_or(InvitationError::NotAuthenticated)?;

        self.logger.info(&format!(
            "User {} accepting invitation {} to list {}",
            user_id, params.invitation_id, params.list_id
        ));

        let invitation = self
            .repository
            .get_by_id(params.invitation_id)
            .await
            .inspect_err(|err| self.logger.failure("load invitation", err))?
            .ok_or(InvitationError::NotFound)?;

        if !invitation.is_addressed_to(&user_id) {
            self.logger.warn(&format!(
                "User {} is not the addressee of invitation {}",
                user_id, invitation.id
            ));
            return Err(InvitationError::NotParticipant);
        }
        if invitation.list_id != params.list_id {
            return Err(InvitationError::ListMismatch);
        }
        // accepting again is allowed so a half-finished acceptance can be retried
        if invitation.status == InvitationStatus::Rejected {
            return Err(InvitationError::AlreadyRejected);
        }

        self.list_repository
            .add_collaborator(invitation.list_id, &user_id)
            .await
            .map_err(|err| {
                self.logger.failure("add collaborator", &err);
                InvitationError::CollaboratorLink(err)
            })?;

        self.repository
            .update_status(params.invitation_id, InvitationStatus::Accepted)
            .await
            .inspect_err(|err| self.logger.failure("mark invitation accepted", err))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::invitation::model::{Invitation, InvitationDirection, NewInvitation};
    use crate::domain::list::model::{ListPatch, NewShoppingList, ShoppingList};
    use crate::domain::shared::live::LiveQuery;
    use crate::domain::shared::value_objects::UserId;
    use mockall::{Sequence, mock};
    use uuid::Uuid;

    mock! {
        pub InvitationRepo {}

        #[async_trait]
        impl InvitationRepository for InvitationRepo {
            async fn watch(
                &self,
                direction: InvitationDirection,
                user_id: &UserId,
            ) -> Result<LiveQuery<Invitation>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Option<Invitation>, RepositoryError>;
            async fn find_pending(
                &self,
                list_id: Uuid,
                to_user_id: &UserId,
            ) -> Result<Option<Invitation>, RepositoryError>;
            async fn create(&self, invitation: &NewInvitation) -> Result<Invitation, RepositoryError>;
            async fn update_status(&self, id: Uuid, status: InvitationStatus)
            -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn delete_for_list(&self, list_id: Uuid) -> Result<u64, RepositoryError>;
        }
    }

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

    fn invitation_to_bob(status: InvitationStatus) -> Invitation {
        Invitation::from_repository(
            Uuid::new_v4(),
            Uuid::new_v4(),
            UserId::new("alice"),
            UserId::new("bob"),
            status,
            chrono::Utc::now(),
        )
    }

    fn params_for(invitation: &Invitation) -> AcceptInvitationParams {
        AcceptInvitationParams {
            invitation_id: invitation.id,
            list_id: invitation.list_id,
            accepting_user_id: Some(UserId::new("bob")),
        }
    }

    fn repo_holding(invitation: &Invitation) -> MockInvitationRepo {
        let stored = invitation.clone();
        let mut invitations = MockInvitationRepo::new();
        invitations
            .expect_get_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        invitations
    }

    fn unreachable_lists() -> MockListRepo {
        let mut lists = MockListRepo::new();
        lists.expect_add_collaborator().never();
        lists
    }

    #[tokio::test]
    async fn should_link_collaborator_before_marking_accepted() {
        let invitation = invitation_to_bob(InvitationStatus::Pending);
        let list_id = invitation.list_id;
        let mut seq = Sequence::new();
        let mut lists = MockListRepo::new();
        lists
            .expect_add_collaborator()
            .withf(move |id, user| *id == list_id && user.as_str() == "bob")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        let mut invitations = repo_holding(&invitation);
        invitations
            .expect_update_status()
            .withf(|_, status| *status == InvitationStatus::Accepted)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let use_case = AcceptInvitationUseCaseImpl {
            repository: Arc::new(invitations),
            list_repository: Arc::new(lists),
            logger: mock_logger(),
        };

        assert!(use_case.execute(params_for(&invitation)).await.is_ok());
    }

    #[tokio::test]
    async fn should_leave_invitation_pending_when_link_fails() {
        let invitation = invitation_to_bob(InvitationStatus::Pending);
        let mut lists = MockListRepo::new();
        lists
            .expect_add_collaborator()
            .returning(|_, _| Err(RepositoryError::unavailable("offline")));
        let mut invitations = repo_holding(&invitation);
        invitations.expect_update_status().never();

        let use_case = AcceptInvitationUseCaseImpl {
            repository: Arc::new(invitations),
            list_repository: Arc::new(lists),
            logger: mock_logger(),
        };

        let result = use_case.execute(params_for(&invitation)).await;

        assert!(matches!(
            result.unwrap_err(),
            InvitationError::CollaboratorLink(RepositoryError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn should_report_status_write_failure() {
        let invitation = invitation_to_bob(InvitationStatus::Pending);
        let mut lists = MockListRepo::new();
        lists.expect_add_collaborator().returning(|_, _| Ok(()));
        let mut invitations = repo_holding(&invitation);
        invitations
            .expect_update_status()
            .returning(|_, _| Err(RepositoryError::unavailable("offline")));

        let use_case = AcceptInvitationUseCaseImpl {
            repository: Arc::new(invitations),
            list_repository: Arc::new(lists),
            logger: mock_logger(),
        };

        let result = use_case.execute(params_for(&invitation)).await;

        assert!(matches!(result.unwrap_err(), InvitationError::Repository(_)));
    }

    #[tokio::test]
    async fn should_retry_link_when_invitation_already_accepted() {
        let invitation = invitation_to_bob(InvitationStatus::Accepted);
        let mut lists = MockListRepo::new();
        lists.expect_add_collaborator().times(1).returning(|_, _| Ok(()));
        let mut invitations = repo_holding(&invitation);
        invitations.expect_update_status().times(1).returning(|_, _| Ok(()));

        let use_case = AcceptInvitationUseCaseImpl {
            repository: Arc::new(invitations),
            list_repository: Arc::new(lists),
            logger: mock_logger(),
        };

        assert!(use_case.execute(params_for(&invitation)).await.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_without_linking_when_invitation_is_unknown() {
        let mut invitations = MockInvitationRepo::new();
        invitations.expect_get_by_id().returning(|_| Ok(None));
        invitations.expect_update_status().never();

        let use_case = AcceptInvitationUseCaseImpl {
            repository: Arc::new(invitations),
            list_repository: Arc::new(unreachable_lists()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AcceptInvitationParams {
                invitation_id: Uuid::new_v4(),
                list_id: Uuid::new_v4(),
                accepting_user_id: Some(UserId::new("mallory")),
            })
            .await;

        assert!(matches!(result.unwrap_err(), InvitationError::NotFound));
    }

    #[tokio::test]
    async fn should_not_link_user_the_invitation_is_not_addressed_to() {
        let invitation = invitation_to_bob(InvitationStatus::Pending);
        let mut invitations = repo_holding(&invitation);
        invitations.expect_update_status().never();

        let use_case = AcceptInvitationUseCaseImpl {
            repository: Arc::new(invitations),
            list_repository: Arc::new(unreachable_lists()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AcceptInvitationParams {
                accepting_user_id: Some(UserId::new("mallory")),
                ..params_for(&invitation)
            })
            .await;

        assert!(matches!(result.unwrap_err(), InvitationError::NotParticipant));
    }

    #[tokio::test]
    async fn should_not_link_when_list_differs_from_invitation() {
        let invitation = invitation_to_bob(InvitationStatus::Pending);
        let mut invitations = repo_holding(&invitation);
        invitations.expect_update_status().never();

        let use_case = AcceptInvitationUseCaseImpl {
            repository: Arc::new(invitations),
            list_repository: Arc::new(unreachable_lists()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AcceptInvitationParams {
                list_id: Uuid::new_v4(),
                ..params_for(&invitation)
            })
            .await;

        assert!(matches!(result.unwrap_err(), InvitationError::ListMismatch));
    }

    #[tokio::test]
    async fn should_not_accept_rejected_invitation() {
        let invitation = invitation_to_bob(InvitationStatus::Rejected);
        let mut invitations = repo_holding(&invitation);
        invitations.expect_update_status().never();

        let use_case = AcceptInvitationUseCaseImpl {
            repository: Arc::new(invitations),
            list_repository: Arc::new(unreachable_lists()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params_for(&invitation)).await;

        assert!(matches!(result.unwrap_err(), InvitationError::AlreadyRejected));
    }

    #[tokio::test]
    async fn should_require_accepting_user() {
        let use_case = AcceptInvitationUseCaseImpl {
            repository: Arc::new(MockInvitationRepo::new()),
            list_repository: Arc::new(MockListRepo::new()),
            logger: mock_logger(),
        };
        let invitation = invitation_to_bob(InvitationStatus::Pending);

        let result = use_case
            .execute(AcceptInvitationParams {
                accepting_user_id: None,
                ..params_for(&invitation)
            })
            .await;

        assert!(matches!(result.unwrap_err(), InvitationError::NotAuthenticated));
    }
}
