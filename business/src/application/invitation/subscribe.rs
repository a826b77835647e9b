use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::invitation::enrichment::InvitationEnricher;
use crate::domain::invitation::errors::InvitationError;
use crate::domain::invitation::repository::InvitationRepository;
use crate::domain::invitation::use_cases::subscribe::{
    SubscribeInvitationsParams, SubscribeInvitationsUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::live::{CollectionState, LiveQuery, Subscription};
use crate::domain::shared::value_objects::authenticated;

pub struct SubscribeInvitationsUseCaseImpl {
    pub repository: Arc<dyn InvitationRepository>,
    pub enricher: Arc<InvitationEnricher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubscribeInvitationsUseCase for SubscribeInvitationsUseCaseImpl {
    async fn execute(
        &self,
        params: SubscribeInvitationsParams,
    ) -> Result<Subscription, InvitationError> {
        let Some(user_id) = authenticated(params.user_id) else {
            (params.on_change)(CollectionState::empty());
            return Ok(Subscription::inert());
        };
        let direction = params.direction;

        self.logger.debug(&format!(
            "Watching {:?} invitations of {}",
            direction, user_id
        ));

        let query = match self.repository.watch(direction, &user_id).await {
            Ok(query) => query,
            Err(err) => {
                self.logger.failure("watch invitations", &err);
                LiveQuery::once(Err(err))
            }
        };

        let enricher = self.enricher.clone();
        Ok(Subscription::spawn(
            query,
            move |invitations| {
                let enricher = enricher.clone();
                async move { enricher.enrich_all(invitations, direction).await }
            },
            params.on_change,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::invitation::model::{
        EnrichedInvitation, Invitation, InvitationDirection, InvitationStatus, NewInvitation,
    };
    use crate::domain::list::model::{ListPatch, NewShoppingList, ShoppingList};
    use crate::domain::list::repository::ListRepository;
    use crate::domain::shared::live::StateCallback;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::user::model::User;
    use crate::domain::user::repository::UserRepository;
    use mockall::mock;
    use tokio::sync::mpsc;
    use uuid::Uuid;

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
            async fn upsert(&self, user: &User) -> Result<(), RepositoryError>;
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

    fn sample_user(id: &str, name: &str) -> User {
        User::from_repository(
            UserId::new(id),
            format!("{}@example.com", id),
            name.to_string(),
            None,
        )
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

    fn sample_invitation(list_id: Uuid, from: &str, to: &str) -> Invitation {
        Invitation::from_repository(
            Uuid::new_v4(),
            list_id,
            UserId::new(from),
            UserId::new(to),
            InvitationStatus::Pending,
            chrono::Utc::now(),
        )
    }

    type States = mpsc::UnboundedReceiver<CollectionState<EnrichedInvitation>>;

    fn collecting() -> (StateCallback<EnrichedInvitation>, States) {
        let (tx, rx) = mpsc::unbounded_channel();
        let callback: StateCallback<EnrichedInvitation> = Arc::new(move |state| {
            let _ = tx.send(state);
        });
        (callback, rx)
    }

    fn enricher() -> Arc<InvitationEnricher> {
        let mut users = MockUserRepo::new();
        users
            .expect_get_by_id()
            .returning(|id| Ok(Some(sample_user(id.as_str(), "Alice"))));
        let mut lists = MockListRepo::new();
        lists
            .expect_get_by_id()
            .returning(|id| Ok(Some(sample_list(id, "alice", "Groceries"))));
        Arc::new(InvitationEnricher {
            users: Arc::new(users),
            lists: Arc::new(lists),
            logger: mock_logger(),
        })
    }

    #[tokio::test]
    async fn should_emit_enriched_incoming_invitations() {
        let mut mock_repo = MockInvitationRepo::new();
        mock_repo
            .expect_watch()
            .withf(|direction, user| {
                *direction == InvitationDirection::Incoming && user.as_str() == "bob"
            })
            .returning(|_, _| {
                Ok(LiveQuery::once(Ok(vec![sample_invitation(
                    Uuid::new_v4(),
                    "alice",
                    "bob",
                )])))
            });
        let (on_change, mut states) = collecting();

        let use_case = SubscribeInvitationsUseCaseImpl {
            repository: Arc::new(mock_repo),
            enricher: enricher(),
            logger: mock_logger(),
        };
        let _subscription = use_case
            .execute(SubscribeInvitationsParams {
                user_id: Some(UserId::new("bob")),
                direction: InvitationDirection::Incoming,
                on_change,
            })
            .await
            .unwrap();

        let state = states.recv().await.unwrap();
        assert_eq!(state.records.len(), 1);
        assert_eq!(state.records[0].inviter_name.as_deref(), Some("Alice"));
        assert_eq!(state.records[0].list_title.as_deref(), Some("Groceries"));
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn should_degrade_to_empty_result_when_signed_out() {
        let (on_change, mut states) = collecting();
        let use_case = SubscribeInvitationsUseCaseImpl {
            repository: Arc::new(MockInvitationRepo::new()),
            enricher: enricher(),
            logger: mock_logger(),
        };

        let subscription = use_case
            .execute(SubscribeInvitationsParams {
                user_id: Some(UserId::new(" ")),
                direction: InvitationDirection::Outgoing,
                on_change,
            })
            .await
            .unwrap();

        assert!(!subscription.is_active());
        assert_eq!(states.try_recv().unwrap(), CollectionState::empty());
    }
}
