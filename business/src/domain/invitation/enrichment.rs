use std::sync::Arc;

use crate::domain::list::repository::ListRepository;
use crate::domain::logger::Logger;
use crate::domain::user::repository::UserRepository;

use super::model::{EnrichedInvitation, Invitation, InvitationDirection};

/// Joins invitations with the counterpart's display name and the list title.
///
/// Lookups are point reads issued per invitation on every snapshot. A lookup
/// that misses or fails only leaves its field empty.
pub struct InvitationEnricher {
    pub users: Arc<dyn UserRepository>,
    pub lists: Arc<dyn ListRepository>,
    pub logger: Arc<dyn Logger>,
}

impl InvitationEnricher {
    pub async fn enrich(
        &self,
        invitation: Invitation,
        direction: InvitationDirection,
    ) -> EnrichedInvitation {
        let counterpart = match direction {
            InvitationDirection::Incoming => &invitation.from_user_id,
            InvitationDirection::Outgoing => &invitation.to_user_id,
        };

        let counterpart_name = match self.users.get_by_id(counterpart).await {
            Ok(user) => user.map(|u| u.name),
            Err(err) => {
                self.logger.warn(&format!(
                    "Could not resolve user {} for invitation {}: {}",
                    counterpart, invitation.id, err
                ));
                None
            }
        };

        let list_title = match self.lists.get_by_id(invitation.list_id).await {
            Ok(list) => list.map(|l| l.title),
            Err(err) => {
                self.logger.warn(&format!(
                    "Could not resolve list {} for invitation {}: {}",
                    invitation.list_id, invitation.id, err
                ));
                None
            }
        };

        let mut enriched = EnrichedInvitation::bare(invitation);
        enriched.list_title = list_title;
        match direction {
            InvitationDirection::Incoming => enriched.inviter_name = counterpart_name,
            InvitationDirection::Outgoing => enriched.invitee_name = counterpart_name,
        }
        enriched
    }

    pub async fn enrich_all(
        &self,
        invitations: Vec<Invitation>,
        direction: InvitationDirection,
    ) -> Vec<EnrichedInvitation> {
        let mut enriched = Vec::with_capacity(invitations.len());
        for invitation in invitations {
            enriched.push(self.enrich(invitation, direction).await);
        }
        enriched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::invitation::model::InvitationStatus;
    use crate::domain::list::model::{ListPatch, NewShoppingList, ShoppingList};
    use crate::domain::shared::live::LiveQuery;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::user::model::User;
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;
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

    fn invitation(list_id: Uuid) -> Invitation {
        Invitation::from_repository(
            Uuid::new_v4(),
            list_id,
            UserId::new("alice"),
            UserId::new("bob"),
            InvitationStatus::Pending,
            Utc::now(),
        )
    }

    fn user(id: &str, name: &str) -> User {
        User::from_repository(UserId::new(id), format!("{id}@mail.test"), name.to_string(), None)
    }

    fn list(id: Uuid, title: &str) -> ShoppingList {
        ShoppingList::from_repository(
            id,
            UserId::new("alice"),
            title.to_string(),
            None,
            vec![UserId::new("alice")],
            Utc::now(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_attach_inviter_name_and_title_for_incoming() {
        let list_id = Uuid::new_v4();
        let mut users = MockUserRepo::new();
        users
            .expect_get_by_id()
            .withf(|id| id.as_str() == "alice")
            .returning(|_| Ok(Some(user("alice", "Alice"))));
        let mut lists = MockListRepo::new();
        lists
            .expect_get_by_id()
            .returning(move |id| Ok(Some(list(id, "Groceries"))));

        let enricher = InvitationEnricher {
            users: Arc::new(users),
            lists: Arc::new(lists),
            logger: mock_logger(),
        };

        let enriched = enricher
            .enrich(invitation(list_id), InvitationDirection::Incoming)
            .await;

        assert_eq!(enriched.inviter_name.as_deref(), Some("Alice"));
        assert!(enriched.invitee_name.is_none());
        assert_eq!(enriched.list_title.as_deref(), Some("Groceries"));
    }

    #[tokio::test]
    async fn should_attach_invitee_name_for_outgoing() {
        let mut users = MockUserRepo::new();
        users
            .expect_get_by_id()
            .withf(|id| id.as_str() == "bob")
            .returning(|_| Ok(Some(user("bob", "Bob"))));
        let mut lists = MockListRepo::new();
        lists
            .expect_get_by_id()
            .returning(move |id| Ok(Some(list(id, "Party"))));

        let enricher = InvitationEnricher {
            users: Arc::new(users),
            lists: Arc::new(lists),
            logger: mock_logger(),
        };

        let enriched = enricher
            .enrich(invitation(Uuid::new_v4()), InvitationDirection::Outgoing)
            .await;

        assert_eq!(enriched.invitee_name.as_deref(), Some("Bob"));
        assert!(enriched.inviter_name.is_none());
    }

    #[tokio::test]
    async fn should_leave_fields_empty_when_records_missing_or_lookup_fails() {
        let mut users = MockUserRepo::new();
        users.expect_get_by_id().returning(|_| Ok(None));
        let mut lists = MockListRepo::new();
        lists
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::unavailable("timeout")));

        let enricher = InvitationEnricher {
            users: Arc::new(users),
            lists: Arc::new(lists),
            logger: mock_logger(),
        };
        let original = invitation(Uuid::new_v4());

        let enriched = enricher
            .enrich_all(vec![original.clone()], InvitationDirection::Incoming)
            .await;

        assert_eq!(enriched, vec![EnrichedInvitation::bare(original)]);
    }
}
