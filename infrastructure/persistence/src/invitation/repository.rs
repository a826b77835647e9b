use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::invitation::model::{
    Invitation, InvitationDirection, InvitationStatus, NewInvitation,
};
use business::domain::invitation::repository::InvitationRepository;
use business::domain::shared::live::LiveQuery;
use business::domain::shared::value_objects::UserId;

use super::entity::{INVITATION_COLUMNS, InvitationEntity};
use crate::change_feed::{ChangeFeed, Table};
use crate::db::repository_error;

pub struct InvitationRepositoryPostgres {
    pool: PgPool,
    feed: ChangeFeed,
}

impl InvitationRepositoryPostgres {
    pub fn new(pool: PgPool, feed: ChangeFeed) -> Self {
        Self { pool, feed }
    }
}

fn user_column(direction: InvitationDirection) -> &'static str {
    match direction {
        InvitationDirection::Incoming => "to_user_id",
        InvitationDirection::Outgoing => "from_user_id",
    }
}

async fn invitations_for(
    pool: &PgPool,
    direction: InvitationDirection,
    user_id: &str,
) -> Result<Vec<Invitation>, RepositoryError> {
    let entities = sqlx::query_as::<_, InvitationEntity>(&format!(
        "SELECT {} FROM invitations WHERE {} = $1 ORDER BY created_at DESC",
        INVITATION_COLUMNS,
        user_column(direction)
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(repository_error)?;

    Ok(entities.into_iter().map(InvitationEntity::into_domain).collect())
}

#[async_trait]
impl InvitationRepository for InvitationRepositoryPostgres {
    async fn watch(
        &self,
        direction: InvitationDirection,
        user_id: &UserId,
    ) -> Result<LiveQuery<Invitation>, RepositoryError> {
        let pool = self.pool.clone();
        let user_id = user_id.to_string();
        // user and list changes alter the enrichment of unchanged invitations
        Ok(self.feed.watch(&Table::ALL, move || {
            let pool = pool.clone();
            let user_id = user_id.clone();
            async move { invitations_for(&pool, direction, &user_id).await }
        }))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Invitation>, RepositoryError> {
        let entity = sqlx::query_as::<_, InvitationEntity>(&format!(
            "SELECT {} FROM invitations WHERE id = $1",
            INVITATION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(entity.map(InvitationEntity::into_domain))
    }

    async fn find_pending(
        &self,
        list_id: Uuid,
        to_user_id: &UserId,
    ) -> Result<Option<Invitation>, RepositoryError> {
        let entity = sqlx::query_as::<_, InvitationEntity>(&format!(
            "SELECT {} FROM invitations \
             WHERE list_id = $1 AND to_user_id = $2 AND status = 'pending' LIMIT 1",
            INVITATION_COLUMNS
        ))
        .bind(list_id)
        .bind(to_user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(entity.map(InvitationEntity::into_domain))
    }

    async fn create(&self, invitation: &NewInvitation) -> Result<Invitation, RepositoryError> {
        let entity = sqlx::query_as::<_, InvitationEntity>(&format!(
            "INSERT INTO invitations (id, list_id, from_user_id, to_user_id, status) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            INVITATION_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(invitation.list_id)
        .bind(invitation.from_user_id.as_str())
        .bind(invitation.to_user_id.as_str())
        .bind(InvitationStatus::Pending.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(entity.into_domain())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: InvitationStatus,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE invitations SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.to_string())
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM invitations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(())
    }

    async fn delete_for_list(&self, list_id: Uuid) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM invitations WHERE list_id = $1")
            .bind(list_id)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(result.rows_affected())
    }
}
