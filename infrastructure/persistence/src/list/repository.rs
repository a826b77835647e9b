use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::list::model::{ListPatch, NewShoppingList, ShoppingList};
use business::domain::list::repository::ListRepository;
use business::domain::shared::live::LiveQuery;
use business::domain::shared::value_objects::UserId;

use super::entity::{LIST_COLUMNS, ListEntity};
use crate::change_feed::{ChangeFeed, Table};
use crate::db::repository_error;

pub struct ListRepositoryPostgres {
    pool: PgPool,
    feed: ChangeFeed,
}

impl ListRepositoryPostgres {
    pub fn new(pool: PgPool, feed: ChangeFeed) -> Self {
        Self { pool, feed }
    }
}

async fn lists_for_member(
    pool: &PgPool,
    user_id: &str,
) -> Result<Vec<ShoppingList>, RepositoryError> {
    let entities = sqlx::query_as::<_, ListEntity>(&format!(
        "SELECT {} FROM lists WHERE $1 = ANY(collaborators) ORDER BY updated_at DESC",
        LIST_COLUMNS
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(repository_error)?;

    Ok(entities.into_iter().map(ListEntity::into_domain).collect())
}

#[async_trait]
impl ListRepository for ListRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<ShoppingList>, RepositoryError> {
        let entity = sqlx::query_as::<_, ListEntity>(&format!(
            "SELECT {} FROM lists WHERE id = $1",
            LIST_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(entity.map(ListEntity::into_domain))
    }

    async fn watch_for_member(
        &self,
        user_id: &UserId,
    ) -> Result<LiveQuery<ShoppingList>, RepositoryError> {
        let pool = self.pool.clone();
        let user_id = user_id.to_string();
        Ok(self.feed.watch(&[Table::Lists], move || {
            let pool = pool.clone();
            let user_id = user_id.clone();
            async move { lists_for_member(&pool, &user_id).await }
        }))
    }

    async fn create(&self, list: &NewShoppingList) -> Result<ShoppingList, RepositoryError> {
        let collaborators: Vec<String> =
            list.collaborators.iter().map(|c| c.to_string()).collect();

        let entity = sqlx::query_as::<_, ListEntity>(&format!(
            "INSERT INTO lists (id, owner_id, title, description, collaborators) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            LIST_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(list.owner_id.as_str())
        .bind(&list.title)
        .bind(&list.description)
        .bind(&collaborators)
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(entity.into_domain())
    }

    async fn update(&self, id: Uuid, patch: &ListPatch) -> Result<ShoppingList, RepositoryError> {
        let entity = sqlx::query_as::<_, ListEntity>(&format!(
            "UPDATE lists SET \
                title = COALESCE($2, title), \
                description = CASE WHEN $3 THEN $4 ELSE description END, \
                updated_at = now() \
             WHERE id = $1 RETURNING {}",
            LIST_COLUMNS
        ))
        .bind(id)
        .bind(&patch.title)
        .bind(patch.description.is_some())
        .bind(patch.description.clone().flatten())
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn add_collaborator(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError> {
        // array union: the row is only touched when the user is missing
        let added = sqlx::query(
            "UPDATE lists SET collaborators = array_append(collaborators, $2), updated_at = now() \
             WHERE id = $1 AND NOT ($2 = ANY(collaborators))",
        )
        .bind(id)
        .bind(user_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(repository_error)?
        .rows_affected();

        if added == 0 {
            let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM lists WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(repository_error)?;
            if !exists {
                return Err(RepositoryError::NotFound);
            }
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM lists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(())
    }
}
