use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::item::model::{ListItem, ListItemPatch, NewListItem};
use business::domain::item::repository::ListItemRepository;
use business::domain::shared::live::LiveQuery;

use super::entity::{ITEM_COLUMNS, ListItemEntity};
use crate::change_feed::{ChangeFeed, Table};
use crate::db::repository_error;

pub struct ListItemRepositoryPostgres {
    pool: PgPool,
    feed: ChangeFeed,
}

impl ListItemRepositoryPostgres {
    pub fn new(pool: PgPool, feed: ChangeFeed) -> Self {
        Self { pool, feed }
    }
}

async fn items_of(pool: &PgPool, list_id: Uuid) -> Result<Vec<ListItem>, RepositoryError> {
    let entities = sqlx::query_as::<_, ListItemEntity>(&format!(
        "SELECT {} FROM list_items WHERE list_id = $1 ORDER BY created_at ASC",
        ITEM_COLUMNS
    ))
    .bind(list_id)
    .fetch_all(pool)
    .await
    .map_err(repository_error)?;

    Ok(entities.into_iter().map(ListItemEntity::into_domain).collect())
}

#[async_trait]
impl ListItemRepository for ListItemRepositoryPostgres {
    async fn get_all(&self, list_id: Uuid) -> Result<Vec<ListItem>, RepositoryError> {
        items_of(&self.pool, list_id).await
    }

    async fn get_by_id(&self, list_id: Uuid, id: Uuid) -> Result<ListItem, RepositoryError> {
        let entity = sqlx::query_as::<_, ListItemEntity>(&format!(
            "SELECT {} FROM list_items WHERE list_id = $1 AND id = $2",
            ITEM_COLUMNS
        ))
        .bind(list_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn watch(&self, list_id: Uuid) -> Result<LiveQuery<ListItem>, RepositoryError> {
        let pool = self.pool.clone();
        Ok(self.feed.watch(&[Table::ListItems], move || {
            let pool = pool.clone();
            async move { items_of(&pool, list_id).await }
        }))
    }

    async fn create(&self, item: &NewListItem) -> Result<ListItem, RepositoryError> {
        let entity = sqlx::query_as::<_, ListItemEntity>(&format!(
            "INSERT INTO list_items (id, list_id, name, quantity, category, emoji, note) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {}",
            ITEM_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(item.list_id)
        .bind(&item.name)
        .bind(&item.quantity)
        .bind(&item.category)
        .bind(&item.emoji)
        .bind(&item.note)
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(entity.into_domain())
    }

    async fn update(
        &self,
        list_id: Uuid,
        id: Uuid,
        patch: &ListItemPatch,
    ) -> Result<ListItem, RepositoryError> {
        let entity = sqlx::query_as::<_, ListItemEntity>(&format!(
            "UPDATE list_items SET \
                name = COALESCE($3, name), \
                quantity = COALESCE($4, quantity), \
                note = COALESCE($5, note), \
                completed = COALESCE($6, completed), \
                updated_at = now() \
             WHERE list_id = $1 AND id = $2 RETURNING {}",
            ITEM_COLUMNS
        ))
        .bind(list_id)
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.quantity)
        .bind(&patch.note)
        .bind(patch.completed)
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete(&self, list_id: Uuid, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM list_items WHERE list_id = $1 AND id = $2")
            .bind(list_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(())
    }

    async fn delete_all(&self, list_id: Uuid) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM list_items WHERE list_id = $1")
            .bind(list_id)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(result.rows_affected())
    }
}
