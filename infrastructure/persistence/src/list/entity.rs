use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::list::model::ShoppingList;
use business::domain::shared::value_objects::UserId;

pub const LIST_COLUMNS: &str =
    "id, owner_id, title, description, collaborators, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct ListEntity {
    pub id: Uuid,
    pub owner_id: String,
    pub title: String,
    pub description: Option<String>,
    pub collaborators: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ListEntity {
    pub fn into_domain(self) -> ShoppingList {
        ShoppingList::from_repository(
            self.id,
            UserId::new(self.owner_id),
            self.title,
            self.description,
            self.collaborators.into_iter().map(UserId::new).collect(),
            self.created_at,
            self.updated_at,
        )
    }
}
