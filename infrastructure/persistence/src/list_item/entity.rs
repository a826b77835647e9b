use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::item::model::ListItem;

pub const ITEM_COLUMNS: &str =
    "id, list_id, name, quantity, category, emoji, note, completed, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct ListItemEntity {
    pub id: Uuid,
    pub list_id: Uuid,
    pub name: String,
    pub quantity: Option<String>,
    pub category: Option<String>,
    pub emoji: Option<String>,
    pub note: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ListItemEntity {
    pub fn into_domain(self) -> ListItem {
        ListItem::from_repository(
            self.id,
            self.list_id,
            self.name,
            self.quantity,
            self.category,
            self.emoji,
            self.note,
            self.completed,
            self.created_at,
            self.updated_at,
        )
    }
}
