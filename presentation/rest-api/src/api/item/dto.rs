use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::catalog::color::color_for;
use business::domain::item::model::{ItemDetails, ListItem};
use business::domain::shared::live::CollectionState;

#[derive(Debug, Clone, Object)]
pub struct CreateListItemRequest {
    /// Item name (cannot be blank)
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub emoji: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub note: Option<String>,
}

impl CreateListItemRequest {
    pub fn details(&self) -> ItemDetails {
        ItemDetails {
            quantity: self.quantity.clone(),
            category: self.category.clone(),
            emoji: self.emoji.clone(),
            note: self.note.clone(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateListItemRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub note: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Object)]
pub struct ListItemResponse {
    pub id: String,
    pub list_id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    /// Display colour of the category (neutral grey when uncategorised)
    pub category_color: String,
    #[oai(skip_serializing_if_is_none)]
    pub emoji: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub note: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ListItem> for ListItemResponse {
    fn from(item: ListItem) -> Self {
        Self {
            id: item.id.to_string(),
            list_id: item.list_id.to_string(),
            category_color: color_for(item.category.as_deref().unwrap_or_default()).to_string(),
            name: item.name,
            quantity: item.quantity,
            category: item.category,
            emoji: item.emoji,
            note: item.note,
            completed: item.completed,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// One event of a list's item stream, oldest item first.
#[derive(Debug, Clone, Object)]
pub struct ItemsEvent {
    pub items: Vec<ListItemResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

impl From<CollectionState<ListItem>> for ItemsEvent {
    fn from(state: CollectionState<ListItem>) -> Self {
        Self {
            items: state.records.into_iter().map(Into::into).collect(),
            error: state.error,
        }
    }
}
