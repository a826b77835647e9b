use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::list::model::ShoppingList;
use business::domain::shared::live::CollectionState;

#[derive(Debug, Clone, Object)]
pub struct CreateListRequest {
    /// List title (cannot be blank)
    pub title: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateListRequest {
    #[oai(skip_serializing_if_is_none)]
    pub title: Option<String>,
    /// A blank description clears it
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ListResponse {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Uids of every member, owner included
    pub collaborators: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ShoppingList> for ListResponse {
    fn from(list: ShoppingList) -> Self {
        Self {
            id: list.id.to_string(),
            owner_id: list.owner_id.into(),
            title: list.title,
            description: list.description,
            collaborators: list.collaborators.into_iter().map(String::from).collect(),
            created_at: list.created_at,
            updated_at: list.updated_at,
        }
    }
}

/// One event of the lists stream: the caller's lists, newest update first.
#[derive(Debug, Clone, Object)]
pub struct ListsEvent {
    pub lists: Vec<ListResponse>,
    /// Set when the feed failed; `lists` is then empty
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

impl From<CollectionState<ShoppingList>> for ListsEvent {
    fn from(state: CollectionState<ShoppingList>) -> Self {
        Self {
            lists: state.records.into_iter().map(Into::into).collect(),
            error: state.error,
        }
    }
}
