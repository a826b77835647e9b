use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ListError;
use crate::domain::shared::value_objects::UserId;

/// A shopping list. The owner is fixed at creation and is always the first
/// collaborator; collaborators only ever grow.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingList {
    pub id: Uuid,
    pub owner_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub collaborators: Vec<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShoppingList {
    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        owner_id: UserId,
        title: String,
        description: Option<String>,
        collaborators: Vec<UserId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner_id,
            title,
            description,
            collaborators,
            created_at,
            updated_at,
        }
    }

    pub fn is_member(&self, user_id: &UserId) -> bool {
        self.collaborators.contains(user_id)
    }

    /// Set-union of one collaborator. Returns false when already present.
    pub fn add_collaborator(&mut self, user_id: UserId) -> bool {
        if self.is_member(&user_id) {
            return false;
        }
        self.collaborators.push(user_id);
        true
    }

    pub fn apply(&mut self, patch: &ListPatch, now: DateTime<Utc>) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        self.updated_at = now;
    }
}

/// Validated data for a list about to be written; the store assigns the id
/// and both timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShoppingList {
    pub owner_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub collaborators: Vec<UserId>,
}

impl NewShoppingList {
    pub fn new(
        owner_id: UserId,
        title: String,
        description: Option<String>,
    ) -> Result<Self, ListError> {
        if title.trim().is_empty() {
            return Err(ListError::TitleEmpty);
        }

        Ok(Self {
            collaborators: vec![owner_id.clone()],
            owner_id,
            title,
            description: normalize_description(description),
        })
    }
}

/// Partial update of a list; `None` leaves the field untouched.
/// `description: Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
}

impl ListPatch {
    pub fn new(title: Option<String>, description: Option<String>) -> Result<Self, ListError> {
        if title.as_ref().is_some_and(|t| t.trim().is_empty()) {
            return Err(ListError::TitleEmpty);
        }

        Ok(Self {
            title,
            description: description.map(|d| normalize_description(Some(d))),
        })
    }
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}
