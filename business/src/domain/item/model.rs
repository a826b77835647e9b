use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ListItemError;

/// A product entry inside exactly one list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
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

impl ListItem {
    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        list_id: Uuid,
        name: String,
        quantity: Option<String>,
        category: Option<String>,
        emoji: Option<String>,
        note: Option<String>,
        completed: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            list_id,
            name,
            quantity,
            category,
            emoji,
            note,
            completed,
            created_at,
            updated_at,
        }
    }

    pub fn apply(&mut self, patch: &ListItemPatch, now: DateTime<Utc>) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(quantity) = &patch.quantity {
            self.quantity = Some(quantity.clone());
        }
        if let Some(note) = &patch.note {
            self.note = Some(note.clone());
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        self.updated_at = now;
    }
}

/// Optional attributes supplied when adding an item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDetails {
    pub quantity: Option<String>,
    pub category: Option<String>,
    pub emoji: Option<String>,
    pub note: Option<String>,
}

/// Validated data for an item about to be written; blank optional fields are
/// not stored. The store assigns the id and both timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewListItem {
    pub list_id: Uuid,
    pub name: String,
    pub quantity: Option<String>,
    pub category: Option<String>,
    pub emoji: Option<String>,
    pub note: Option<String>,
}

impl NewListItem {
    pub fn new(list_id: Uuid, name: String, details: ItemDetails) -> Result<Self, ListItemError> {
        if name.trim().is_empty() {
            return Err(ListItemError::NameEmpty);
        }

        Ok(Self {
            list_id,
            name,
            quantity: non_blank(details.quantity),
            category: non_blank(details.category),
            emoji: non_blank(details.emoji),
            note: non_blank(details.note),
        })
    }
}

/// Partial update of an item; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItemPatch {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub note: Option<String>,
    pub completed: Option<bool>,
}

impl ListItemPatch {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ListItemError> {
        match &self.name {
            Some(name) if name.trim().is_empty() => Err(ListItemError::NameEmpty),
            _ => Ok(()),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
