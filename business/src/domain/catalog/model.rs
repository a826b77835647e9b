use serde::{Deserialize, Serialize};

/// Category used when neither a list item nor the catalog names one.
pub const DEFAULT_CATEGORY: &str = "Other";

/// A known product name with its category and display emoji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

impl CatalogEntry {
    pub fn category_or_default(&self) -> &str {
        if self.category.is_empty() {
            DEFAULT_CATEGORY
        } else {
            &self.category
        }
    }
}

/// A category available for "add by category", with the emoji of its first catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub category: String,
    pub emoji: Option<String>,
}
