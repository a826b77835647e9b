use once_cell::sync::Lazy;

use super::model::{CatalogEntry, CategoryEntry};

static BUILTIN: Lazy<CatalogIndex> = Lazy::new(|| {
    CatalogIndex::from_json(include_str!("catalog.json"))
        .expect("embedded catalog.json must be a valid catalog")
});

/// Read-only set of known product names, kept in file order.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    entries: Vec<CatalogEntry>,
}

impl CatalogIndex {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(raw)?;
        Ok(Self::new(entries))
    }

    /// The catalog shipped with the application, parsed on first use.
    pub fn builtin() -> &'static CatalogIndex {
        &BUILTIN
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every distinct category in catalog order, each paired with the emoji
    /// of the first entry encountered for it.
    pub fn categories(&self) -> Vec<CategoryEntry> {
        let mut categories: Vec<CategoryEntry> = Vec::new();
        for entry in &self.entries {
            let category = entry.category_or_default();
            if categories.iter().any(|c| c.category == category) {
                continue;
            }
            categories.push(CategoryEntry {
                category: category.to_string(),
                emoji: entry.emoji.clone(),
            });
        }
        categories
    }
}
