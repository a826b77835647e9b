use std::cmp::Ordering;
use std::collections::HashSet;

use icu_collator::{Collator, CollatorOptions, Strength};

use crate::domain::catalog::index::CatalogIndex;
use crate::domain::catalog::model::{CategoryEntry, DEFAULT_CATEGORY};
use crate::domain::item::model::ListItem;

use super::model::{GroupedSuggestions, Suggestion};

/// Builds the suggestions shown for `typed`.
///
/// Names starting with the trimmed, case-folded prefix are collected from the
/// list's own items first and from the catalog second, deduplicated on the
/// lower-cased name so that an item's own category and emoji always win over
/// the catalog's. Candidates are grouped by category and each group is sorted
/// by name. A blank prefix yields no suggestions.
pub fn suggest(items: &[ListItem], typed: &str, catalog: &CatalogIndex) -> GroupedSuggestions {
    let mut grouped = GroupedSuggestions::default();

    let typed = typed.trim();
    if typed.is_empty() {
        return grouped;
    }
    let prefix = typed.to_lowercase();

    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates: Vec<Suggestion> = Vec::new();

    for item in items {
        let key = item.name.to_lowercase();
        if item.name.is_empty() || !key.starts_with(&prefix) {
            continue;
        }
        let suggestion = Suggestion {
            name: item.name.clone(),
            category: item
                .category
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            emoji: item.emoji.clone(),
        };
        // later items with the same name replace earlier ones
        if seen.insert(key.clone()) {
            candidates.push(suggestion);
        } else if let Some(existing) = candidates
            .iter_mut()
            .find(|c| c.name.to_lowercase() == key)
        {
            *existing = suggestion;
        }
    }

    for entry in catalog.entries() {
        let key = entry.name.to_lowercase();
        if !key.starts_with(&prefix) || !seen.insert(key) {
            continue;
        }
        candidates.push(Suggestion {
            name: entry.name.clone(),
            category: entry.category_or_default().to_string(),
            emoji: entry.emoji.clone(),
        });
    }

    for candidate in candidates {
        grouped.push(candidate);
    }
    grouped.sort_groups_by(|a, b| compare_names(&a.name, &b.name));
    grouped
}

/// Categories a user can add an item by, with their representative emoji.
pub fn category_catalog(catalog: &CatalogIndex) -> Vec<CategoryEntry> {
    catalog.categories()
}

thread_local! {
    static NAME_COLLATOR: Option<Collator> = name_collator();
}

/// Root-locale collation at secondary strength: letters compare by their
/// alphabet position (`ё` files with `е`), accents count, case does not.
fn name_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Secondary);
    Collator::try_new(&Default::default(), options).ok()
}

/// Locale-aware, case-insensitive ordering with a case-sensitive tie-break,
/// so that the result is total and stable across runs.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NAME_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        })
        .then_with(|| a.cmp(b))
}
