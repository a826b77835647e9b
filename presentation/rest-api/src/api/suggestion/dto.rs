use poem_openapi::Object;

use business::domain::catalog::color::color_for;
use business::domain::catalog::model::CategoryEntry;
use business::domain::suggestion::model::{GroupedSuggestions, Suggestion, SuggestionGroup};

#[derive(Debug, Clone, Object)]
pub struct SuggestionResponse {
    pub name: String,
    pub category: String,
    #[oai(skip_serializing_if_is_none)]
    pub emoji: Option<String>,
}

impl From<Suggestion> for SuggestionResponse {
    fn from(suggestion: Suggestion) -> Self {
        Self {
            name: suggestion.name,
            category: suggestion.category,
            emoji: suggestion.emoji,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SuggestionGroupResponse {
    pub category: String,
    pub color: String,
    /// Sorted by name, case-insensitively
    pub suggestions: Vec<SuggestionResponse>,
}

impl From<SuggestionGroup> for SuggestionGroupResponse {
    fn from(group: SuggestionGroup) -> Self {
        Self {
            color: color_for(&group.category).to_string(),
            category: group.category,
            suggestions: group.suggestions.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SuggestionsResponse {
    /// Groups in order of first appearance
    pub groups: Vec<SuggestionGroupResponse>,
}

impl From<GroupedSuggestions> for SuggestionsResponse {
    fn from(grouped: GroupedSuggestions) -> Self {
        Self {
            groups: grouped.into_groups().into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    pub category: String,
    #[oai(skip_serializing_if_is_none)]
    pub emoji: Option<String>,
    pub color: String,
}

impl From<CategoryEntry> for CategoryResponse {
    fn from(entry: CategoryEntry) -> Self {
        Self {
            color: color_for(&entry.category).to_string(),
            category: entry.category,
            emoji: entry.emoji,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CategoryColorResponse {
    pub category: String,
    /// `#rrggbb`
    pub color: String,
}
