/// A candidate product name offered while the user types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub name: String,
    pub category: String,
    pub emoji: Option<String>,
}

/// Suggestions of one category, sorted by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionGroup {
    pub category: String,
    pub suggestions: Vec<Suggestion>,
}

/// Suggestions grouped by category. Groups keep the order in which their
/// category was first met: existing list items first, then the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedSuggestions {
    groups: Vec<SuggestionGroup>,
}

impl GroupedSuggestions {
    pub fn groups(&self) -> &[SuggestionGroup] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<SuggestionGroup> {
        self.groups
    }

    pub fn get(&self, category: &str) -> Option<&[Suggestion]> {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.suggestions.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of suggestions across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.suggestions.len()).sum()
    }

    pub(crate) fn push(&mut self, suggestion: Suggestion) {
        match self
            .groups
            .iter_mut()
            .find(|g| g.category == suggestion.category)
        {
            Some(group) => group.suggestions.push(suggestion),
            None => self.groups.push(SuggestionGroup {
                category: suggestion.category.clone(),
                suggestions: vec![suggestion],
            }),
        }
    }

    pub(crate) fn sort_groups_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&Suggestion, &Suggestion) -> std::cmp::Ordering,
    {
        for group in &mut self.groups {
            group.suggestions.sort_by(&mut compare);
        }
    }
}
