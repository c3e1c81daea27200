//! Filter engine - search and category matching
//!
//! Matching is plain case-insensitive substring containment. The filtered view
//! is always a subsequence of the collection in original order.

use crate::thoughts::{Thought, ThoughtId};
use std::fmt;

/// Sentinel label for "no category restriction"
pub const ALL_CATEGORIES: &str = "All";

/// Category restriction for the filtered view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelector {
    #[default]
    All,
    Named(String),
}

impl CategorySelector {
    /// Whether a record's category satisfies this selector
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Named(name) => {
                category.is_some_and(|c| c.to_lowercase() == name.to_lowercase())
            }
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategorySelector::All => ALL_CATEGORIES,
            CategorySelector::Named(name) => name,
        }
    }
}

impl From<&str> for CategorySelector {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategorySelector::All
        } else {
            CategorySelector::Named(value.to_string())
        }
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current search string and category selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub category: CategorySelector,
}

impl FilterCriteria {
    pub fn new(search: impl Into<String>, category: impl Into<CategorySelector>) -> Self {
        Self {
            search: search.into(),
            category: category.into(),
        }
    }

    /// Search hits quote, explanation or author (any of them)
    pub fn matches_search(&self, thought: &Thought) -> bool {
        let needle = self.search.to_lowercase();
        [&thought.quote, &thought.explanation, &thought.author]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn matches_category(&self, thought: &Thought) -> bool {
        self.category.matches(thought.category.as_deref())
    }

    pub fn matches(&self, thought: &Thought) -> bool {
        self.matches_search(thought) && self.matches_category(thought)
    }

    /// Ids of matching records, in collection order
    pub fn apply(&self, thoughts: &[Thought]) -> Vec<ThoughtId> {
        thoughts
            .iter()
            .filter(|t| self.matches(t))
            .map(|t| t.id)
            .collect()
    }

    /// No restriction at all (empty search, "All")
    pub fn is_unrestricted(&self) -> bool {
        self.search.is_empty() && self.category == CategorySelector::All
    }
}

/// "All" followed by each distinct non-empty category in first-seen order
///
/// A record categorized literally "All" adds no second entry, since that
/// label always selects everything.
pub fn category_roster(thoughts: &[Thought]) -> Vec<String> {
    let mut roster = vec![ALL_CATEGORIES.to_string()];
    for category in thoughts.iter().filter_map(|t| t.category.as_deref()) {
        if !category.is_empty() && !roster.iter().any(|c| c == category) {
            roster.push(category.to_string());
        }
    }
    roster
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thoughts::sample;

    fn categorized() -> Vec<Thought> {
        vec![
            sample(0, "Quote 1", Some("Philosophy")),
            sample(1, "Quote 2", Some("Science")),
            sample(2, "Quote 3", Some("Life")),
            sample(3, "Quote 4", Some("Philosophy")),
        ]
    }

    fn explained() -> Vec<Thought> {
        let mut thoughts = vec![
            sample(0, "Quote 1", None),
            sample(1, "Quote 2", None),
            sample(2, "Quote 3", None),
        ];
        thoughts[0].explanation = "Explanation for quote 1 with keyword thinking.".to_string();
        thoughts[1].explanation = "Explanation for quote 2 about patterns.".to_string();
        thoughts[2].explanation = "Another explanation with thinking and patterns.".to_string();
        thoughts
    }

    fn ids(values: &[usize]) -> Vec<ThoughtId> {
        values.iter().copied().map(ThoughtId).collect()
    }

    #[test]
    fn category_filter_keeps_order() {
        let criteria = FilterCriteria::new("", "Philosophy");
        assert_eq!(criteria.apply(&categorized()), ids(&[0, 3]));
    }

    #[test]
    fn category_filter_is_case_insensitive() {
        let thoughts = categorized();
        assert_eq!(
            FilterCriteria::new("", "Philosophy").apply(&thoughts),
            FilterCriteria::new("", "philosophy").apply(&thoughts)
        );
    }

    #[test]
    fn unrestricted_returns_everything_in_order() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_unrestricted());
        assert_eq!(criteria.apply(&categorized()), ids(&[0, 1, 2, 3]));
    }

    #[test]
    fn search_hits_explanations() {
        let criteria = FilterCriteria::new("patterns", "All");
        assert_eq!(criteria.apply(&explained()), ids(&[1, 2]));
    }

    #[test]
    fn search_hits_quote_case_insensitively() {
        let criteria = FilterCriteria::new("quote 1", "All");
        // explanation 0 mentions "quote 1" too; still one record
        assert_eq!(criteria.apply(&explained()), ids(&[0]));
        assert_eq!(
            FilterCriteria::new("Quote 1", "All").apply(&explained()),
            ids(&[0])
        );
    }

    #[test]
    fn search_hits_author() {
        let criteria = FilterCriteria::new("author 3", "All");
        assert_eq!(criteria.apply(&explained()), ids(&[2]));
    }

    #[test]
    fn uncategorized_never_matches_named_selector() {
        let mut thoughts = categorized();
        thoughts.push(sample(4, "Quote 5", None));
        assert_eq!(FilterCriteria::new("", "Life").apply(&thoughts), ids(&[2]));
        assert_eq!(FilterCriteria::new("", "All").apply(&thoughts).len(), 5);
    }

    #[test]
    fn combined_filter_is_intersection() {
        let mut thoughts = categorized();
        thoughts[1].explanation = "patterns".to_string();
        thoughts[3].explanation = "patterns".to_string();

        let search_only = FilterCriteria::new("patterns", "All").apply(&thoughts);
        let category_only = FilterCriteria::new("", "Philosophy").apply(&thoughts);
        let combined = FilterCriteria::new("patterns", "Philosophy").apply(&thoughts);

        let intersection: Vec<ThoughtId> = search_only
            .iter()
            .copied()
            .filter(|id| category_only.contains(id))
            .collect();
        assert_eq!(combined, intersection);
        assert_eq!(combined, ids(&[3]));
    }

    #[test]
    fn filtering_is_idempotent() {
        let thoughts = explained();
        let criteria = FilterCriteria::new("thinking", "All");
        assert_eq!(criteria.apply(&thoughts), criteria.apply(&thoughts));
    }

    #[test]
    fn roster_is_distinct_first_seen_with_all_prefix() {
        let mut thoughts = categorized();
        thoughts.push(sample(4, "Quote 5", None));
        assert_eq!(
            category_roster(&thoughts),
            vec!["All", "Philosophy", "Science", "Life"]
        );
    }

    #[test]
    fn literal_all_category_is_not_duplicated() {
        let thoughts = vec![
            sample(0, "Quote 1", Some("All")),
            sample(1, "Quote 2", Some("Life")),
        ];
        assert_eq!(category_roster(&thoughts), vec!["All", "Life"]);
    }

    #[test]
    fn all_sentinel_parses_to_all() {
        assert_eq!(CategorySelector::from("All"), CategorySelector::All);
        assert_eq!(
            CategorySelector::from("Life"),
            CategorySelector::Named("Life".to_string())
        );
    }
}
