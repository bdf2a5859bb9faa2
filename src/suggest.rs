//! Autocomplete suggestions derived from the stored bets.

use std::collections::HashSet;

use crate::bet::{BetField, BetRecord};

/// Distinct titles and bettor names, in order of first appearance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SuggestionIndex {
    pub titles: Vec<String>,
    pub names: Vec<String>,
}

impl SuggestionIndex {
    pub fn derive(records: &[BetRecord]) -> Self {
        Self {
            titles: distinct(records.iter().map(|r| r.title.as_str())),
            names: distinct(records.iter().map(|r| r.bettor_name.as_str())),
        }
    }

    /// Source list for `field`. Numeric fields have no suggestions.
    pub fn values(&self, field: BetField) -> &[String] {
        match field {
            BetField::Title => &self.titles,
            BetField::Name => &self.names,
            BetField::Amount | BetField::Multiplier => &[],
        }
    }

    /// Entries containing `partial` case-insensitively, minus an exact match.
    /// An empty `partial` suggests nothing.
    pub fn filter(&self, partial: &str, field: BetField) -> Vec<String> {
        if partial.is_empty() {
            return Vec::new();
        }
        let needle = partial.to_lowercase();
        self.values(field)
            .iter()
            .filter(|item| item.as_str() != partial && item.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> SuggestionIndex {
        SuggestionIndex::derive(&[
            BetRecord::new("Match A", "Juan", 10.0, 2.0),
            BetRecord::new("Match B", "Ana", 10.0, 2.0),
            BetRecord::new("Match A", "juan", 5.0, 1.1),
        ])
    }

    #[test]
    fn test_derive_keeps_first_seen_order() {
        let idx = index();
        assert_eq!(idx.titles, vec!["Match A", "Match B"]);
        assert_eq!(idx.names, vec!["Juan", "Ana", "juan"]);
    }

    #[test]
    fn test_filter_case_insensitive_substring() {
        let idx = index();
        assert_eq!(idx.filter("match", BetField::Title), vec!["Match A", "Match B"]);
        assert_eq!(idx.filter("CH B", BetField::Title), vec!["Match B"]);
        assert_eq!(idx.filter("jua", BetField::Name), vec!["Juan", "juan"]);
    }

    #[test]
    fn test_filter_excludes_exact_match() {
        let idx = index();
        assert_eq!(idx.filter("Match A", BetField::Title), Vec::<String>::new());
        assert_eq!(idx.filter("Juan", BetField::Name), vec!["juan"]);
    }

    #[test]
    fn test_filter_empty_input_and_numeric_fields() {
        let idx = index();
        assert!(idx.filter("", BetField::Title).is_empty());
        assert!(idx.filter("1", BetField::Amount).is_empty());
    }

    #[test]
    fn test_derive_empty() {
        assert_eq!(SuggestionIndex::derive(&[]), SuggestionIndex::default());
    }
}
