//! Extraction of the selectable filter options.
//!
//! Facets always derive from the full, unfiltered record set so that picking
//! a filter never removes its own option from the controls.

use std::collections::HashSet;

use super::{filter::ALL_LABEL, normalize::NormalizedRecord};

/// The distinct category and month options for the filter dropdowns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facets {
    /// "All" followed by the distinct raw category texts in first-seen order.
    pub categories: Vec<String>,
    /// "All" followed by the distinct month keys in first-seen order.
    pub months: Vec<String>,
}

/// Collect the filter options from the full normalized record set.
///
/// "All" is always the first entry of both lists, even for an empty set.
pub(super) fn extract(records: &[NormalizedRecord]) -> Facets {
    let mut categories = vec![ALL_LABEL.to_owned()];
    let mut months = vec![ALL_LABEL.to_owned()];
    let mut seen_categories = HashSet::new();
    let mut seen_months = HashSet::new();

    for record in records {
        if let Some(category) = record.category.as_deref()
            && seen_categories.insert(category.to_owned())
        {
            categories.push(category.to_owned());
        }

        if let Some(month) = record.month_key.as_deref()
            && seen_months.insert(month.to_owned())
        {
            months.push(month.to_owned());
        }
    }

    Facets { categories, months }
}

#[cfg(test)]
mod facets_tests {
    use super::extract;
    use crate::report::normalize::{NormalizedRecord, RecordKind};

    fn record(category: Option<&str>, month_key: Option<&str>) -> NormalizedRecord {
        NormalizedRecord {
            amount: 0.0,
            kind: RecordKind::Debit,
            category: category.map(str::to_owned),
            month_key: month_key.map(str::to_owned),
        }
    }

    #[test]
    fn all_is_always_first_even_for_empty_input() {
        let facets = extract(&[]);

        assert_eq!(facets.categories, vec!["All"]);
        assert_eq!(facets.months, vec!["All"]);
    }

    #[test]
    fn options_are_distinct_and_in_first_seen_order() {
        let records = vec![
            record(Some("Travel"), Some("2024-02")),
            record(Some("Food"), Some("2024-01")),
            record(Some("Travel"), Some("2024-02")),
            record(Some("Food"), Some("2024-03")),
        ];

        let facets = extract(&records);

        assert_eq!(facets.categories, vec!["All", "Travel", "Food"]);
        assert_eq!(facets.months, vec!["All", "2024-02", "2024-01", "2024-03"]);
    }

    #[test]
    fn other_sentinel_is_a_selectable_category() {
        let records = vec![record(Some("Other"), None)];

        let facets = extract(&records);

        assert_eq!(facets.categories, vec!["All", "Other"]);
    }

    #[test]
    fn uncategorized_and_undated_records_add_no_options() {
        let records = vec![record(None, None)];

        let facets = extract(&records);

        assert_eq!(facets.categories, vec!["All"]);
        assert_eq!(facets.months, vec!["All"]);
    }
}
