//! The category and month filter stage.

use super::normalize::NormalizedRecord;

/// The label shown for, and posted by, the "no filter" option.
pub const ALL_LABEL: &str = "All";

/// One filter dimension: either everything, or one concrete value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// No filtering on this dimension.
    #[default]
    All,
    /// Keep only records matching this value exactly.
    Only(String),
}

impl Selection {
    /// Parse a posted filter value. "All" means no filter, anything else is
    /// taken as a concrete value.
    pub fn parse(text: &str) -> Self {
        if text == ALL_LABEL {
            Selection::All
        } else {
            Selection::Only(text.to_owned())
        }
    }

    /// Whether a record's field value passes this selection.
    ///
    /// A record with no value (`None`) can never match a concrete selection.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(want) => value == Some(want.as_str()),
        }
    }

    /// The label to mark as selected in the filter controls.
    pub fn label(&self) -> &str {
        match self {
            Selection::All => ALL_LABEL,
            Selection::Only(value) => value,
        }
    }
}

/// The active filter selection for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportFilter {
    /// Matched against the raw category text, so the "Other" sentinel is a
    /// valid concrete selection.
    pub category: Selection,
    /// Matched against the "YYYY-MM" month key. Undated records are excluded
    /// whenever a concrete month is selected.
    pub month: Selection,
}

/// Apply `filter` to a normalized record set, keeping order.
pub(super) fn apply<'a>(
    records: &'a [NormalizedRecord],
    filter: &ReportFilter,
) -> Vec<&'a NormalizedRecord> {
    records
        .iter()
        .filter(|record| {
            filter.category.matches(record.category.as_deref())
                && filter.month.matches(record.month_key.as_deref())
        })
        .collect()
}

#[cfg(test)]
mod filter_tests {
    use super::{ReportFilter, Selection, apply};
    use crate::report::normalize::{NormalizedRecord, RecordKind};

    fn record(category: Option<&str>, month_key: Option<&str>) -> NormalizedRecord {
        NormalizedRecord {
            amount: 1.0,
            kind: RecordKind::Debit,
            category: category.map(str::to_owned),
            month_key: month_key.map(str::to_owned),
        }
    }

    #[test]
    fn parse_distinguishes_all_from_concrete_values() {
        assert_eq!(Selection::parse("All"), Selection::All);
        assert_eq!(
            Selection::parse("Food"),
            Selection::Only("Food".to_owned())
        );
    }

    #[test]
    fn all_selection_keeps_everything() {
        let records = vec![
            record(Some("Food"), Some("2024-01")),
            record(None, None),
        ];

        let kept = apply(&records, &ReportFilter::default());

        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn concrete_category_requires_exact_match() {
        let records = vec![
            record(Some("Food"), Some("2024-01")),
            record(Some("Travel"), Some("2024-01")),
            record(None, Some("2024-01")),
        ];
        let filter = ReportFilter {
            category: Selection::Only("Food".to_owned()),
            month: Selection::All,
        };

        let kept = apply(&records, &filter);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].category.as_deref(), Some("Food"));
    }

    #[test]
    fn other_sentinel_is_a_matchable_category() {
        let records = vec![
            record(Some("Other"), None),
            record(Some("Food"), None),
        ];
        let filter = ReportFilter {
            category: Selection::Only("Other".to_owned()),
            month: Selection::All,
        };

        assert_eq!(apply(&records, &filter).len(), 1);
    }

    #[test]
    fn concrete_month_excludes_undated_records() {
        let records = vec![
            record(Some("Food"), Some("2024-01")),
            record(Some("Food"), None),
        ];
        let filter = ReportFilter {
            category: Selection::All,
            month: Selection::Only("2024-01".to_owned()),
        };

        let kept = apply(&records, &filter);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].month_key.as_deref(), Some("2024-01"));
    }

    #[test]
    fn both_dimensions_must_pass() {
        let records = vec![
            record(Some("Food"), Some("2024-01")),
            record(Some("Food"), Some("2024-02")),
            record(Some("Travel"), Some("2024-01")),
        ];
        let filter = ReportFilter {
            category: Selection::Only("Food".to_owned()),
            month: Selection::Only("2024-01".to_owned()),
        };

        assert_eq!(apply(&records, &filter).len(), 1);
    }
}
