//! Coercion of raw statement records into a canonical shape.
//!
//! Malformed fields never raise an error; they degrade to neutral values
//! (zero amount, debit, no category, no month) so that a bad row can dent an
//! aggregate but never abort a batch.

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::record::{RawAmount, RawRecord};

/// The sentinel category the statement service assigns to transactions it
/// could not place. Kept out of the category breakdown, but still selectable
/// as a filter since it appears in the raw data.
pub const UNCATEGORIZED_LABEL: &str = "Other";

/// Whether a transaction added money to the account or took it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// Money in. Only records whose raw type is exactly "CREDIT".
    Credit,
    /// Money out. Everything else, including records with no type at all.
    Debit,
}

/// A raw record coerced into canonical types.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    /// The absolute transaction amount; 0.0 when the raw amount was missing
    /// or not a number.
    pub amount: f64,
    /// Credit or debit.
    pub kind: RecordKind,
    /// The raw category text, when present and non-empty. This keeps the
    /// "Other" sentinel so filters can match it; use [Self::chart_category]
    /// for aggregation.
    pub category: Option<String>,
    /// The "YYYY-MM" month bucket, when the raw date parsed.
    pub month_key: Option<String>,
}

impl NormalizedRecord {
    /// The category used for chart aggregation.
    ///
    /// Returns `None` for uncategorized records so the sentinel bucket stays
    /// out of the category series, even though such records still count
    /// toward the credit/debit totals.
    pub fn chart_category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|category| *category != UNCATEGORIZED_LABEL)
    }
}

/// Coerce one raw record. Never fails.
pub fn normalize(record: &RawRecord) -> NormalizedRecord {
    NormalizedRecord {
        amount: coerce_amount(record.amount.as_ref()),
        kind: coerce_kind(record.kind.as_deref()),
        category: record
            .category
            .clone()
            .filter(|category| !category.is_empty()),
        month_key: record.date.as_deref().and_then(parse_month_key),
    }
}

/// Coerce a full record set, preserving order.
pub fn normalize_all(records: &[RawRecord]) -> Vec<NormalizedRecord> {
    records.iter().map(normalize).collect()
}

fn coerce_amount(amount: Option<&RawAmount>) -> f64 {
    match amount {
        Some(RawAmount::Number(number)) => number.abs(),
        // `parse::<f64>` accepts "NaN" and "inf"; neither is a usable amount.
        Some(RawAmount::Text(text)) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(f64::abs)
            .unwrap_or(0.0),
        None => 0.0,
    }
}

fn coerce_kind(kind: Option<&str>) -> RecordKind {
    if kind == Some("CREDIT") {
        RecordKind::Credit
    } else {
        RecordKind::Debit
    }
}

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const SLASH_DATE: &[BorrowedFormatItem<'static>] = format_description!("[day]/[month]/[year]");
const DASH_DATE: &[BorrowedFormatItem<'static>] = format_description!("[day]-[month]-[year]");

/// Parse date-like text into a "YYYY-MM" month key.
///
/// The statement service serializes dates as "YYYY-MM-DD" or
/// "YYYY-MM-DD HH:MM:SS"; bank CSV exports also show up as "DD/MM/YYYY" or
/// "DD-MM-YYYY". Anything else is treated as undated.
fn parse_month_key(text: &str) -> Option<String> {
    let text = text.trim();

    // Strip a time suffix so "2024-01-05 00:00:00" parses as its date part.
    let iso_part = text.get(..10).unwrap_or(text);
    let date = Date::parse(iso_part, ISO_DATE)
        .or_else(|_| Date::parse(text, SLASH_DATE))
        .or_else(|_| Date::parse(text, DASH_DATE))
        .ok()?;

    Some(format!(
        "{:04}-{:02}",
        date.year(),
        u8::from(date.month())
    ))
}

#[cfg(test)]
mod normalize_tests {
    use super::{NormalizedRecord, RecordKind, normalize, parse_month_key};
    use crate::record::{RawAmount, RawRecord};

    #[test]
    fn amount_is_absolute_value() {
        let record = RawRecord {
            amount: Some(RawAmount::Number(-450.5)),
            ..Default::default()
        };

        assert_eq!(normalize(&record).amount, 450.5);
    }

    #[test]
    fn numeric_string_amount_is_coerced() {
        let record = RawRecord {
            amount: Some(RawAmount::Text(" -100.25 ".to_owned())),
            ..Default::default()
        };

        assert_eq!(normalize(&record).amount, 100.25);
    }

    #[test]
    fn malformed_amount_becomes_zero() {
        let garbage = RawRecord {
            amount: Some(RawAmount::Text("abc".to_owned())),
            ..Default::default()
        };
        let missing = RawRecord::default();

        assert_eq!(normalize(&garbage).amount, 0.0);
        assert_eq!(normalize(&missing).amount, 0.0);
    }

    #[test]
    fn non_finite_amount_becomes_zero() {
        for text in ["NaN", "nan", "inf", "-inf", "infinity"] {
            let record = RawRecord {
                amount: Some(RawAmount::Text(text.to_owned())),
                ..Default::default()
            };

            assert_eq!(normalize(&record).amount, 0.0, "{text}");
        }
    }

    #[test]
    fn only_exact_credit_counts_as_credit() {
        let credit = RawRecord {
            kind: Some("CREDIT".to_owned()),
            ..Default::default()
        };
        let lowercase = RawRecord {
            kind: Some("credit".to_owned()),
            ..Default::default()
        };
        let missing = RawRecord::default();

        assert_eq!(normalize(&credit).kind, RecordKind::Credit);
        assert_eq!(normalize(&lowercase).kind, RecordKind::Debit);
        assert_eq!(normalize(&missing).kind, RecordKind::Debit);
    }

    #[test]
    fn empty_category_becomes_none() {
        let record = RawRecord {
            category: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(normalize(&record).category, None);
    }

    #[test]
    fn other_sentinel_is_kept_raw_but_excluded_from_charts() {
        let record = RawRecord {
            category: Some("Other".to_owned()),
            ..Default::default()
        };

        let normalized = normalize(&record);
        assert_eq!(normalized.category.as_deref(), Some("Other"));
        assert_eq!(normalized.chart_category(), None);
    }

    #[test]
    fn chart_category_passes_real_categories_through() {
        let normalized = NormalizedRecord {
            amount: 0.0,
            kind: RecordKind::Debit,
            category: Some("Food".to_owned()),
            month_key: None,
        };

        assert_eq!(normalized.chart_category(), Some("Food"));
    }

    #[test]
    fn month_key_accepts_common_date_shapes() {
        assert_eq!(parse_month_key("2024-01-05"), Some("2024-01".to_owned()));
        assert_eq!(
            parse_month_key("2024-01-05 00:00:00"),
            Some("2024-01".to_owned())
        );
        assert_eq!(parse_month_key("05/01/2024"), Some("2024-01".to_owned()));
        assert_eq!(parse_month_key("05-01-2024"), Some("2024-01".to_owned()));
    }

    #[test]
    fn unparseable_date_becomes_none() {
        assert_eq!(parse_month_key("not a date"), None);
        assert_eq!(parse_month_key(""), None);
        assert_eq!(parse_month_key("2024-13-40"), None);
    }

    #[test]
    fn missing_date_normalizes_to_no_month() {
        assert_eq!(normalize(&RawRecord::default()).month_key, None);
    }
}
