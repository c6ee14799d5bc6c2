//! Summation of the filtered record set.
//!
//! All sums are plain f64 accumulation with no rounding; display rounding is
//! the presentation layer's job so that repeated filtering stays consistent.

use std::collections::{BTreeMap, HashMap};

use super::normalize::{NormalizedRecord, RecordKind};

/// Credit and debit totals over a filtered record set.
///
/// Both totals are sums of absolute amounts, so `total_debit` is positive.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    /// Sum of amounts over credit records.
    pub total_credit: f64,
    /// Sum of amounts over debit records.
    pub total_debit: f64,
}

/// One slice of the category breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// The category name.
    pub name: String,
    /// The summed amount for this category.
    pub value: f64,
}

/// One point of the monthly spend series.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthTotal {
    /// The "YYYY-MM" month key.
    pub month: String,
    /// The summed amount for this month.
    pub value: f64,
}

/// Total credit and debit over the filtered records.
pub(super) fn summarize(records: &[&NormalizedRecord]) -> Summary {
    let mut summary = Summary::default();

    for record in records {
        match record.kind {
            RecordKind::Credit => summary.total_credit += record.amount,
            RecordKind::Debit => summary.total_debit += record.amount,
        }
    }

    summary
}

/// Sum amounts per chartable category, in first-seen order.
///
/// Uncategorized records (no category, or the "Other" sentinel) are skipped;
/// they still contribute to [summarize] totals.
pub(super) fn sum_by_category(records: &[&NormalizedRecord]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for record in records {
        let Some(category) = record.chart_category() else {
            continue;
        };

        match index_by_name.get(category) {
            Some(&index) => totals[index].value += record.amount,
            None => {
                index_by_name.insert(category.to_owned(), totals.len());
                totals.push(CategoryTotal {
                    name: category.to_owned(),
                    value: record.amount,
                });
            }
        }
    }

    totals
}

/// Sum amounts per month, sorted ascending by month key.
///
/// Lexicographic order equals chronological order for zero-padded "YYYY-MM"
/// keys. Undated records are skipped.
pub(super) fn sum_by_month(records: &[&NormalizedRecord]) -> Vec<MonthTotal> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();

    for record in records {
        if let Some(month) = record.month_key.as_deref() {
            *totals.entry(month).or_insert(0.0) += record.amount;
        }
    }

    totals
        .into_iter()
        .map(|(month, value)| MonthTotal {
            month: month.to_owned(),
            value,
        })
        .collect()
}
