//! The transaction aggregation and reporting engine.
//!
//! Turns the raw, heterogeneous records returned by the statement service
//! into the summaries that drive the dashboard: credit/debit totals, a
//! category breakdown, a top five ranking, and a monthly trend series.
//!
//! Every stage is a pure function of its inputs. The report is recomputed
//! from scratch whenever the statement or the filter selection changes;
//! nothing is cached between calls.

mod aggregate;
mod facets;
mod filter;
mod normalize;
mod rank;

pub use aggregate::{CategoryTotal, MonthTotal, Summary};
pub use facets::Facets;
pub use filter::{ReportFilter, Selection};
pub use normalize::{UNCATEGORIZED_LABEL, normalize_all};
pub use rank::TOP_CATEGORY_COUNT;

use crate::record::RawRecord;

/// Everything the dashboard needs for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Credit and debit totals over the filtered records.
    pub summary: Summary,
    /// Category sums in first-seen order.
    pub by_category: Vec<CategoryTotal>,
    /// The top five categories by value.
    pub top_categories: Vec<CategoryTotal>,
    /// Month sums in ascending month order.
    pub monthly_spend: Vec<MonthTotal>,
    /// The selectable filter options, derived from the unfiltered set.
    pub facets: Facets,
}

impl Report {
    /// Build the report for `records` under `filter`.
    ///
    /// Facets always come from the full record set so that changing a filter
    /// never removes its own option from the filter controls.
    pub fn build(records: &[RawRecord], filter: &ReportFilter) -> Self {
        let normalized = normalize_all(records);
        let facets = facets::extract(&normalized);

        let filtered = filter::apply(&normalized, filter);
        let summary = aggregate::summarize(&filtered);
        let by_category = aggregate::sum_by_category(&filtered);
        let top_categories = rank::top_categories(&by_category);
        let monthly_spend = aggregate::sum_by_month(&filtered);

        Self {
            summary,
            by_category,
            top_categories,
            monthly_spend,
            facets,
        }
    }
}
