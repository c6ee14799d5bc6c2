//! Derives the top category ranking from the category breakdown.

use super::aggregate::CategoryTotal;

/// How many categories the dashboard's top list shows.
pub const TOP_CATEGORY_COUNT: usize = 5;

/// The top categories by summed amount, descending.
///
/// The sort is stable, so categories with equal totals keep their first-seen
/// relative order. Fewer than five categories returns them all; an empty
/// breakdown returns an empty list.
pub(super) fn top_categories(by_category: &[CategoryTotal]) -> Vec<CategoryTotal> {
    let mut ranked = by_category.to_vec();
    ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
    ranked.truncate(TOP_CATEGORY_COUNT);
    ranked
}
