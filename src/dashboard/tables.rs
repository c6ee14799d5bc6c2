//! Table views for dashboard data display.

use maud::{Markup, html};

use crate::{
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency},
    report::CategoryTotal,
};

/// Renders a table listing each category with its total spend.
///
/// Returns empty markup when there are no categorized debits, e.g. when the
/// active filter selects a credit-only month.
pub(super) fn category_breakdown_table(by_category: &[CategoryTotal]) -> Markup {
    if by_category.is_empty() {
        return html! {};
    }

    html! {
        div class="w-full"
        {
            h3 class="text-xl font-semibold mb-4" { "Category Breakdown" }

            div class="overflow-x-auto rounded-lg shadow"
            {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class={(TABLE_CELL_STYLE) " text-right"} { "Spend" }
                        }
                    }
                    tbody
                    {
                        @for total in by_category {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                th
                                    scope="row"
                                    class={(TABLE_CELL_STYLE) " font-medium \
                                        text-gray-900 dark:text-white"}
                                {
                                    (total.name)
                                }
                                td class={(TABLE_CELL_STYLE) " text-right whitespace-nowrap"}
                                {
                                    (format_currency(total.value))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tables_tests {
    use scraper::{Html, Selector};

    use crate::report::CategoryTotal;

    use super::category_breakdown_table;

    #[test]
    fn table_has_one_row_per_category() {
        let by_category = vec![
            CategoryTotal {
                name: "Food".to_owned(),
                value: 120.0,
            },
            CategoryTotal {
                name: "Travel".to_owned(),
                value: 80.0,
            },
        ];

        let html = category_breakdown_table(&by_category).into_string();
        let document = Html::parse_fragment(&html);
        let selector = Selector::parse("tbody tr").unwrap();

        assert_eq!(document.select(&selector).count(), 2);
    }

    #[test]
    fn empty_breakdown_renders_nothing() {
        assert!(category_breakdown_table(&[]).into_string().is_empty());
    }
}
