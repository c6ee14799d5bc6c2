//! Summary cards for the dashboard header.

use maud::{Markup, html};

use crate::{
    html::format_currency,
    report::Summary,
};

const CARD_STYLE: &str = "p-4 rounded-lg shadow bg-white dark:bg-gray-800";
const CARD_LABEL_STYLE: &str = "text-sm text-gray-500 dark:text-gray-400";
const CREDIT_VALUE_STYLE: &str = "text-2xl font-bold text-green-600 dark:text-green-400";
const DEBIT_VALUE_STYLE: &str = "text-2xl font-bold text-red-600 dark:text-red-400";

/// Renders the credit and debit total cards for the active report.
pub(super) fn summary_cards(summary: &Summary) -> Markup {
    html! {
        div class="grid grid-cols-1 sm:grid-cols-2 gap-4 w-full mb-4"
        {
            div class=(CARD_STYLE)
            {
                p class=(CARD_LABEL_STYLE) { "Total Credit" }
                p class=(CREDIT_VALUE_STYLE) { (format_currency(summary.total_credit)) }
            }

            div class=(CARD_STYLE)
            {
                p class=(CARD_LABEL_STYLE) { "Total Debit" }
                p class=(DEBIT_VALUE_STYLE) { (format_currency(summary.total_debit)) }
            }
        }
    }
}

#[cfg(test)]
mod cards_tests {
    use scraper::{Html, Selector};

    use crate::report::Summary;

    use super::summary_cards;

    #[test]
    fn cards_show_formatted_totals() {
        let summary = Summary {
            total_credit: 1500.0,
            total_debit: 250.5,
        };

        let html = summary_cards(&summary).into_string();
        let document = Html::parse_fragment(&html);
        let selector = Selector::parse("p").unwrap();
        let text: Vec<String> = document
            .select(&selector)
            .map(|p| p.text().collect())
            .collect();

        assert!(text.iter().any(|t| t.contains("1,500.00")), "{text:?}");
        assert!(text.iter().any(|t| t.contains("250.50")), "{text:?}");
    }
}
