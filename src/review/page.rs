use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, CATEGORY_BADGE_STYLE, FORM_SELECT_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_currency, link, loading_spinner,
    },
    navigation::NavBar,
    record::{RawAmount, RawRecord, Statement, UnknownMerchant},
    report::UNCATEGORIZED_LABEL,
    state::StatementState,
};

/// Route handler for the review page.
pub async fn get_review_page(State(state): State<StatementState>) -> Result<Response, Error> {
    let statement = state
        .statement
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire statement lock: {error}"))
        .map_err(|_| Error::StatementLockError)?;

    let nav_bar = NavBar::new(endpoints::REVIEW_VIEW);

    if statement.is_empty() {
        return Ok(review_no_data_view(nav_bar).into_response());
    }

    Ok(review_view(nav_bar, &statement).into_response())
}

fn review_no_data_view(nav_bar: NavBar) -> Markup {
    let nav_bar = nav_bar.into_html();
    let upload_link = link(endpoints::UPLOAD_VIEW, "upload a bank statement");

    let content = html!(
        (nav_bar)

        div class="flex flex-col items-center px-6 py-8 mx-auto text-gray-900 dark:text-white"
        {
            h2 class="text-xl font-bold" { "Nothing to review" }

            p { "First " (upload_link) ", then come back here to check the results." }
        }
    );

    base("Review", &[], &content)
}

fn review_view(nav_bar: NavBar, statement: &Statement) -> Markup {
    let nav_bar = nav_bar.into_html();

    let content = html!(
        (nav_bar)

        div
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            @if !statement.unknowns.is_empty() {
                (mapping_form(&statement.unknowns, &statement.categories))
            }

            (transactions_table(&statement.transactions))
        }
    );

    base("Review", &[], &content)
}

/// Renders the form for assigning categories to unknown merchants.
///
/// Each row posts a `name`/`category` pair; merchants left on the
/// placeholder option are skipped by the endpoint.
fn mapping_form(unknowns: &[UnknownMerchant], categories: &[String]) -> Markup {
    html!(
        div class="w-full mb-8"
        {
            h3 class="text-xl font-semibold mb-4" { "Unknown Merchants" }

            form
                hx-post=(endpoints::MAPPING)
                hx-target="#alert-container"
                hx-swap="innerHTML"
                hx-target-error="#alert-container"
                hx-disabled-elt="#save-button"
                hx-indicator="#indicator"
                class="bg-gray-50 dark:bg-gray-800 p-4 rounded-lg space-y-4"
            {
                p class="text-sm text-gray-600 dark:text-gray-400"
                {
                    "These merchants could not be categorized automatically.
                    Pick a category for each one you recognize:"
                }

                @for unknown in unknowns {
                    div class="grid grid-cols-2 gap-4 items-center"
                    {
                        input type="hidden" name="name" value=(unknown.name);

                        div
                        {
                            p class="font-medium" { (unknown.name) }

                            p class="text-sm text-gray-500 dark:text-gray-400"
                            {
                                (format_raw_amount(unknown.amount.as_ref()))
                            }
                        }

                        select name="category" class=(FORM_SELECT_STYLE)
                        {
                            option value="" selected { "Select a category" }

                            @for category in categories {
                                option value=(category) { (category) }
                            }
                        }
                    }
                }

                button
                    type="submit"
                    id="save-button"
                    class=(BUTTON_PRIMARY_STYLE)
                {
                    span class="inline htmx-indicator" id="indicator" { (loading_spinner()) }
                    " Save Categories"
                }
            }
        }
    )
}

fn transactions_table(transactions: &[RawRecord]) -> Markup {
    html!(
        div class="w-full"
        {
            h3 class="text-xl font-semibold mb-4" { "Transactions" }

            div class="overflow-x-auto rounded-lg shadow"
            {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                            th scope="col" class={(TABLE_CELL_STYLE) " text-right"} { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        }
                    }
                    tbody
                    {
                        @for record in transactions {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td class=(TABLE_CELL_STYLE)
                                {
                                    (record.date.as_deref().unwrap_or("-"))
                                }
                                td
                                    class={(TABLE_CELL_STYLE) " font-medium \
                                        text-gray-900 dark:text-white"}
                                {
                                    (record.description.as_deref().unwrap_or("-"))
                                }
                                td class={(TABLE_CELL_STYLE) " text-right whitespace-nowrap"}
                                {
                                    (format_raw_amount(record.amount.as_ref()))
                                }
                                td class=(TABLE_CELL_STYLE)
                                {
                                    (record.kind.as_deref().unwrap_or("-"))
                                }
                                td class=(TABLE_CELL_STYLE)
                                {
                                    span class=(CATEGORY_BADGE_STYLE)
                                    {
                                        (record.category.as_deref().unwrap_or(UNCATEGORIZED_LABEL))
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

/// Formats an amount field for display, falling back to the raw text when it
/// is not a number.
fn format_raw_amount(amount: Option<&RawAmount>) -> String {
    match amount {
        Some(RawAmount::Number(value)) => format_currency(*value),
        Some(RawAmount::Text(text)) => match text.trim().parse::<f64>() {
            Ok(value) => format_currency(value),
            Err(_) => text.clone(),
        },
        None => "-".to_owned(),
    }
}

#[cfg(test)]
mod review_page_tests {
    use axum::extract::State;
    use axum::http::StatusCode;
    use scraper::Selector;

    use crate::{
        state::StatementState,
        test_utils::{
            assert_valid_html, parse_html_document, statement_state_with_transactions,
            statement_state_with_unknowns,
        },
    };

    use super::get_review_page;

    #[tokio::test]
    async fn lists_each_unknown_merchant_with_a_select() {
        let state = statement_state_with_unknowns();
        let unknown_count = state.statement.lock().unwrap().unknowns.len();
        assert!(unknown_count > 0);

        let response = get_review_page(State(state)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let select_selector = Selector::parse("select[name='category']").unwrap();
        assert_eq!(html.select(&select_selector).count(), unknown_count);

        let hidden_selector = Selector::parse("input[type='hidden'][name='name']").unwrap();
        assert_eq!(html.select(&hidden_selector).count(), unknown_count);
    }

    #[tokio::test]
    async fn hides_mapping_form_when_all_merchants_are_categorized() {
        let state = statement_state_with_transactions();

        let response = get_review_page(State(state)).await.unwrap();
        let html = parse_html_document(response).await;

        let form_selector = Selector::parse("form").unwrap();
        assert_eq!(html.select(&form_selector).count(), 0);

        let row_selector = Selector::parse("tbody tr").unwrap();
        assert!(html.select(&row_selector).count() > 0);
    }

    #[tokio::test]
    async fn prompts_for_upload_when_no_statement_is_loaded() {
        let state = StatementState {
            statement: Default::default(),
        };

        let response = get_review_page(State(state)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html_document(response).await;
        let table_selector = Selector::parse("table").unwrap();
        assert_eq!(html.select(&table_selector).count(), 0);
    }
}
