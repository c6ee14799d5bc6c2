//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - Route handlers for displaying and updating the dashboard
//! - HTML view functions for rendering the dashboard UI
//! - The form type posted by the filter controls

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    Error,
    dashboard::{
        cards::summary_cards,
        charts::{
            DashboardChart, category_chart, charts_script, monthly_spend_chart,
            top_categories_chart,
        },
        tables::category_breakdown_table,
    },
    endpoints,
    html::{FORM_LABEL_STYLE, FORM_SELECT_STYLE, HeadElement, base, link},
    navigation::NavBar,
    report::{Report, ReportFilter, Selection},
    state::StatementState,
};

/// Form data posted by the dashboard filter controls.
#[derive(Deserialize)]
pub struct ReportFilterForm {
    /// The selected category, or "All".
    pub category: String,
    /// The selected month key, or "All".
    pub month: String,
}

impl ReportFilterForm {
    fn into_filter(self) -> ReportFilter {
        ReportFilter {
            category: Selection::parse(&self.category),
            month: Selection::parse(&self.month),
        }
    }
}

/// Display a page with an overview of the uploaded statement.
pub async fn get_dashboard_page(State(state): State<StatementState>) -> Result<Response, Error> {
    let statement = state
        .statement
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire statement lock: {error}"))
        .map_err(|_| Error::StatementLockError)?;

    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW);

    if statement.transactions.is_empty() {
        return Ok(dashboard_no_data_view(nav_bar).into_response());
    }

    let filter = ReportFilter::default();
    let report = Report::build(&statement.transactions, &filter);

    Ok(dashboard_view(nav_bar, &report, &filter).into_response())
}

/// API endpoint to rebuild the report for a new filter selection and return
/// the updated dashboard content.
pub async fn update_dashboard_report(
    State(state): State<StatementState>,
    Form(form): Form<ReportFilterForm>,
) -> Response {
    let statement = match state.statement.lock() {
        Ok(statement) => statement,
        Err(error) => {
            tracing::error!("could not acquire statement lock: {error}");
            return Error::StatementLockError.into_alert_response();
        }
    };

    if statement.transactions.is_empty() {
        return Error::NoStatement.into_alert_response();
    }

    let filter = form.into_filter();
    let report = Report::build(&statement.transactions, &filter);

    dashboard_content_partial(&report, &filter).into_response()
}

/// Creates the array of dashboard charts from the active report.
///
/// The chart options are serialized to JSON for ECharts consumption.
fn build_dashboard_charts(report: &Report) -> [DashboardChart; 3] {
    [
        DashboardChart {
            id: "category-chart",
            options: category_chart(&report.by_category).to_string(),
        },
        DashboardChart {
            id: "monthly-spend-chart",
            options: monthly_spend_chart(&report.monthly_spend).to_string(),
        },
        DashboardChart {
            id: "top-categories-chart",
            options: top_categories_chart(&report.top_categories).to_string(),
        },
    ]
}

/// Renders the dashboard page when no statement has been uploaded yet.
fn dashboard_no_data_view(nav_bar: NavBar) -> Markup {
    let nav_bar = nav_bar.into_html();
    let upload_link = link(endpoints::UPLOAD_VIEW, "uploading a bank statement");

    let content = html!(
        (nav_bar)

        div class="flex flex-col items-center px-6 py-8 mx-auto text-gray-900 dark:text-white"
        {
            h2 class="text-xl font-bold"
            {
                "Nothing here yet..."
            }

            p
            {
                "Charts will show up here once you add some transactions.
                You can get started by " (upload_link) "."
            }
        }
    );

    base("Dashboard", &[], &content)
}

/// Renders the main dashboard page with summary cards, filter controls, and
/// charts.
fn dashboard_view(nav_bar: NavBar, report: &Report, filter: &ReportFilter) -> Markup {
    let nav_bar = nav_bar.into_html();

    let content = html!(
        (nav_bar)

        div
            class="w-full max-w-screen-xl mx-auto px-2 lg:px-6 pt-4
                flex justify-end"
        {
            a
                href=(endpoints::EXPORT)
                class="px-4 py-2 bg-blue-500 dark:bg-blue-600
                    hover:bg-blue-600 hover:dark:bg-blue-700 text-white rounded"
            {
                "Download XLSX"
            }
        }

        div
            id="dashboard-content"
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            (dashboard_content_partial(report, filter))
        }
    );

    let scripts = [HeadElement::ScriptLink(
        "/static/echarts.6.0.0.min.js".to_owned(),
    )];

    base("Dashboard", &scripts, &content)
}

/// Renders the dashboard content for both the initial page load and HTMX
/// filter updates.
///
/// The chart initialization script is emitted inline after the containers so
/// it also runs when HTMX swaps this partial in.
fn dashboard_content_partial(report: &Report, filter: &ReportFilter) -> Markup {
    let charts = build_dashboard_charts(report);

    html!(
        (summary_cards(&report.summary))

        (filter_form(report, filter))

        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
            {
                @for chart in &charts {
                    div
                        id=(chart.id)
                        class="min-h-[380px] rounded dark:bg-gray-100"
                    {}
                }

                (category_breakdown_table(&report.by_category))
            }
        }

        (charts_script(&charts))
    )
}

/// Renders the category and month filter controls.
///
/// Any change to either select posts the whole form and swaps the updated
/// dashboard content in.
fn filter_form(report: &Report, filter: &ReportFilter) -> Markup {
    let selected_category = filter.category.label();
    let selected_month = filter.month.label();

    html!(
        form
            hx-post=(endpoints::DASHBOARD_REPORT)
            hx-target="#dashboard-content"
            hx-target-error="#alert-container"
            hx-swap="innerHTML"
            hx-trigger="change"
            class="w-full mb-4 grid grid-cols-1 sm:grid-cols-2 gap-4
                bg-gray-50 dark:bg-gray-800 p-4 rounded-lg"
        {
            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                select name="category" id="category" class=(FORM_SELECT_STYLE)
                {
                    @for option in &report.facets.categories {
                        option
                            value=(option)
                            selected[option.as_str() == selected_category]
                        {
                            (option)
                        }
                    }
                }
            }

            div
            {
                label for="month" class=(FORM_LABEL_STYLE) { "Month" }

                select name="month" id="month" class=(FORM_SELECT_STYLE)
                {
                    @for option in &report.facets.months {
                        option
                            value=(option)
                            selected[option.as_str() == selected_month]
                        {
                            (option)
                        }
                    }
                }
            }
        }
    )
}
