//! Chart generation and rendering for the dashboard.
//!
//! This module creates the ECharts visualizations for the active report:
//! - **Spending by Category**: Donut chart of debit totals per category
//! - **Monthly Spend**: Line chart of totals per month
//! - **Top Categories**: Bar chart of the highest-spend categories
//!
//! Each chart is generated as JSON configuration for the ECharts library.
//! The initialization script is emitted inline, directly after the chart
//! containers, so that it runs both on the initial page load and when HTMX
//! swaps in updated dashboard content.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, JsFunction, Label, Tooltip,
        Trigger,
    },
    series::{Line, Pie, bar},
};
use maud::{Markup, PreEscaped, html};

use crate::report::{CategoryTotal, MonthTotal, TOP_CATEGORY_COUNT};

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// The script initializes ECharts instances with dark mode support and
/// responsive resizing. It must be placed after the chart container divs.
pub(super) fn charts_script(charts: &[DashboardChart]) -> Markup {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    html!( script { (PreEscaped(script_content)) } )
}

pub(super) fn category_chart(by_category: &[CategoryTotal]) -> Chart {
    let data: Vec<(f64, &str)> = by_category
        .iter()
        .map(|total| (total.value, total.name.as_str()))
        .collect();

    Chart::new()
        .title(Title::new().text("Spending by Category"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .series(
            Pie::new()
                .name("Spending")
                .radius(vec!["40%", "70%"])
                .avoid_label_overlap(true)
                .item_style(ItemStyle::new().border_radius(4))
                .label(Label::new().formatter("{b}"))
                .data(data),
        )
}

pub(super) fn monthly_spend_chart(monthly_spend: &[MonthTotal]) -> Chart {
    let labels: Vec<String> = monthly_spend
        .iter()
        .map(|total| total.month.clone())
        .collect();
    let values: Vec<f64> = monthly_spend.iter().map(|total| total.value).collect();

    Chart::new()
        .title(Title::new().text("Monthly Spend"))
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Line::new().name("Spend").data(values))
}

pub(super) fn top_categories_chart(top_categories: &[CategoryTotal]) -> Chart {
    let labels: Vec<String> = top_categories
        .iter()
        .map(|total| total.name.clone())
        .collect();
    let values: Vec<f64> = top_categories.iter().map(|total| total.value).collect();

    Chart::new()
        .title(
            Title::new()
                .text("Top Categories")
                .subtext(format!("Up to {TOP_CATEGORY_COUNT} highest by spend")),
        )
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(bar::Bar::new().name("Spend").data(values))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-IN', {
              style: 'currency',
              currency: 'INR',
              maximumFractionDigits: 0
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
