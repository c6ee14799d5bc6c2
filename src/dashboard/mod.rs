//! The dashboard page: summary cards, filter controls, and charts built from
//! the most recently uploaded statement.

mod cards;
mod charts;
mod handlers;
mod tables;

pub use handlers::{get_dashboard_page, update_dashboard_report};
