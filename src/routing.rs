//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    dashboard::{get_dashboard_page, update_dashboard_report},
    endpoints,
    export::export_statement,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    review::{get_review_page, save_mapping},
    service::StatementService,
    upload::{get_upload_page, upload_statement},
};

/// Return a router with all the app's routes.
pub fn build_router<S: StatementService>(state: AppState<S>) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::UPLOAD_VIEW, get(get_upload_page))
        .route(endpoints::REVIEW_VIEW, get(get_review_page))
        .route(endpoints::UPLOAD, post(upload_statement))
        .route(endpoints::DASHBOARD_REPORT, post(update_dashboard_report))
        .route(endpoints::MAPPING, post(save_mapping))
        .route(endpoints::EXPORT, get(export_statement))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}
