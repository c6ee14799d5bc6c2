//! Defines the page to display when a route does not exist.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

pub fn get_404_not_found_response() -> Response {
    let description = "Sorry, the page you are looking for does not exist.";
    let fix = "Head back to the dashboard";

    (
        StatusCode::NOT_FOUND,
        Html(error_view("Not Found", "404", description, fix).into_string()),
    )
        .into_response()
}
