//! The page shown when the server cannot recover from an error.
//!
//! Most failures in this app surface as inline alerts so the uploaded
//! statement stays on screen; this full page is the fallback for errors with
//! no page left to return to.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// The copy for the 500 error page.
pub struct InternalServerError<'a> {
    /// What went wrong, in user-facing terms.
    pub description: &'a str,
    /// What the user can do about it.
    pub fix: &'a str,
}

impl Default for InternalServerError<'_> {
    fn default() -> Self {
        Self {
            description: "Something went wrong on our end.",
            fix: "Your uploaded statement is unaffected. Reload the page, or \
                check the server logs if this keeps happening",
        }
    }
}

impl InternalServerError<'_> {
    pub fn into_html(self) -> Html<String> {
        Html(error_view("Internal Server Error", "500", self.description, self.fix).into_string())
    }
}

impl IntoResponse for InternalServerError<'_> {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.into_html()).into_response()
    }
}

/// Route handler for the internal server error page.
pub async fn get_internal_server_error_page() -> Response {
    InternalServerError::default().into_response()
}
