//! Alert messages swapped into the page's alert container by HTMX.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

/// A success or error message shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// An operation completed.
    Success {
        /// The headline of the alert.
        message: String,
        /// Supporting detail shown under the headline.
        details: String,
    },
    /// An operation failed.
    Error {
        /// The headline of the alert.
        message: String,
        /// Supporting detail shown under the headline.
        details: String,
    },
    /// An operation failed and there is nothing useful to add.
    ErrorSimple {
        /// The headline of the alert.
        message: String,
    },
}

const SUCCESS_STYLE: &str = "block p-4 mb-4 rounded-lg text-green-800 bg-green-50 \
    dark:bg-gray-800 dark:text-green-400";
const ERROR_STYLE: &str = "block p-4 mb-4 rounded-lg text-red-800 bg-red-50 \
    dark:bg-gray-800 dark:text-red-400";

impl Alert {
    /// Render the alert for the `#alert-container` target.
    pub fn into_html(self) -> Markup {
        let (style, message, details) = match self {
            Alert::Success { message, details } => (SUCCESS_STYLE, message, details),
            Alert::Error { message, details } => (ERROR_STYLE, message, details),
            Alert::ErrorSimple { message } => (ERROR_STYLE, message, String::new()),
        };

        html! {
            div class=(style) role="alert"
            {
                p class="font-medium" { (message) }

                @if !details.is_empty() {
                    p class="text-sm" { (details) }
                }
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}
