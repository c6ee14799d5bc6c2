//! SpendLens is a web app for exploring bank statement spending.
//!
//! Statements are uploaded to an external parsing and categorization service;
//! the returned transactions are held in memory and turned into filtered
//! summaries, category breakdowns, and monthly trends for the dashboard.
//!
//! This library provides a REST API that directly serves HTML pages.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod dashboard;
mod endpoints;
mod export;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod record;
mod report;
mod review;
mod routing;
mod service;
mod state;
mod upload;

#[cfg(test)]
mod test_utils;

pub use logging::logging_middleware;
pub use routing::build_router;
pub use service::{HttpStatementService, StatementService};
pub use state::AppState;

use crate::{
    alert::Alert,
    internal_server_error::InternalServerError,
    not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The uploaded file is not a supported statement format.
    #[error("file must be a PDF, CSV, or XLSX bank statement")]
    UnsupportedFileType,

    /// The multipart form could not be parsed as a statement file.
    #[error("could not parse multipart form: {0}")]
    MultipartError(String),

    /// The statement service could not be reached.
    ///
    /// This covers connection failures and timeouts. The previously uploaded
    /// statement, if any, is left untouched when this error occurs.
    #[error("the statement service could not be reached: {0}")]
    ServiceUnreachable(String),

    /// The statement service answered with an error payload.
    ///
    /// The string is the human-readable message from the service's error
    /// response and is safe to show to the user.
    #[error("the statement service rejected the request: {0}")]
    ServiceRejected(String),

    /// Could not acquire the lock on the in-memory statement.
    #[error("could not acquire the statement lock")]
    StatementLockError,

    /// An operation that needs transactions was requested before any
    /// statement was uploaded.
    #[error("no statement has been uploaded yet")]
    NoStatement,

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::ServiceUnreachable(details) => InternalServerError {
                description: "Statement Service Unavailable",
                fix: &format!(
                    "Could not reach the statement service ({details}). \
                    Check that the service is running and try again."
                ),
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        match self {
            Error::UnsupportedFileType => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "File type not supported".to_owned(),
                    details: "Upload a PDF, CSV, or XLSX export from your bank.".to_owned(),
                }
                .into_html(),
            )
                .into_response(),
            Error::ServiceUnreachable(details) => (
                StatusCode::BAD_GATEWAY,
                Alert::Error {
                    message: "Statement service unavailable".to_owned(),
                    details: format!(
                        "Could not reach the statement service: {details}. \
                        Your previously uploaded data is unchanged."
                    ),
                }
                .into_html(),
            )
                .into_response(),
            Error::ServiceRejected(message) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Request rejected".to_owned(),
                    details: message,
                }
                .into_html(),
            )
                .into_response(),
            Error::NoStatement => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "No statement uploaded".to_owned(),
                    details: "Upload a bank statement first.".to_owned(),
                }
                .into_html(),
            )
                .into_response(),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::ErrorSimple {
                        message: "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                    }
                    .into_html(),
                )
                    .into_response()
            }
        }
    }
}
