//! Downloading the loaded statement as an Excel report.

use axum::{
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    Error,
    endpoints,
    service::StatementService,
    state::ServiceState,
};

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Route handler for downloading the loaded transactions as an XLSX file.
///
/// The spreadsheet itself is generated by the statement service; this handler
/// forwards the loaded transactions and streams the file back as a download.
/// Redirects to the upload page when no statement is loaded.
pub async fn export_statement<S: StatementService>(
    State(state): State<ServiceState<S>>,
) -> Result<Response, Error> {
    // Clone the transactions so the lock is not held across the service call.
    let transactions = {
        let statement = state
            .statement
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire statement lock: {error}"))
            .map_err(|_| Error::StatementLockError)?;

        if statement.is_empty() {
            return Ok(Redirect::to(endpoints::UPLOAD_VIEW).into_response());
        }

        statement.transactions.clone()
    };

    let bytes = state
        .service
        .export_xlsx(&transactions)
        .await
        .inspect_err(|error| tracing::error!("Could not export statement: {error}"))?;

    tracing::info!(
        "Exported {} transactions as a {} byte spreadsheet",
        transactions.len(),
        bytes.len()
    );

    Ok((
        [
            (CONTENT_TYPE, XLSX_CONTENT_TYPE),
            (
                CONTENT_DISPOSITION,
                "attachment; filename=\"transactions.xlsx\"",
            ),
        ],
        bytes,
    )
        .into_response())
}
