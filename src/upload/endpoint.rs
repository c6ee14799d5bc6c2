use axum::{
    extract::{Multipart, State, multipart::Field},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    Error,
    endpoints,
    record::Statement,
    service::StatementService,
    state::ServiceState,
};

/// The statement formats the external service can parse.
const SUPPORTED_EXTENSIONS: [&str; 3] = ["pdf", "csv", "xlsx"];

/// Route handler for uploading a bank statement.
///
/// The file is forwarded to the statement service for parsing and
/// categorization, and the returned statement replaces the stored one
/// wholesale. On failure the stored statement is left untouched.
///
/// Redirects to the review page when the service reports merchants that need
/// manual categorization, otherwise to the dashboard.
pub async fn upload_statement<S: StatementService>(
    State(state): State<ServiceState<S>>,
    mut multipart: Multipart,
) -> Result<Response, Response> {
    let field = multipart
        .next_field()
        .await
        .map_err(|error| {
            tracing::error!("Could not read multipart form: {error}");
            Error::MultipartError(error.to_string()).into_alert_response()
        })?
        .ok_or_else(|| {
            Error::MultipartError("the form did not contain a file".to_owned())
                .into_alert_response()
        })?;

    let (file_name, data) = parse_statement_field(field)
        .await
        .map_err(|error| error.into_alert_response())?;

    let parsed = state
        .service
        .parse_statement(&file_name, data)
        .await
        .inspect_err(|error| tracing::error!("Statement service upload failed: {error}"))
        .map_err(|error| error.into_alert_response())?;

    tracing::info!(
        "Parsed '{}': {} transactions, {} unknown merchants",
        file_name,
        parsed.transactions.len(),
        parsed.unknowns.len()
    );

    let has_unknowns = !parsed.unknowns.is_empty();

    {
        let mut statement = state.statement.lock().map_err(|error| {
            tracing::error!("could not acquire statement lock: {error}");
            Error::StatementLockError.into_alert_response()
        })?;

        *statement = Statement {
            transactions: parsed.transactions,
            unknowns: parsed.unknowns,
            categories: parsed.categories,
        };
    }

    let redirect_to = if has_unknowns {
        endpoints::REVIEW_VIEW
    } else {
        endpoints::DASHBOARD_VIEW
    };

    Ok((HxRedirect(redirect_to.to_owned()), StatusCode::SEE_OTHER).into_response())
}

async fn parse_statement_field(field: Field<'_>) -> Result<(String, Vec<u8>), Error> {
    let file_name = match field.file_name() {
        Some(file_name) => file_name.to_owned(),
        None => {
            tracing::error!("Could not get file name from multipart form field: {field:#?}");
            return Err(Error::MultipartError(
                "Could not get file name from multipart form field".to_owned(),
            ));
        }
    };

    if !has_supported_extension(&file_name) {
        return Err(Error::UnsupportedFileType);
    }

    let data = match field.bytes().await {
        Ok(data) => data.to_vec(),
        Err(error) => {
            tracing::error!("Could not read data from multipart form field: {error}");
            return Err(Error::MultipartError(
                "Could not read data from multipart form field.".to_owned(),
            ));
        }
    };

    tracing::debug!("Received file '{}' that is {} bytes", file_name, data.len());

    Ok((file_name, data))
}

fn has_supported_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(stem, extension)| {
            !stem.is_empty() && SUPPORTED_EXTENSIONS.contains(&extension.to_lowercase().as_str())
        })
}

#[cfg(test)]
mod upload_endpoint_tests {
    use axum::http::StatusCode;
    use axum_test::{
        TestServer,
        multipart::{MultipartForm, Part},
    };

    use crate::{
        AppState, build_router, endpoints,
        record::{RawRecord, UnknownMerchant},
        service::ParsedStatement,
        test_utils::StubStatementService,
    };

    use super::has_supported_extension;

    #[test]
    fn supported_statement_extensions_pass() {
        for file_name in ["statement.pdf", "export.csv", "report.xlsx", "REPORT.XLSX"] {
            assert!(has_supported_extension(file_name), "{file_name}");
        }
    }

    #[test]
    fn unsupported_files_are_rejected() {
        for file_name in ["notes.txt", "archive.zip", "statement", ".pdf", "pdf"] {
            assert!(!has_supported_extension(file_name), "{file_name}");
        }
    }

    fn statement_form(file_name: &str) -> MultipartForm {
        MultipartForm::new().add_part(
            "file",
            Part::bytes(b"%PDF-1.4 stub".to_vec()).file_name(file_name),
        )
    }

    #[tokio::test]
    async fn upload_with_unknowns_redirects_to_review() {
        let parsed = ParsedStatement {
            transactions: vec![RawRecord {
                description: Some("ACME STORE".to_owned()),
                ..Default::default()
            }],
            unknowns: vec![UnknownMerchant {
                name: "ACME STORE".to_owned(),
                amount: None,
            }],
            categories: vec!["Shopping".to_owned()],
        };
        let state = AppState::new(StubStatementService::with_parse_response(parsed));
        let server = TestServer::new(build_router(state.clone())).unwrap();

        let response = server
            .post(endpoints::UPLOAD)
            .multipart(statement_form("statement.pdf"))
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("hx-redirect"), endpoints::REVIEW_VIEW);

        let statement = state.statement.lock().unwrap();
        assert_eq!(statement.transactions.len(), 1);
        assert_eq!(statement.unknowns.len(), 1);
    }

    #[tokio::test]
    async fn upload_without_unknowns_redirects_to_dashboard() {
        let parsed = ParsedStatement {
            transactions: vec![RawRecord::default()],
            unknowns: vec![],
            categories: vec![],
        };
        let state = AppState::new(StubStatementService::with_parse_response(parsed));
        let server = TestServer::new(build_router(state)).unwrap();

        let response = server
            .post(endpoints::UPLOAD)
            .multipart(statement_form("statement.csv"))
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("hx-redirect"), endpoints::DASHBOARD_VIEW);
    }

    #[tokio::test]
    async fn unsupported_upload_keeps_previous_statement() {
        let state = AppState::new(StubStatementService::default());
        let server = TestServer::new(build_router(state.clone())).unwrap();

        let response = server
            .post(endpoints::UPLOAD)
            .multipart(statement_form("notes.txt"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(state.statement.lock().unwrap().transactions.is_empty());
    }

    #[tokio::test]
    async fn unreachable_service_returns_bad_gateway_alert() {
        let state = AppState::new(StubStatementService::failing());
        let server = TestServer::new(build_router(state)).unwrap();

        let response = server
            .post(endpoints::UPLOAD)
            .multipart(statement_form("statement.pdf"))
            .await;

        response.assert_status(StatusCode::BAD_GATEWAY);
    }
}
