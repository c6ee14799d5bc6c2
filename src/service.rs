//! The client interface to the external statement service.
//!
//! Parsing, categorization, mapping persistence, and Excel generation all
//! live in a separate service reached over HTTP. Handlers depend on the
//! [StatementService] trait so tests can swap in a stub.

use std::{collections::HashMap, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    record::{RawRecord, UnknownMerchant},
};

/// The statement service's response to an upload: parsed transactions,
/// merchants it could not categorize, and its category suggestions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ParsedStatement {
    /// All parsed transactions.
    #[serde(default)]
    pub transactions: Vec<RawRecord>,
    /// Merchants needing manual categorization, grouped by description.
    #[serde(default)]
    pub unknowns: Vec<UnknownMerchant>,
    /// Category options to offer on the review page.
    #[serde(default)]
    pub categories: Vec<String>,
}

/// The service's error payload, e.g. `{"error": "Parse failed: ..."}`.
#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    error: Option<String>,
}

/// Contract with the external statement service.
///
/// Implementations must not interpret the statement contents beyond the
/// declared payloads; any failure is surfaced as an [Error] and leaves the
/// app's in-memory statement untouched.
pub trait StatementService: Clone + Send + Sync + 'static {
    /// Send a statement file for parsing and categorization.
    fn parse_statement(
        &self,
        file_name: &str,
        data: Vec<u8>,
    ) -> impl Future<Output = Result<ParsedStatement, Error>> + Send;

    /// Persist a merchant name to category mapping.
    fn save_mapping(
        &self,
        mapping: &[(String, String)],
    ) -> impl Future<Output = Result<(), Error>> + Send;

    /// Generate an Excel report for `transactions` and return the file bytes.
    fn export_xlsx(
        &self,
        transactions: &[RawRecord],
    ) -> impl Future<Output = Result<Vec<u8>, Error>> + Send;
}

/// [StatementService] backed by the statement service's HTTP API.
#[derive(Debug, Clone)]
pub struct HttpStatementService {
    client: reqwest::Client,
    base_url: String,
}

/// Big PDF statements can take a while to parse server-side.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

impl HttpStatementService {
    /// Create a client for the service at `base_url`,
    /// e.g. "http://localhost:5000".
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("could not build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turn a non-success response into the service's error message, falling
/// back to the HTTP status when the body is not the expected payload.
async fn error_from_response(response: reqwest::Response) -> Error {
    let status = response.status();

    let message = match response.json::<ServiceErrorBody>().await {
        Ok(ServiceErrorBody { error: Some(error) }) => error,
        _ => format!("service answered with status {status}"),
    };

    Error::ServiceRejected(message)
}

impl StatementService for HttpStatementService {
    async fn parse_statement(
        &self,
        file_name: &str,
        data: Vec<u8>,
    ) -> Result<ParsedStatement, Error> {
        let part = reqwest::multipart::Part::bytes(data).file_name(file_name.to_owned());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.url("/api/upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|error| Error::ServiceUnreachable(error.to_string()))?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        response
            .json::<ParsedStatement>()
            .await
            .map_err(|error| Error::ServiceRejected(error.to_string()))
    }

    async fn save_mapping(&self, mapping: &[(String, String)]) -> Result<(), Error> {
        #[derive(Serialize)]
        struct MappingBody<'a> {
            mapping: HashMap<&'a str, &'a str>,
        }

        let body = MappingBody {
            mapping: mapping
                .iter()
                .map(|(name, category)| (name.as_str(), category.as_str()))
                .collect(),
        };

        let response = self
            .client
            .post(self.url("/api/update-mapping"))
            .json(&body)
            .send()
            .await
            .map_err(|error| Error::ServiceUnreachable(error.to_string()))?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        Ok(())
    }

    async fn export_xlsx(&self, transactions: &[RawRecord]) -> Result<Vec<u8>, Error> {
        #[derive(Serialize)]
        struct ExportBody<'a> {
            transactions: &'a [RawRecord],
            format: &'static str,
        }

        let response = self
            .client
            .post(self.url("/api/export"))
            .json(&ExportBody {
                transactions,
                format: "xlsx",
            })
            .send()
            .await
            .map_err(|error| Error::ServiceUnreachable(error.to_string()))?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|error| Error::ServiceUnreachable(error.to_string()))
    }
}
