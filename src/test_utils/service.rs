use std::sync::{Arc, Mutex};

use crate::{
    Error,
    record::RawRecord,
    service::{ParsedStatement, StatementService},
};

/// A [StatementService] stand-in that records calls and answers from canned
/// data instead of the network.
#[derive(Debug, Clone, Default)]
pub(crate) struct StubStatementService {
    fail: bool,
    parse_response: ParsedStatement,
    saved_mappings: Arc<Mutex<Vec<(String, String)>>>,
}

impl StubStatementService {
    /// A stub whose every call fails with [Error::ServiceUnreachable].
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// A stub that answers uploads with `parse_response`.
    pub(crate) fn with_parse_response(parse_response: ParsedStatement) -> Self {
        Self {
            parse_response,
            ..Default::default()
        }
    }

    /// The mappings passed to [StatementService::save_mapping] so far.
    pub(crate) fn saved_mappings(&self) -> Vec<(String, String)> {
        self.saved_mappings.lock().unwrap().clone()
    }
}

impl StatementService for StubStatementService {
    async fn parse_statement(
        &self,
        _file_name: &str,
        _data: Vec<u8>,
    ) -> Result<ParsedStatement, Error> {
        if self.fail {
            return Err(Error::ServiceUnreachable("stub failure".to_owned()));
        }

        Ok(self.parse_response.clone())
    }

    async fn save_mapping(&self, mapping: &[(String, String)]) -> Result<(), Error> {
        if self.fail {
            return Err(Error::ServiceUnreachable("stub failure".to_owned()));
        }

        self.saved_mappings.lock().unwrap().extend_from_slice(mapping);

        Ok(())
    }

    async fn export_xlsx(&self, _transactions: &[RawRecord]) -> Result<Vec<u8>, Error> {
        if self.fail {
            return Err(Error::ServiceUnreachable("stub failure".to_owned()));
        }

        Ok(b"spreadsheet bytes".to_vec())
    }
}
