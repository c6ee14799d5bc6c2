#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;
pub(crate) mod service;
pub(crate) mod state;

pub(crate) use form::{assert_form_submit_button, assert_hx_endpoint, must_get_form};
pub(crate) use html::{assert_valid_html, parse_html_document};
pub(crate) use http::assert_content_type;
pub(crate) use service::StubStatementService;
pub(crate) use state::{
    sample_transactions, service_state_with_transactions, service_state_with_unknowns,
    statement_state_with_transactions, statement_state_with_unknowns,
};
