//! The statement upload page and endpoint.

mod endpoint;
mod page;

pub use endpoint::upload_statement;
pub use page::get_upload_page;
