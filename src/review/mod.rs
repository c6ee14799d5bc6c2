//! The review page: the categorized transaction list and the form for
//! resolving merchants the statement service could not categorize.

mod endpoint;
mod page;

pub use endpoint::save_mapping;
pub use page::get_review_page;
