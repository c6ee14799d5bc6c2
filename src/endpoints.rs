//! The API endpoint URIs.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The landing page showing spending summaries and charts.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page for uploading a bank statement.
pub const UPLOAD_VIEW: &str = "/upload";
/// The page for reviewing categorized transactions and resolving unknown
/// merchants.
pub const REVIEW_VIEW: &str = "/review";
/// The page shown for unrecoverable server errors.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to upload a statement file for parsing and categorization.
pub const UPLOAD: &str = "/api/statements";
/// The route to recompute the dashboard content for a filter selection.
pub const DASHBOARD_REPORT: &str = "/api/dashboard";
/// The route to save a merchant name to category mapping.
pub const MAPPING: &str = "/api/mapping";
/// The route to download the current statement as an Excel report.
pub const EXPORT: &str = "/api/export";
