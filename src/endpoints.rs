//! The URIs served by the dashboard and the backend API paths it consumes.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The dashboard page listing transactions and the balance.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The backend API route that lists transactions together with the balance.
///
/// This path is appended to the configured API base URL, it is not served by
/// this application.
pub const TRANSACTIONS_API: &str = "/transactions";
