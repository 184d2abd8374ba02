//! The endpoint URIs.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The dashboard page.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The route for the filtered records and summary as JSON.
pub const SUMMARY_API: &str = "/api/summary";
