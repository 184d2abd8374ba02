//! Dashboard module
//!
//! Provides the marketing dashboard page: summary cards and one line chart per
//! metric, filtered to the selected date range.

mod api;
mod cards;
mod charts;
mod handlers;

pub use api::get_summary;
pub use handlers::get_dashboard_page;
