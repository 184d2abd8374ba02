//! Metrics module
//!
//! The dashboard's data layer: daily records, the dataset they live in, the
//! date-range filter and the summary statistics.

mod dataset;
mod range;
mod record;
mod summary;

pub use dataset::{Dataset, DatasetKind, DatasetStore};
pub use range::{RangeMode, filter_records, resolve_range};
pub use record::{DailyRecord, Metric};
pub use summary::Summary;
