//! Implements a struct that holds the state of the REST server.

use std::sync::Arc;

use crate::{
    Error,
    metrics::{Dataset, DatasetStore},
    timezone::get_local_offset,
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The records the dashboard is rendered from.
    pub dataset: Arc<DatasetStore>,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] serving `dataset`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns an error if `local_timezone` is not a known timezone.
    pub fn new(dataset: Dataset, local_timezone: &str) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        tracing::info!(
            "Serving {:?} dataset with {} records",
            dataset.kind(),
            dataset.records().len()
        );

        Ok(Self {
            dataset: Arc::new(DatasetStore::new(dataset)),
            local_timezone: local_timezone.to_owned(),
        })
    }
}
