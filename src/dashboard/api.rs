//! JSON view of the filtered records and their summary.

use axum::{
    extract::{Query, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use time::Date;

use crate::{
    Error,
    dashboard::handlers::{DashboardQuery, DashboardState},
    metrics::{DailyRecord, RangeMode, Summary, filter_records, resolve_range},
    timezone::today_in,
};

#[derive(Debug, Serialize)]
struct SummaryResponse<'a> {
    /// The applied range as a query value, or `None` when nothing was filtered.
    range: Option<&'static str>,
    /// The date the range was resolved against.
    today: Date,
    records: &'a [DailyRecord],
    summary: Summary,
}

/// Get the records in the requested range and their summary as JSON.
///
/// Takes the same `range` parameter as the dashboard page.
pub async fn get_summary(
    State(state): State<DashboardState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, Error> {
    let today = today_in(&state.local_timezone)?;
    let range = resolve_range(query.range.as_deref());
    let dataset = state.dataset.current(today);
    let records = filter_records(dataset.records(), range, today);

    let body = SummaryResponse {
        range: range.map(RangeMode::as_query_value),
        today,
        records: &records,
        summary: Summary::from_records(&records),
    };

    let json = serde_json::to_string(&body).map_err(|error| {
        tracing::error!("could not serialize summary: {error}");
        Error::JSONSerializationError(error.to_string())
    })?;

    Ok(([(CONTENT_TYPE, "application/json")], json).into_response())
}
