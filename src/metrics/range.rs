//! Date-range selection over a dataset.

use time::{Date, Duration};

use crate::metrics::record::DailyRecord;

/// A named window of days ending today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeMode {
    Last7Days,
    Last30Days,
    ThisMonth,
}

impl RangeMode {
    /// The range shown before the user picks one.
    pub fn default_mode() -> Self {
        Self::Last7Days
    }

    /// Every mode in the order shown in the range selector.
    pub const ALL: [RangeMode; 3] = [Self::Last7Days, Self::Last30Days, Self::ThisMonth];

    /// Parse a range mode from a query value.
    ///
    /// Case and surrounding whitespace are ignored, and `-` or `_` may be used
    /// in place of spaces. Returns `None` for anything unrecognized.
    pub fn parse(text: &str) -> Option<Self> {
        let normalized = text
            .trim()
            .to_ascii_lowercase()
            .replace(['-', '_'], " ");

        match normalized.as_str() {
            "last 7 days" => Some(Self::Last7Days),
            "last 30 days" => Some(Self::Last30Days),
            "this month" => Some(Self::ThisMonth),
            _ => None,
        }
    }

    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::Last7Days => "last-7-days",
            Self::Last30Days => "last-30-days",
            Self::ThisMonth => "this-month",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Last7Days => "Last 7 Days",
            Self::Last30Days => "Last 30 Days",
            Self::ThisMonth => "This Month",
        }
    }

    /// Whether `date` falls inside this range when the current date is `today`.
    pub fn contains(self, date: Date, today: Date) -> bool {
        match self {
            Self::Last7Days => date >= today - Duration::days(6),
            Self::Last30Days => date >= today - Duration::days(29),
            Self::ThisMonth => date.month() == today.month() && date.year() == today.year(),
        }
    }
}

/// The range the user asked for, resolved from the `range` query parameter.
///
/// `None` means the value was not a known mode and nothing is filtered out.
pub fn resolve_range(query_value: Option<&str>) -> Option<RangeMode> {
    match query_value {
        None => Some(RangeMode::default_mode()),
        Some(text) => RangeMode::parse(text),
    }
}

/// Select the records that fall in `range` when the current date is `today`.
///
/// Records without a date are always kept, and a `range` of `None` keeps every
/// record. Record order is preserved.
pub fn filter_records(
    records: &[DailyRecord],
    range: Option<RangeMode>,
    today: Date,
) -> Vec<DailyRecord> {
    let Some(range) = range else {
        return records.to_vec();
    };

    records
        .iter()
        .filter(|record| match record.date {
            Some(date) => range.contains(date, today),
            None => true,
        })
        .cloned()
        .collect()
}
