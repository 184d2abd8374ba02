//! The daily record type and the metrics it carries.

use serde::Serialize;
use time::{Date, Weekday};

/// One day's observation of the six marketing metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyRecord {
    /// The weekday abbreviation shown on chart axes, e.g. "Mon".
    pub day: &'static str,
    /// The calendar date of the observation.
    ///
    /// Only generated datasets carry dates, the fixed sample does not.
    pub date: Option<Date>,
    pub email: u32,
    pub social: u32,
    pub ads: u32,
    pub leads: u32,
    /// The conversion rate as a whole percentage.
    pub conversion: u32,
    /// The ad spend in whole dollars.
    pub spend: u32,
}

impl DailyRecord {
    /// Create a dated record whose day label is derived from `date`.
    pub fn dated(date: Date, values: MetricValues) -> Self {
        Self::from_values(weekday_label(date.weekday()), Some(date), values)
    }

    /// Create a record with a fixed day label and no date.
    pub fn undated(day: &'static str, values: MetricValues) -> Self {
        Self::from_values(day, None, values)
    }

    fn from_values(day: &'static str, date: Option<Date>, values: MetricValues) -> Self {
        let MetricValues {
            email,
            social,
            ads,
            leads,
            conversion,
            spend,
        } = values;

        Self {
            day,
            date,
            email,
            social,
            ads,
            leads,
            conversion,
            spend,
        }
    }

    /// The value of `metric` for this day.
    pub fn value(&self, metric: Metric) -> u32 {
        match metric {
            Metric::Leads => self.leads,
            Metric::Conversion => self.conversion,
            Metric::Spend => self.spend,
            Metric::Email => self.email,
            Metric::Social => self.social,
            Metric::Ads => self.ads,
        }
    }
}

/// The raw metric values for a single day, used to build a [DailyRecord].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricValues {
    pub email: u32,
    pub social: u32,
    pub ads: u32,
    pub leads: u32,
    pub conversion: u32,
    pub spend: u32,
}

/// The metrics tracked for each day, in the order they are charted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Leads,
    Conversion,
    Spend,
    Email,
    Social,
    Ads,
}

impl Metric {
    /// Every metric in chart order.
    pub const ALL: [Metric; 6] = [
        Metric::Leads,
        Metric::Conversion,
        Metric::Spend,
        Metric::Email,
        Metric::Social,
        Metric::Ads,
    ];

    /// The heading shown above the metric's chart.
    pub fn title(self) -> &'static str {
        match self {
            Metric::Leads => "Leads",
            Metric::Conversion => "Conversion Rate",
            Metric::Spend => "Total Spend",
            Metric::Email => "Email Performance",
            Metric::Social => "Social Media Performance",
            Metric::Ads => "Ads Performance",
        }
    }

    /// The HTML element ID for the metric's chart container (kebab-case).
    pub fn chart_id(self) -> &'static str {
        match self {
            Metric::Leads => "leads-chart",
            Metric::Conversion => "conversion-chart",
            Metric::Spend => "spend-chart",
            Metric::Email => "email-chart",
            Metric::Social => "social-chart",
            Metric::Ads => "ads-chart",
        }
    }

    /// The line colour as a hex string.
    pub fn color(self) -> &'static str {
        match self {
            Metric::Leads => "#3b82f6",
            Metric::Conversion => "#10b981",
            Metric::Spend => "#f59e0b",
            Metric::Email => "#ec4899",
            Metric::Social => "#8b5cf6",
            Metric::Ads => "#ef4444",
        }
    }
}

/// Get the three-letter abbreviation for `weekday`, e.g. "Mon".
pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}
