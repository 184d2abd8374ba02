//! Aggregate statistics over the visible records.

use serde::Serialize;

use crate::metrics::record::DailyRecord;

/// The scalar summaries shown on the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Sum of leads.
    pub total_leads: u64,
    /// Mean conversion rate rounded to one decimal place.
    ///
    /// `None` when there are no records to average.
    pub avg_conversion: Option<f64>,
    /// Sum of spend in whole dollars.
    pub total_spend: u64,
}

impl Summary {
    /// Summarise `records`.
    pub fn from_records(records: &[DailyRecord]) -> Self {
        Self {
            total_leads: total_leads(records),
            avg_conversion: average_conversion(records),
            total_spend: total_spend(records),
        }
    }
}

pub fn total_leads(records: &[DailyRecord]) -> u64 {
    records.iter().map(|record| u64::from(record.leads)).sum()
}

pub fn total_spend(records: &[DailyRecord]) -> u64 {
    records.iter().map(|record| u64::from(record.spend)).sum()
}

/// The mean conversion rate rounded to one decimal place, or `None` for an
/// empty slice.
pub fn average_conversion(records: &[DailyRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }

    let sum: u64 = records
        .iter()
        .map(|record| u64::from(record.conversion))
        .sum();
    let mean = sum as f64 / records.len() as f64;

    Some(round_to_tenth(mean))
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use crate::metrics::{
        dataset::Dataset,
        record::{DailyRecord, MetricValues},
    };

    use super::{Summary, average_conversion, total_leads};

    fn record(leads: u32, conversion: u32) -> DailyRecord {
        DailyRecord::undated(
            "Mon",
            MetricValues {
                email: 0,
                social: 0,
                ads: 0,
                leads,
                conversion,
                spend: 0,
            },
        )
    }

    #[test]
    fn sample_week_summary() {
        let summary = Summary::from_records(Dataset::sample().records());

        assert_eq!(
            summary,
            Summary {
                total_leads: 350,
                avg_conversion: Some(26.6),
                total_spend: 1160,
            }
        );
    }

    #[test]
    fn empty_records_have_no_average() {
        let summary = Summary::from_records(&[]);

        assert_eq!(summary.total_leads, 0);
        assert_eq!(summary.total_spend, 0);
        assert_eq!(summary.avg_conversion, None);
    }

    #[test]
    fn total_leads_never_decreases_as_records_are_appended() {
        let mut records = Vec::new();
        let mut previous = total_leads(&records);

        for leads in [5, 0, 12, 7, 0, 3] {
            records.push(record(leads, 10));
            let current = total_leads(&records);

            assert!(current >= previous);
            assert_eq!(current, records.iter().map(|r| u64::from(r.leads)).sum::<u64>());
            previous = current;
        }
    }

    #[test]
    fn average_is_unchanged_by_duplicating_every_record() {
        let records = Dataset::sample().records().to_vec();
        let doubled: Vec<_> = records
            .iter()
            .flat_map(|record| [record.clone(), record.clone()])
            .collect();

        assert_eq!(average_conversion(&records), average_conversion(&doubled));
    }

    #[test]
    fn average_rounds_to_one_decimal_place() {
        let records = [record(0, 10), record(0, 11), record(0, 11)];

        // 32 / 3 = 10.666...
        assert_eq!(average_conversion(&records), Some(10.7));
    }
}
