//! Builds the dataset the dashboard is rendered from.

use std::sync::{Arc, PoisonError, RwLock};

use clap::ValueEnum;
use rand::Rng;
use time::{Date, Duration};

use crate::metrics::record::{DailyRecord, MetricValues};

/// The number of days in a generated dataset.
pub const GENERATED_DAYS: i64 = 30;

/// Which dataset to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DatasetKind {
    /// The fixed Mon..Sun sample week, without dates.
    Sample,
    /// Thirty days of random values ending today.
    Generated,
}

/// An ordered, immutable sequence of daily records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    kind: DatasetKind,
    records: Vec<DailyRecord>,
}

impl Dataset {
    /// Build a dataset of `kind`.
    ///
    /// Generated datasets end on `today` and use the thread-local RNG, so
    /// their values differ on every start.
    pub fn load(kind: DatasetKind, today: Date) -> Self {
        match kind {
            DatasetKind::Sample => Self::sample(),
            DatasetKind::Generated => Self::generate(today, &mut rand::rng()),
        }
    }

    /// The fixed sample week.
    pub fn sample() -> Self {
        let records = SAMPLE_WEEK
            .iter()
            .map(|&(day, values)| DailyRecord::undated(day, values))
            .collect();

        Self {
            kind: DatasetKind::Sample,
            records,
        }
    }

    /// Generate [GENERATED_DAYS] consecutive records ending on `today`.
    pub fn generate<R: Rng + ?Sized>(today: Date, rng: &mut R) -> Self {
        let records = (0..GENERATED_DAYS)
            .map(|i| {
                let date = today - Duration::days(GENERATED_DAYS - 1 - i);
                DailyRecord::dated(date, random_values(rng))
            })
            .collect();

        Self {
            kind: DatasetKind::Generated,
            records,
        }
    }

    /// Which kind of dataset this is.
    pub fn kind(&self) -> DatasetKind {
        self.kind
    }

    /// The records in chronological order.
    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    /// Whether a generated dataset no longer ends on `today`.
    ///
    /// The sample week has no dates and is never stale.
    pub fn is_stale(&self, today: Date) -> bool {
        self.kind == DatasetKind::Generated
            && self
                .records
                .last()
                .and_then(|record| record.date)
                .is_none_or(|last| last < today)
    }
}

/// Holds the served dataset and regenerates generated data when the day changes.
///
/// Datasets handed out are never mutated. A new day swaps in a freshly
/// generated dataset so the generated window ends on today.
#[derive(Debug)]
pub struct DatasetStore {
    current: RwLock<Arc<Dataset>>,
}

impl DatasetStore {
    /// Create a store serving `dataset`.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            current: RwLock::new(Arc::new(dataset)),
        }
    }

    /// The dataset to render for `today`, regenerated with the thread-local RNG if stale.
    pub fn current(&self, today: Date) -> Arc<Dataset> {
        self.current_with(today, &mut rand::rng())
    }

    /// The dataset to render for `today`, regenerated with `rng` if stale.
    pub fn current_with<R: Rng + ?Sized>(&self, today: Date, rng: &mut R) -> Arc<Dataset> {
        let dataset = self
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        if !dataset.is_stale(today) {
            return dataset;
        }

        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        // Another request may have regenerated it while we waited for the lock.
        if current.is_stale(today) {
            tracing::info!("Regenerating dataset to end on {today}");
            *current = Arc::new(Dataset::generate(today, rng));
        }

        current.clone()
    }
}

fn random_values<R: Rng + ?Sized>(rng: &mut R) -> MetricValues {
    MetricValues {
        email: rng.random_range(30..80),
        social: rng.random_range(20..70),
        ads: rng.random_range(30..130),
        leads: rng.random_range(20..80),
        conversion: rng.random_range(10..30),
        spend: rng.random_range(50..250),
    }
}

const SAMPLE_WEEK: [(&str, MetricValues); 7] = [
    (
        "Mon",
        MetricValues {
            email: 40,
            social: 30,
            ads: 50,
            leads: 30,
            conversion: 20,
            spend: 100,
        },
    ),
    (
        "Tue",
        MetricValues {
            email: 50,
            social: 40,
            ads: 70,
            leads: 45,
            conversion: 25,
            spend: 150,
        },
    ),
    (
        "Wed",
        MetricValues {
            email: 60,
            social: 45,
            ads: 90,
            leads: 60,
            conversion: 30,
            spend: 200,
        },
    ),
    (
        "Thu",
        MetricValues {
            email: 55,
            social: 35,
            ads: 80,
            leads: 50,
            conversion: 28,
            spend: 180,
        },
    ),
    (
        "Fri",
        MetricValues {
            email: 70,
            social: 50,
            ads: 100,
            leads: 70,
            conversion: 35,
            spend: 250,
        },
    ),
    (
        "Sat",
        MetricValues {
            email: 45,
            social: 30,
            ads: 60,
            leads: 55,
            conversion: 26,
            spend: 160,
        },
    ),
    (
        "Sun",
        MetricValues {
            email: 30,
            social: 20,
            ads: 40,
            leads: 40,
            conversion: 22,
            spend: 120,
        },
    ),
];
