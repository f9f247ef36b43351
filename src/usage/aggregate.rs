//! Chart aggregation
//!
//! Groups usage by calendar date for the "Credits Used" bar chart.

use super::record::UsageRecord;
use chrono::{Local, NaiveDate, TimeZone};
use serde::Serialize;
use std::collections::HashMap;

/// Parallel label/value sequences handed to the bar chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Largest single bucket, 0 when empty.
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// Aggregate credits per local calendar date.
pub fn aggregate_by_date(records: &[UsageRecord]) -> ChartData {
    aggregate_by_date_in(records, &Local)
}

/// Aggregate credits per calendar date in `tz`.
///
/// Buckets keep the order in which each date first appears in `records`.
pub fn aggregate_by_date_in<Tz: TimeZone>(records: &[UsageRecord], tz: &Tz) -> ChartData {
    let mut buckets: Vec<(NaiveDate, f64)> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for record in records {
        let date = record.timestamp.with_timezone(tz).date_naive();
        match index.get(&date) {
            Some(&slot) => buckets[slot].1 += record.credits_used,
            None => {
                index.insert(date, buckets.len());
                buckets.push((date, record.credits_used));
            }
        }
    }

    let (labels, values) = buckets
        .into_iter()
        .map(|(date, total)| (date.format("%a %b %d %Y").to_string(), total))
        .unzip();
    ChartData { labels, values }
}
