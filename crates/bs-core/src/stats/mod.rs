//! Descriptive statistics over a filtered set of trips.
//!
//! Every routine is read-only and independent of the others. An empty set
//! never fails: missing values come back as `None` and counts as zero.

mod duration;
mod station;
mod temporal;
mod user;

use std::collections::HashMap;
use std::hash::Hash;

pub use duration::{DurationStats, duration_stats};
pub use station::{StationStats, station_stats, trip_key};
pub use temporal::{TemporalStats, temporal_stats};
pub use user::{Availability, BirthYearStats, GenderStats, UserStats, user_stats};

use crate::record::{EnrichedTrip, RecordSet};

/// All four statistics families for one round.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    pub trips: usize,
    pub temporal: TemporalStats,
    pub station: StationStats,
    pub duration: Option<DurationStats>,
    pub user: UserStats,
}

impl StatsReport {
    pub fn compute(set: &RecordSet<EnrichedTrip>) -> Self {
        Self {
            trips: set.len(),
            temporal: temporal_stats(set),
            station: station_stats(set),
            duration: duration_stats(set),
            user: user_stats(set),
        }
    }
}

/// Most frequent value; ties go to the value seen first.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    // value -> (count, first position)
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (position, value) in values.into_iter().enumerate() {
        counts.entry(value).or_insert((0, position)).0 += 1;
    }

    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(value, _)| value)
}

/// Most frequent number; ties go to the smallest value.
pub fn numeric_mode(values: &[f64]) -> Option<f64> {
    let sorted = sorted(values);
    let mut best: Option<(f64, usize)> = None;

    let mut i = 0;
    while i < sorted.len() {
        let value = sorted[i];
        let run = sorted[i..].iter().take_while(|v| v.total_cmp(&value).is_eq()).count();
        if best.is_none_or(|(_, count)| run > count) {
            best = Some((value, run));
        }
        i += run;
    }

    best.map(|(value, _)| value)
}

/// Middle value, or the mean of the two middle values.
pub fn median(values: &[f64]) -> Option<f64> {
    let sorted = sorted(values);
    let mid = sorted.len() / 2;
    match sorted.len() {
        0 => None,
        n if n % 2 == 1 => Some(sorted[mid]),
        _ => Some((sorted[mid - 1] + sorted[mid]) / 2.0),
    }
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}
