use super::{median, numeric_mode, round2};
use crate::record::{EnrichedTrip, RecordSet};

/// Trip duration summary, in minutes rounded to two decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total_minutes: f64,
    pub mean_minutes: f64,
    pub median_minutes: f64,
    pub mode_minutes: f64,
    pub max_minutes: f64,
}

/// Summarises Trip Duration; `None` when no trip has a duration.
#[allow(clippy::cast_precision_loss)]
pub fn duration_stats(set: &RecordSet<EnrichedTrip>) -> Option<DurationStats> {
    let seconds: Vec<f64> = set.iter().filter_map(|t| t.trip.trip_duration).collect();
    if seconds.is_empty() {
        return None;
    }

    let total: f64 = seconds.iter().sum();
    let mean = total / seconds.len() as f64;
    let max = seconds.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let minutes = |s: f64| round2(s / 60.0);

    Some(DurationStats {
        total_minutes: minutes(total),
        mean_minutes: minutes(mean),
        median_minutes: minutes(median(&seconds)?),
        mode_minutes: minutes(numeric_mode(&seconds)?),
        max_minutes: minutes(max),
    })
}
