//! Month and day-of-week filtering of enriched trips.

use crate::record::{EnrichedTrip, RecordSet};
use crate::vocab::{DaySelector, MonthSelector};

/// Whether a trip passes both selectors.
fn matches(trip: &EnrichedTrip, month: MonthSelector, day: DaySelector) -> bool {
    let month_ok = match month {
        MonthSelector::All => true,
        MonthSelector::Only(m) => trip.month == m.number(),
    };
    let day_ok = match day {
        DaySelector::All => true,
        DaySelector::Only(d) => trip.day_of_week == d,
    };
    month_ok && day_ok
}

/// Keeps the trips matching both selectors, in their original order.
///
/// An empty result is a valid outcome.
pub fn filter_trips(
    set: RecordSet<EnrichedTrip>,
    month: MonthSelector,
    day: DaySelector,
) -> RecordSet<EnrichedTrip> {
    let before = set.len();
    let filtered = set.retain(|trip| matches(trip, month, day));
    tracing::debug!(before, after = filtered.len(), %month, %day, "filtered trips");
    filtered
}
