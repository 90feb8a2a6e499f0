//! Derived columns computed from a trip's start timestamp.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use thiserror::Error;

use crate::record::{EnrichedTrip, RecordSet, TripRecord, columns};

/// Start Time problems that make a dataset unusable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataFormatError {
    /// The dataset has no Start Time column.
    #[error("dataset has no Start Time column")]
    MissingStartTimeColumn,
    /// A record has an empty Start Time cell.
    #[error("row {row} has no start time")]
    MissingStartTime { row: usize },
    /// A Start Time cell is not a recognised timestamp.
    #[error("row {row} has an invalid start time: {value:?}")]
    InvalidStartTime { row: usize, value: String },
}

/// Timestamp layouts accepted for Start Time.
const TIMESTAMP_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Date-only layouts, read as midnight.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Parses a Start Time cell.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// Adds Start Hour, Day of Week and Month to every record.
///
/// Fails on the first record whose start time is missing or unparseable;
/// no partially enriched set is ever returned.
pub fn enrich(set: RecordSet) -> Result<RecordSet<EnrichedTrip>, DataFormatError> {
    if !set.has_column(columns::START_TIME) {
        return Err(DataFormatError::MissingStartTimeColumn);
    }

    let (schema, records) = set.into_parts();
    let enriched = records
        .into_iter()
        .map(enrich_trip)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(rows = enriched.len(), "enriched trips");
    Ok(RecordSet::new(schema, enriched))
}

fn enrich_trip(trip: TripRecord) -> Result<EnrichedTrip, DataFormatError> {
    let Some(raw) = trip.start_time.as_deref() else {
        return Err(DataFormatError::MissingStartTime { row: trip.row });
    };
    let start = parse_timestamp(raw).ok_or_else(|| DataFormatError::InvalidStartTime {
        row: trip.row,
        value: raw.to_string(),
    })?;

    Ok(EnrichedTrip {
        start_hour: start.hour(),
        day_of_week: start.weekday(),
        month: start.month(),
        start,
        trip,
    })
}
