//! Trip records and the in-memory record set.

use chrono::{NaiveDateTime, Weekday};

/// Column names as they appear in the dataset headers.
pub mod columns {
    pub const START_TIME: &str = "Start Time";
    pub const END_TIME: &str = "End Time";
    pub const TRIP_DURATION: &str = "Trip Duration";
    pub const START_STATION: &str = "Start Station";
    pub const END_STATION: &str = "End Station";
    pub const USER_TYPE: &str = "User Type";
    pub const GENDER: &str = "Gender";
    pub const BIRTH_YEAR: &str = "Birth Year";

    /// Columns every dataset must provide (Start Time is checked during enrichment).
    pub const REQUIRED: [&str; 4] = [TRIP_DURATION, START_STATION, END_STATION, USER_TYPE];

    /// Columns recognised by the loader, in display order.
    pub const KNOWN: [&str; 8] = [
        START_TIME,
        END_TIME,
        TRIP_DURATION,
        START_STATION,
        END_STATION,
        USER_TYPE,
        GENDER,
        BIRTH_YEAR,
    ];
}

/// One raw trip as read from a dataset. Empty cells are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripRecord {
    /// 0-based position of the row in the source file.
    pub row: usize,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// Trip length in seconds.
    pub trip_duration: Option<f64>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
}

/// A trip with the columns derived from its start timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedTrip {
    pub trip: TripRecord,
    pub start: NaiveDateTime,
    /// Hour of day, 0-23.
    pub start_hour: u32,
    pub day_of_week: Weekday,
    /// 1-based month number.
    pub month: u32,
}

/// Ordered collection of records sharing one set of columns.
///
/// The column list is the schema of the source dataset; a column listed here
/// is present for every record, although individual cells may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet<R = TripRecord> {
    columns: Vec<String>,
    records: Vec<R>,
}

impl<R> RecordSet<R> {
    pub fn new(columns: Vec<String>, records: Vec<R>) -> Self {
        Self { columns, records }
    }

    /// Whether the dataset this set came from has the named column.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keeps only the records matching `keep`, preserving order.
    pub fn retain(mut self, keep: impl FnMut(&R) -> bool) -> Self {
        self.records.retain(keep);
        self
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<R>) {
        (self.columns, self.records)
    }
}

impl<'a, R> IntoIterator for &'a RecordSet<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
