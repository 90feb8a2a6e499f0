//! Core domain logic for the bikeshare explorer.
//!
//! This crate contains the filter-and-aggregate pipeline:
//! - Loading: reading a city's trip records from CSV
//! - Enrichment: deriving Start Hour, Day of Week and Month from Start Time
//! - Filtering: narrowing trips by month and day of week
//! - Statistics: temporal, station, duration and user summaries

pub mod enrich;
pub mod filter;
pub mod load;
mod pager;
pub mod record;
pub mod stats;
pub mod vocab;

pub use enrich::{DataFormatError, enrich};
pub use filter::filter_trips;
pub use load::{LoadError, load_city, read_records};
pub use pager::{DEFAULT_PAGE_SIZE, Pager};
pub use record::{EnrichedTrip, RecordSet, TripRecord, columns};
pub use stats::StatsReport;
pub use vocab::{City, DaySelector, Month, MonthSelector, Selection, ValidationError, Vocabulary};
