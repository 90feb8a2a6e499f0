//! Reading city datasets from CSV.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

use crate::record::{RecordSet, TripRecord, columns};
use crate::vocab::City;

/// Dataset loading errors.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dataset file for the selected city does not exist.
    #[error("We can't find {file_name}. Please put the file {file_name} in {}", .dir.display())]
    MissingDataset {
        file_name: &'static str,
        dir: PathBuf,
    },
    /// The dataset exists but could not be opened.
    #[error("failed to open {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Malformed CSV.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// A required column is absent from the header.
    #[error("missing csv column: {0}")]
    MissingColumn(&'static str),
    /// A numeric cell could not be parsed.
    #[error("invalid number in row {row}, column {column}: {value:?}")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Header positions of the recognised columns.
#[derive(Debug, Clone, Default)]
struct ColumnIndices {
    start_time: Option<usize>,
    end_time: Option<usize>,
    trip_duration: Option<usize>,
    start_station: Option<usize>,
    end_station: Option<usize>,
    user_type: Option<usize>,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl ColumnIndices {
    fn from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        let lookup = |name: &str| headers.iter().position(|h| h == name);

        for name in columns::REQUIRED {
            if lookup(name).is_none() {
                return Err(LoadError::MissingColumn(name));
            }
        }

        Ok(Self {
            start_time: lookup(columns::START_TIME),
            end_time: lookup(columns::END_TIME),
            trip_duration: lookup(columns::TRIP_DURATION),
            start_station: lookup(columns::START_STATION),
            end_station: lookup(columns::END_STATION),
            user_type: lookup(columns::USER_TYPE),
            gender: lookup(columns::GENDER),
            birth_year: lookup(columns::BIRTH_YEAR),
        })
    }
}

/// Loads the dataset for `city` from `data_dir`.
pub fn load_city(data_dir: &Path, city: City) -> Result<RecordSet, LoadError> {
    let path = data_dir.join(city.file_name());
    let file = File::open(&path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::MissingDataset {
                file_name: city.file_name(),
                dir: data_dir.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.clone(),
                source,
            }
        }
    })?;

    let set = read_records(file)?;
    tracing::info!(city = %city, rows = set.len(), path = %path.display(), "loaded dataset");
    Ok(set)
}

/// Parses trip records from CSV text with a header row.
///
/// Unrecognised columns (such as an unnamed index column) are ignored.
pub fn read_records<R: Read>(reader: R) -> Result<RecordSet, LoadError> {
    let mut csv = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = csv.headers()?.clone();
    let indices = ColumnIndices::from_headers(&headers)?;

    let present: Vec<String> = headers
        .iter()
        .filter(|h| columns::KNOWN.contains(h))
        .map(String::from)
        .collect();
    tracing::debug!(columns = ?present, "dataset schema");

    let mut records = Vec::new();
    for (row, result) in csv.records().enumerate() {
        let record = result?;
        records.push(parse_row(&record, row, &indices)?);
    }

    Ok(RecordSet::new(present, records))
}

/// Cell values read as missing, in addition to the empty cell.
const NULL_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_null(value: &str) -> bool {
    value.is_empty() || NULL_TOKENS.contains(&value)
}

fn parse_row(
    record: &StringRecord,
    row: usize,
    indices: &ColumnIndices,
) -> Result<TripRecord, LoadError> {
    let text = |idx: Option<usize>| {
        idx.and_then(|i| record.get(i))
            .filter(|value| !is_null(value))
            .map(String::from)
    };
    let number = |idx: Option<usize>, column: &'static str| -> Result<Option<f64>, LoadError> {
        text(idx)
            .map(|value| match value.parse::<f64>() {
                Ok(number) if number.is_finite() => Ok(number),
                _ => Err(LoadError::InvalidNumber { row, column, value }),
            })
            .transpose()
    };

    Ok(TripRecord {
        row,
        start_time: text(indices.start_time),
        end_time: text(indices.end_time),
        trip_duration: number(indices.trip_duration, columns::TRIP_DURATION)?,
        start_station: text(indices.start_station),
        end_station: text(indices.end_station),
        user_type: text(indices.user_type),
        gender: text(indices.gender),
        birth_year: number(indices.birth_year, columns::BIRTH_YEAR)?,
    })
}
