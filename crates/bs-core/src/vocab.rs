//! Closed vocabularies for the filter selection: cities, months and days.
//!
//! Each vocabulary is an enum with an explicit list of accepted options.
//! Validation never consults a global table; callers pass the options they
//! are willing to accept to [`choose`].

use std::fmt;

use chrono::Weekday;
use thiserror::Error;

/// Validation errors for user-supplied selectors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input did not match any accepted option.
    #[error("{input:?} is not one of: {accepted}")]
    UnknownOption { input: String, accepted: String },
}

/// A member of a closed vocabulary that can be typed by the user.
pub trait Choice: Copy {
    /// Canonical lowercase spelling accepted at the prompt.
    fn key(&self) -> &'static str;
}

/// Resolves `input` against `options`, ignoring case and surrounding whitespace.
pub fn choose<T: Choice>(input: &str, options: &[T]) -> Result<T, ValidationError> {
    let wanted = input.trim().to_lowercase();
    options
        .iter()
        .copied()
        .find(|option| option.key() == wanted)
        .ok_or_else(|| ValidationError::UnknownOption {
            input: input.trim().to_string(),
            accepted: options
                .iter()
                .map(Choice::key)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Cities with a bikeshare dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [Self; 3] = [Self::Chicago, Self::NewYorkCity, Self::Washington];

    /// File name of the city's dataset inside the data directory.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Chicago => "chicago.csv",
            Self::NewYorkCity => "new_york_city.csv",
            Self::Washington => "washington.csv",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Chicago => "Chicago",
            Self::NewYorkCity => "New York City",
            Self::Washington => "Washington",
        }
    }
}

impl Choice for City {
    fn key(&self) -> &'static str {
        match self {
            Self::Chicago => "chicago",
            Self::NewYorkCity => "new york city",
            Self::Washington => "washington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Months covered by the datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Self; 6] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
    ];

    /// 1-based month number, matching the derived Month column.
    pub const fn number(self) -> u32 {
        match self {
            Self::January => 1,
            Self::February => 2,
            Self::March => 3,
            Self::April => 4,
            Self::May => 5,
            Self::June => 6,
        }
    }
}

/// Month filter: a specific month or every month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthSelector {
    All,
    Only(Month),
}

impl MonthSelector {
    pub const ALL: [Self; 7] = [
        Self::Only(Month::January),
        Self::Only(Month::February),
        Self::Only(Month::March),
        Self::Only(Month::April),
        Self::Only(Month::May),
        Self::Only(Month::June),
        Self::All,
    ];
}

impl Choice for MonthSelector {
    fn key(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(Month::January) => "january",
            Self::Only(Month::February) => "february",
            Self::Only(Month::March) => "march",
            Self::Only(Month::April) => "april",
            Self::Only(Month::May) => "may",
            Self::Only(Month::June) => "june",
        }
    }
}

impl fmt::Display for MonthSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&title_case(self.key()))
    }
}

/// Day-of-week filter: a specific weekday or every day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DaySelector {
    All,
    Only(Weekday),
}

impl DaySelector {
    pub const ALL: [Self; 8] = [
        Self::Only(Weekday::Mon),
        Self::Only(Weekday::Tue),
        Self::Only(Weekday::Wed),
        Self::Only(Weekday::Thu),
        Self::Only(Weekday::Fri),
        Self::Only(Weekday::Sat),
        Self::Only(Weekday::Sun),
        Self::All,
    ];
}

impl Choice for DaySelector {
    fn key(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(Weekday::Mon) => "monday",
            Self::Only(Weekday::Tue) => "tuesday",
            Self::Only(Weekday::Wed) => "wednesday",
            Self::Only(Weekday::Thu) => "thursday",
            Self::Only(Weekday::Fri) => "friday",
            Self::Only(Weekday::Sat) => "saturday",
            Self::Only(Weekday::Sun) => "sunday",
        }
    }
}

impl fmt::Display for DaySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&title_case(self.key()))
    }
}

/// One exploration round's (city, month, day) choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub city: City,
    pub month: MonthSelector,
    pub day: DaySelector,
}

/// The option lists offered at each prompt.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    pub cities: &'static [City],
    pub months: &'static [MonthSelector],
    pub days: &'static [DaySelector],
}

impl Vocabulary {
    pub const fn standard() -> Self {
        Self {
            cities: &City::ALL,
            months: &MonthSelector::ALL,
            days: &DaySelector::ALL,
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard()
    }
}

/// Full English weekday name, as stored in the Day of Week column.
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Full English month name for a 1-based month number.
pub fn month_name(number: u32) -> Option<&'static str> {
    u8::try_from(number)
        .ok()
        .and_then(|n| chrono::Month::try_from(n).ok())
        .map(|month| month.name())
}

/// Uppercases the first letter of every whitespace-separated word.
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
