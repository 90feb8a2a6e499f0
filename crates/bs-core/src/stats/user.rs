use super::numeric_mode;
use crate::record::{EnrichedTrip, RecordSet, columns};

/// A statistic that depends on an optional dataset column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability<T> {
    Available(T),
    /// The dataset has no such column.
    NotAvailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenderStats {
    pub male: usize,
    pub female: usize,
    /// Records with an empty Gender cell.
    pub unspecified: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BirthYearStats {
    pub most_common: Option<i64>,
    pub most_recent: Option<i64>,
    pub earliest: Option<i64>,
    /// Records with an empty Birth Year cell.
    pub unspecified: usize,
}

/// User demographics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub subscribers: usize,
    pub customers: usize,
    pub dependents: usize,
    pub gender: Availability<GenderStats>,
    pub birth_year: Availability<BirthYearStats>,
}

pub fn user_stats(set: &RecordSet<EnrichedTrip>) -> UserStats {
    let count_user_type = |name: &str| {
        set.iter()
            .filter(|t| t.trip.user_type.as_deref() == Some(name))
            .count()
    };

    UserStats {
        subscribers: count_user_type("Subscriber"),
        customers: count_user_type("Customer"),
        dependents: count_user_type("Dependent"),
        gender: gender_stats(set),
        birth_year: birth_year_stats(set),
    }
}

fn gender_stats(set: &RecordSet<EnrichedTrip>) -> Availability<GenderStats> {
    if !set.has_column(columns::GENDER) {
        tracing::debug!("no Gender column");
        return Availability::NotAvailable;
    }

    let count = |name: &str| {
        set.iter()
            .filter(|t| t.trip.gender.as_deref() == Some(name))
            .count()
    };
    Availability::Available(GenderStats {
        male: count("Male"),
        female: count("Female"),
        unspecified: set.iter().filter(|t| t.trip.gender.is_none()).count(),
    })
}

fn birth_year_stats(set: &RecordSet<EnrichedTrip>) -> Availability<BirthYearStats> {
    if !set.has_column(columns::BIRTH_YEAR) {
        tracing::debug!("no Birth Year column");
        return Availability::NotAvailable;
    }

    let years: Vec<f64> = set.iter().filter_map(|t| t.trip.birth_year).collect();
    let earliest = years.iter().copied().reduce(f64::min);
    let most_recent = years.iter().copied().reduce(f64::max);

    Availability::Available(BirthYearStats {
        most_common: numeric_mode(&years).map(round_year),
        most_recent: most_recent.map(round_year),
        earliest: earliest.map(round_year),
        unspecified: set.len() - years.len(),
    })
}

/// Nearest whole year, halves to even.
#[allow(clippy::cast_possible_truncation)]
fn round_year(year: f64) -> i64 {
    year.round_ties_even() as i64
}
