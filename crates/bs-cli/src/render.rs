//! Human-readable rendering of statistics and raw rows.

use std::fmt::{Display, Write};

use bs_core::columns;
use bs_core::stats::{Availability, StatsReport};
use bs_core::vocab::weekday_name;
use bs_core::{EnrichedTrip, RecordSet, Selection};

const NO_DATA: &str = "no data";

/// Echo of the accepted filter selection.
pub fn format_filters(selection: &Selection) -> String {
    format!(
        "Your filters are city: {}, month: {}, day: {}",
        selection.city, selection.month, selection.day
    )
}

/// Formats minutes the way they are shown to users: `2.0`, `1.67`.
pub fn format_minutes(minutes: f64) -> String {
    if minutes.fract() == 0.0 {
        format!("{minutes:.1}")
    } else {
        minutes.to_string()
    }
}

fn field(output: &mut String, label: &str, value: impl Display) {
    writeln!(output, "  {label:<28}{value}").unwrap();
}

fn or_no_data<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| NO_DATA.to_string(), |v| v.to_string())
}

/// Formats all statistics sections.
pub fn format_report(report: &StatsReport) -> String {
    let mut output = String::new();

    writeln!(output, "Trips matching the filters: {}", report.trips).unwrap();

    // Temporal
    let temporal = &report.temporal;
    writeln!(output).unwrap();
    writeln!(output, "Information about most popular times of travel:").unwrap();
    field(&mut output, "Most common month:", or_no_data(temporal.most_common_month_name()));
    field(
        &mut output,
        "Most common day of week:",
        or_no_data(temporal.most_common_day.map(weekday_name)),
    );
    field(&mut output, "Most common start hour:", or_no_data(temporal.most_common_hour));
    field(&mut output, "Morning trips (5-12):", temporal.morning);
    field(&mut output, "Afternoon trips (13-20):", temporal.afternoon);
    field(&mut output, "Night trips (21-4):", temporal.night);

    // Stations
    let station = &report.station;
    writeln!(output).unwrap();
    writeln!(output, "Information about most popular stations:").unwrap();
    field(
        &mut output,
        "Most common start station:",
        or_no_data(station.most_common_start.as_deref()),
    );
    field(
        &mut output,
        "Most common end station:",
        or_no_data(station.most_common_end.as_deref()),
    );
    field(
        &mut output,
        "Most common trip:",
        or_no_data(station.most_common_trip.as_deref()),
    );

    // Duration
    writeln!(output).unwrap();
    writeln!(output, "Information about trip duration:").unwrap();
    if let Some(duration) = &report.duration {
        let minutes = |m: f64| format!("{} minutes", format_minutes(m));
        field(&mut output, "Total duration:", minutes(duration.total_minutes));
        field(&mut output, "Mean duration:", minutes(duration.mean_minutes));
        field(&mut output, "Median duration:", minutes(duration.median_minutes));
        field(&mut output, "Most common duration:", minutes(duration.mode_minutes));
        field(&mut output, "Longest duration:", minutes(duration.max_minutes));
    } else {
        writeln!(output, "  No trip durations to summarise.").unwrap();
    }

    // Users
    let user = &report.user;
    writeln!(output).unwrap();
    writeln!(output, "Information about users:").unwrap();
    field(&mut output, "Subscribers:", user.subscribers);
    field(&mut output, "Customers:", user.customers);
    field(&mut output, "Dependents:", user.dependents);

    match &user.gender {
        Availability::Available(gender) => {
            field(&mut output, "Male users:", gender.male);
            field(&mut output, "Female users:", gender.female);
            field(&mut output, "Users without gender:", gender.unspecified);
        }
        Availability::NotAvailable => {
            writeln!(output, "  Gender stats are not available for this dataset.").unwrap();
        }
    }

    match &user.birth_year {
        Availability::Available(birth) => {
            field(&mut output, "Most common birth year:", or_no_data(birth.most_common));
            field(&mut output, "Most recent birth year:", or_no_data(birth.most_recent));
            field(&mut output, "Earliest birth year:", or_no_data(birth.earliest));
            field(&mut output, "Users without birth year:", birth.unspecified);
        }
        Availability::NotAvailable => {
            writeln!(output, "  Birth year stats are not available for this dataset.").unwrap();
        }
    }

    output
}

fn cell<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Formats a window of raw rows, showing the columns present in `set`.
pub fn format_rows(set: &RecordSet<EnrichedTrip>, window: &[EnrichedTrip]) -> String {
    let mut output = String::new();

    for trip in window {
        let raw = &trip.trip;
        writeln!(output, "Row {}", raw.row).unwrap();

        for column in columns::KNOWN {
            if !set.has_column(column) {
                continue;
            }
            let value = match column {
                columns::START_TIME => cell(raw.start_time.as_deref()),
                columns::END_TIME => cell(raw.end_time.as_deref()),
                columns::TRIP_DURATION => cell(raw.trip_duration),
                columns::START_STATION => cell(raw.start_station.as_deref()),
                columns::END_STATION => cell(raw.end_station.as_deref()),
                columns::USER_TYPE => cell(raw.user_type.as_deref()),
                columns::GENDER => cell(raw.gender.as_deref()),
                columns::BIRTH_YEAR => cell(raw.birth_year),
                _ => continue,
            };
            writeln!(output, "  {:<16}{value}", format!("{column}:")).unwrap();
        }

        writeln!(output, "  {:<16}{}", "Start Hour:", trip.start_hour).unwrap();
        writeln!(output, "  {:<16}{}", "Day of Week:", weekday_name(trip.day_of_week)).unwrap();
        writeln!(output, "  {:<16}{}", "Month:", trip.month).unwrap();
    }

    output
}
