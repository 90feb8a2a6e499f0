use chrono::Weekday;

use super::mode;
use crate::record::{EnrichedTrip, RecordSet};
use crate::vocab::month_name;

/// Most popular travel times.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemporalStats {
    /// 1-based month number.
    pub most_common_month: Option<u32>,
    pub most_common_day: Option<Weekday>,
    pub most_common_hour: Option<u32>,
    /// Trips starting between 05:00 and 12:59.
    pub morning: usize,
    /// Trips starting between 13:00 and 20:59.
    pub afternoon: usize,
    /// Trips starting between 21:00 and 04:59.
    pub night: usize,
}

impl TemporalStats {
    pub fn most_common_month_name(&self) -> Option<&'static str> {
        self.most_common_month.and_then(month_name)
    }
}

pub fn temporal_stats(set: &RecordSet<EnrichedTrip>) -> TemporalStats {
    let count_hours = |hours: std::ops::RangeInclusive<u32>| {
        set.iter().filter(|t| hours.contains(&t.start_hour)).count()
    };

    TemporalStats {
        most_common_month: mode(set.iter().map(|t| t.month)),
        most_common_day: mode(set.iter().map(|t| t.day_of_week)),
        most_common_hour: mode(set.iter().map(|t| t.start_hour)),
        morning: count_hours(5..=12),
        afternoon: count_hours(13..=20),
        night: count_hours(21..=23) + count_hours(0..=4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::enrich;
    use crate::record::{TripRecord, columns};

    fn trips(times: &[&str]) -> RecordSet<EnrichedTrip> {
        let records = times
            .iter()
            .enumerate()
            .map(|(row, time)| TripRecord {
                row,
                start_time: Some((*time).to_string()),
                ..TripRecord::default()
            })
            .collect();
        enrich(RecordSet::new(vec![columns::START_TIME.to_string()], records)).unwrap()
    }

    #[test]
    fn finds_most_common_month_day_and_hour() {
        let set = trips(&[
            "2017-03-06 08:00:00", // Monday
            "2017-05-02 17:30:00", // Tuesday
            "2017-05-09 17:45:00", // Tuesday
            "2017-03-13 09:10:00", // Monday
            "2017-05-16 08:05:00", // Tuesday
        ]);
        let stats = temporal_stats(&set);

        assert_eq!(stats.most_common_month, Some(5));
        assert_eq!(stats.most_common_month_name(), Some("May"));
        assert_eq!(stats.most_common_day, Some(Weekday::Tue));
        assert_eq!(stats.most_common_hour, Some(8));
    }

    #[test]
    fn ties_go_to_first_seen() {
        let set = trips(&["2017-02-01 10:00:00", "2017-01-02 11:00:00"]);
        let stats = temporal_stats(&set);

        assert_eq!(stats.most_common_month_name(), Some("February"));
        assert_eq!(stats.most_common_hour, Some(10));
    }

    #[test]
    fn buckets_hours_into_periods() {
        let set = trips(&[
            "2017-01-02 04:59:00",
            "2017-01-02 05:00:00",
            "2017-01-02 12:59:00",
            "2017-01-02 13:00:00",
            "2017-01-02 20:59:00",
            "2017-01-02 21:00:00",
            "2017-01-02 23:59:00",
            "2017-01-02 00:00:00",
        ]);
        let stats = temporal_stats(&set);

        assert_eq!(stats.morning, 2);
        assert_eq!(stats.afternoon, 2);
        assert_eq!(stats.night, 4);
        assert_eq!(stats.morning + stats.afternoon + stats.night, set.len());
    }

    #[test]
    fn empty_set_has_no_data() {
        let stats = temporal_stats(&trips(&[]));
        assert_eq!(stats, TemporalStats::default());
        assert_eq!(stats.most_common_month_name(), None);
    }
}
