use super::mode;
use crate::record::{EnrichedTrip, RecordSet, TripRecord};

/// Most popular stations and station pairing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StationStats {
    pub most_common_start: Option<String>,
    pub most_common_end: Option<String>,
    /// Most frequent `"{start} -> {end}"` key.
    pub most_common_trip: Option<String>,
}

/// Pairing key for a trip; `None` when either station is empty.
pub fn trip_key(trip: &TripRecord) -> Option<String> {
    match (&trip.start_station, &trip.end_station) {
        (Some(start), Some(end)) => Some(format!("{start} -> {end}")),
        _ => None,
    }
}

pub fn station_stats(set: &RecordSet<EnrichedTrip>) -> StationStats {
    let starts = set.iter().filter_map(|t| t.trip.start_station.as_deref());
    let ends = set.iter().filter_map(|t| t.trip.end_station.as_deref());

    StationStats {
        most_common_start: mode(starts).map(String::from),
        most_common_end: mode(ends).map(String::from),
        most_common_trip: mode(set.iter().filter_map(|t| trip_key(&t.trip))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::enrich;
    use crate::record::columns;

    fn trips(pairs: &[(Option<&str>, Option<&str>)]) -> RecordSet<EnrichedTrip> {
        let records = pairs
            .iter()
            .enumerate()
            .map(|(row, (start, end))| TripRecord {
                row,
                start_time: Some("2017-01-02 10:00:00".to_string()),
                start_station: start.map(String::from),
                end_station: end.map(String::from),
                ..TripRecord::default()
            })
            .collect();
        enrich(RecordSet::new(vec![columns::START_TIME.to_string()], records)).unwrap()
    }

    #[test]
    fn key_is_literal_concatenation() {
        let trip = TripRecord {
            start_station: Some("A".to_string()),
            end_station: Some("B".to_string()),
            ..TripRecord::default()
        };
        assert_eq!(trip_key(&trip).as_deref(), Some("A -> B"));
    }

    #[test]
    fn finds_most_common_stations() {
        let set = trips(&[
            (Some("Canal St"), Some("Lake Shore Dr")),
            (Some("Clark St"), Some("Lake Shore Dr")),
            (Some("Canal St"), Some("State St")),
            (Some("Canal St"), Some("Lake Shore Dr")),
        ]);
        let stats = station_stats(&set);

        assert_eq!(stats.most_common_start.as_deref(), Some("Canal St"));
        assert_eq!(stats.most_common_end.as_deref(), Some("Lake Shore Dr"));
        assert_eq!(stats.most_common_trip.as_deref(), Some("Canal St -> Lake Shore Dr"));
    }

    #[test]
    fn ties_go_to_first_seen() {
        let set = trips(&[
            (Some("State St"), Some("Lake Shore Dr")),
            (Some("Canal St"), Some("Clark St")),
            (Some("Canal St"), Some("Lake Shore Dr")),
            (Some("State St"), Some("Clark St")),
        ]);
        let stats = station_stats(&set);

        assert_eq!(stats.most_common_start.as_deref(), Some("State St"));
        assert_eq!(stats.most_common_end.as_deref(), Some("Lake Shore Dr"));
        assert_eq!(stats.most_common_trip.as_deref(), Some("State St -> Lake Shore Dr"));
    }

    #[test]
    fn pairing_counts_the_concatenated_string() {
        // ("A -> B", "C") and ("A", "B -> C") collapse to the same key.
        let set = trips(&[
            (Some("X"), Some("Y")),
            (Some("A -> B"), Some("C")),
            (Some("A"), Some("B -> C")),
        ]);
        let stats = station_stats(&set);

        assert_eq!(stats.most_common_trip.as_deref(), Some("A -> B -> C"));
    }

    #[test]
    fn empty_stations_are_skipped() {
        let set = trips(&[(None, Some("End")), (Some("Start"), None), (Some("Start"), None)]);
        let stats = station_stats(&set);

        assert_eq!(stats.most_common_start.as_deref(), Some("Start"));
        assert_eq!(stats.most_common_end.as_deref(), Some("End"));
        assert_eq!(stats.most_common_trip, None);
    }

    #[test]
    fn empty_set_has_no_data() {
        assert_eq!(station_stats(&trips(&[])), StationStats::default());
    }
}
