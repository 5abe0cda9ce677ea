//! Most frequent times of travel.

use serde::Serialize;

use crate::errors::AnalysisError;
use crate::filters::{day_name, month_name};
use crate::reports::frequency::most_frequent;
use crate::trips::TripTable;

/// Most common month, weekday, and start hour of a table, each with its
/// occurrence count. Names are reported in full English form.
#[derive(Debug, Clone, Serialize)]
pub struct TravelTimeStats {
    pub most_common_month: String,
    pub month_count: usize,
    pub most_common_day: String,
    pub day_count: usize,
    pub most_common_hour: u32,
    pub hour_count: usize,
}

impl TravelTimeStats {
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyTable`] when the table has no rows.
    pub fn from_table(table: &TripTable) -> Result<Self, AnalysisError> {
        let trips = table.trips();
        let (month, month_count) =
            most_frequent(trips.iter().map(|t| t.month)).ok_or(AnalysisError::EmptyTable)?;
        let (day, day_count) =
            most_frequent(trips.iter().map(|t| t.weekday)).ok_or(AnalysisError::EmptyTable)?;
        let (hour, hour_count) =
            most_frequent(trips.iter().map(|t| t.hour)).ok_or(AnalysisError::EmptyTable)?;

        Ok(Self {
            most_common_month: month_name(month).to_string(),
            month_count,
            most_common_day: day_name(day).to_string(),
            day_count,
            most_common_hour: hour,
            hour_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trips::{Schema, Trip, TripTable};
    use chrono::{Datelike, NaiveDateTime, Timelike};

    #[test]
    fn test_modes_and_counts() {
        let table = TripTable::new(
            vec![
                trip("2017-03-06 08:00:00"), // March, Monday, 8
                trip("2017-03-06 08:30:00"), // March, Monday, 8
                trip("2017-03-07 17:10:00"), // March, Tuesday, 17
                trip("2017-06-15 08:05:00"), // June, Thursday, 8
            ],
            Schema::default(),
        );

        let stats = TravelTimeStats::from_table(&table).unwrap();
        assert_eq!(stats.most_common_month, "March");
        assert_eq!(stats.month_count, 3);
        assert_eq!(stats.most_common_day, "Monday");
        assert_eq!(stats.day_count, 2);
        assert_eq!(stats.most_common_hour, 8);
        assert_eq!(stats.hour_count, 3);
    }

    #[test]
    fn test_empty_table_is_an_error() {
        let table = TripTable::new(vec![], Schema::default());
        let err = TravelTimeStats::from_table(&table).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyTable));
    }

    // Helper functions for tests
    fn trip(start: &str) -> Trip {
        let start_time = NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap();
        Trip {
            start_time,
            end_time: start_time + chrono::Duration::seconds(300),
            duration_secs: 300.0,
            start_station: "A".to_string(),
            end_station: "B".to_string(),
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: None,
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
        }
    }
}
