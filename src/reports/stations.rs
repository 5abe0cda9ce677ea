//! Most popular stations and station-to-station trips.

use serde::Serialize;

use crate::errors::AnalysisError;
use crate::reports::frequency::most_frequent;
use crate::trips::TripTable;

/// Most common start station, end station, and start-to-end combination,
/// each with its occurrence count.
#[derive(Debug, Clone, Serialize)]
pub struct StationStats {
    pub most_common_start: String,
    pub start_count: usize,
    pub most_common_end: String,
    pub end_count: usize,
    /// Combined as `"<start> to <end>"`.
    pub most_common_trip: String,
    pub trip_count: usize,
}

impl StationStats {
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyTable`] when the table has no rows.
    pub fn from_table(table: &TripTable) -> Result<Self, AnalysisError> {
        let trips = table.trips();
        let (most_common_start, start_count) =
            most_frequent(trips.iter().map(|t| t.start_station.clone()))
                .ok_or(AnalysisError::EmptyTable)?;
        let (most_common_end, end_count) =
            most_frequent(trips.iter().map(|t| t.end_station.clone()))
                .ok_or(AnalysisError::EmptyTable)?;
        let (most_common_trip, trip_count) = most_frequent(
            trips
                .iter()
                .map(|t| format!("{} to {}", t.start_station, t.end_station)),
        )
        .ok_or(AnalysisError::EmptyTable)?;

        Ok(Self {
            most_common_start,
            start_count,
            most_common_end,
            end_count,
            most_common_trip,
            trip_count,
        })
    }
}
