//! Trip duration totals and averages.

use serde::Serialize;

use crate::errors::AnalysisError;
use crate::trips::TripTable;

/// Total and mean trip duration of a table. All values are stored
/// unrounded; display formatting decides the precision.
#[derive(Debug, Clone, Serialize)]
pub struct DurationStats {
    pub trips: usize,
    pub total_secs: f64,
    pub total_hours: f64,
    pub total_days: f64,
    pub mean_secs: f64,
    pub mean_minutes: f64,
}

impl DurationStats {
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyTable`] when the table has no rows,
    /// so a missing dataset never reads as a zero-duration one.
    pub fn from_table(table: &TripTable) -> Result<Self, AnalysisError> {
        if table.is_empty() {
            return Err(AnalysisError::EmptyTable);
        }

        let trips = table.len();
        let total_secs: f64 = table.trips().iter().map(|t| t.duration_secs).sum();
        let total_hours = total_secs / 60.0 / 60.0;
        let mean_secs = total_secs / trips as f64;

        Ok(Self {
            trips,
            total_secs,
            total_hours,
            total_days: total_hours / 24.0,
            mean_secs,
            mean_minutes: mean_secs / 60.0,
        })
    }
}
