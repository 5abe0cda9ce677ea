//! Data types for the trip-analysis pipeline.

use chrono::{NaiveDateTime, Weekday};

use crate::filters::TripFilter;

/// A single trip record with calendar fields derived once at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Trip length in seconds as recorded in the dataset. Assumed
    /// non-negative; not validated.
    pub duration_secs: f64,
    pub start_station: String,
    pub end_station: String,
    /// `None` when the source cell is blank.
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    // Derived from start_time by the loader, never recomputed downstream
    pub month: u32,
    pub weekday: Weekday,
    pub hour: u32,
}

/// Which optional columns the loaded dataset provides. Determined once
/// from the CSV header row; Washington ships without either column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Schema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Schema {
    /// Column count of the in-memory table: the six base columns, the
    /// optional two, and the three derived calendar fields.
    pub fn column_count(&self) -> usize {
        6 + usize::from(self.has_gender) + usize::from(self.has_birth_year) + 3
    }
}

/// An ordered collection of trips plus the schema they were loaded with.
#[derive(Debug, Clone)]
pub struct TripTable {
    trips: Vec<Trip>,
    schema: Schema,
}

impl TripTable {
    pub fn new(trips: Vec<Trip>, schema: Schema) -> Self {
        Self { trips, schema }
    }

    /// All trips in load order. The raw-data pager slices windows out of
    /// this directly.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Returns a new table containing only trips matching `filter`.
    ///
    /// The month and day criteria are evaluated independently and combined
    /// with logical AND, so applying them together or one after the other
    /// in either order yields the same rows. The input table is left
    /// untouched and row order is preserved. An empty result is valid
    /// output, not an error.
    pub fn filtered(&self, filter: &TripFilter) -> TripTable {
        let month = filter.month.map(|m| m.number_from_month());
        let trips = self
            .trips
            .iter()
            .filter(|t| month.map_or(true, |m| t.month == m))
            .filter(|t| filter.day.map_or(true, |d| t.weekday == d))
            .cloned()
            .collect();
        TripTable {
            trips,
            schema: self.schema,
        }
    }
}
