//! Rider demographics: user types, gender, and birth years.
//!
//! Gender and birth-year coverage varies by city, so those parts of the
//! report are gated on the table's [`Schema`] flags rather than inferred
//! from the rows.

use std::collections::HashMap;

use serde::Serialize;

use crate::errors::AnalysisError;
use crate::reports::frequency::most_frequent;
use crate::trips::{Trip, TripTable};

/// Earliest, most recent, and most common rider birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Rider demographics for a table. `genders` and `birth_years` are `None`
/// when the city's dataset does not carry those columns (or, for birth
/// years, when every cell in the filtered rows is blank).
#[derive(Debug, Clone, Serialize)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYearStats>,
}

impl UserStats {
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyTable`] when the table has no rows.
    pub fn from_table(table: &TripTable) -> Result<Self, AnalysisError> {
        if table.is_empty() {
            return Err(AnalysisError::EmptyTable);
        }

        let trips = table.trips();
        let schema = table.schema();

        let user_types = count_values(trips.iter().filter_map(|t| t.user_type.as_deref()));
        let genders = schema
            .has_gender
            .then(|| count_values(trips.iter().filter_map(|t| t.gender.as_deref())));
        let birth_years = if schema.has_birth_year {
            birth_year_stats(trips)
        } else {
            None
        };

        Ok(Self {
            user_types,
            genders,
            birth_years,
        })
    }
}

/// Counts distinct present values, blank cells excluded. Ordered by count
/// descending, then name ascending so tied counts render deterministically.
fn count_values<'a, I>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut counted: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    counted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counted
}

fn birth_year_stats(trips: &[Trip]) -> Option<BirthYearStats> {
    let years: Vec<i32> = trips.iter().filter_map(|t| t.birth_year).collect();
    let earliest = *years.iter().min()?;
    let most_recent = *years.iter().max()?;
    let (most_common, _) = most_frequent(years)?;

    Some(BirthYearStats {
        earliest,
        most_recent,
        most_common,
    })
}
