//! CSV dataset loading.
//!
//! Each city dataset is a CSV export with a leading unnamed index column,
//! six base columns, and (for Chicago and New York City) two extra
//! demographic columns. Rows are parsed eagerly; timestamps and numeric
//! cells that fail to parse abort the load with the offending row number.

use std::path::Path;

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;
use tracing::info;

use crate::errors::AnalysisError;
use crate::filters::City;
use crate::trips::{Schema, Trip, TripTable};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One CSV row as it appears on disk. Timestamps and numbers stay as text
/// here so a bad cell can be reported with its row number instead of
/// surfacing as an opaque decode error.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: String,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type")]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<String>,
}

/// Loads the dataset for `city` from `data_dir` into a [`TripTable`].
///
/// The calendar fields used by the filters and reports (month, weekday,
/// start hour) are derived from each trip's start time here, once.
///
/// # Errors
///
/// Returns [`AnalysisError::DatasetMissing`] when the city's CSV file does
/// not exist, and [`AnalysisError::MalformedRecord`] when a row holds an
/// unparseable timestamp, duration, or birth year.
pub fn load_city(data_dir: &Path, city: City) -> Result<TripTable, AnalysisError> {
    let path = data_dir.join(city.file_name());
    if !path.exists() {
        return Err(AnalysisError::DatasetMissing { city, path });
    }

    let mut reader = csv::Reader::from_path(&path)?;
    let schema = {
        let headers = reader.headers()?;
        Schema {
            has_gender: headers.iter().any(|h| h == "Gender"),
            has_birth_year: headers.iter().any(|h| h == "Birth Year"),
        }
    };

    let mut trips = Vec::new();
    for (idx, record) in reader.deserialize::<RawTrip>().enumerate() {
        let raw = record?;
        trips.push(build_trip(raw, idx + 1)?);
    }

    info!(
        city = %city,
        rows = trips.len(),
        has_gender = schema.has_gender,
        has_birth_year = schema.has_birth_year,
        path = %path.display(),
        "loaded dataset"
    );
    Ok(TripTable::new(trips, schema))
}

fn build_trip(raw: RawTrip, row: usize) -> Result<Trip, AnalysisError> {
    let start_time = parse_time(&raw.start_time, "Start Time", row)?;
    let end_time = parse_time(&raw.end_time, "End Time", row)?;
    let duration_secs: f64 =
        raw.trip_duration
            .trim()
            .parse()
            .map_err(|_| AnalysisError::MalformedRecord {
                row,
                reason: format!("invalid Trip Duration '{}'", raw.trip_duration),
            })?;
    let birth_year = parse_birth_year(raw.birth_year.as_deref(), row)?;

    Ok(Trip {
        month: start_time.month(),
        weekday: start_time.weekday(),
        hour: start_time.hour(),
        start_time,
        end_time,
        duration_secs,
        start_station: raw.start_station,
        end_station: raw.end_station,
        user_type: raw.user_type,
        gender: raw.gender,
        birth_year,
    })
}

fn parse_time(text: &str, column: &str, row: usize) -> Result<NaiveDateTime, AnalysisError> {
    NaiveDateTime::parse_from_str(text.trim(), TIME_FORMAT).map_err(|_| {
        AnalysisError::MalformedRecord {
            row,
            reason: format!("invalid {column} '{text}'"),
        }
    })
}

/// Birth years are exported in float form ("1989.0"); blank cells mean the
/// rider did not provide one.
fn parse_birth_year(text: Option<&str>, row: usize) -> Result<Option<i32>, AnalysisError> {
    match text.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => {
            let year: f64 = text.parse().map_err(|_| AnalysisError::MalformedRecord {
                row,
                reason: format!("invalid Birth Year '{text}'"),
            })?;
            Ok(Some(year as i32))
        }
    }
}
