//! Console and JSON rendering of report results.
//!
//! The print functions write the statistic lines only; callers own the
//! surrounding section headers and separators.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::filters::TripFilter;
use crate::reports::durations::DurationStats;
use crate::reports::stations::StationStats;
use crate::reports::times::TravelTimeStats;
use crate::reports::users::UserStats;

pub fn print_time_stats(stats: &TravelTimeStats) {
    println!(
        "The most popular month is {} with {} occurrences!",
        stats.most_common_month, stats.month_count
    );
    println!(
        "The most popular day is {} with {} occurrences!",
        stats.most_common_day, stats.day_count
    );
    println!(
        "The most popular starting hour is {} with {} occurrences!",
        stats.most_common_hour, stats.hour_count
    );
}

pub fn print_station_stats(stats: &StationStats) {
    println!(
        "The most popular start station is {} with {} occurrences!",
        stats.most_common_start, stats.start_count
    );
    println!(
        "The most popular end station is {} with {} occurrences!",
        stats.most_common_end, stats.end_count
    );
    println!(
        "The most popular station combination is {} with {} occurrences!",
        stats.most_common_trip, stats.trip_count
    );
}

/// Durations are kept unrounded in [`DurationStats`]; the two-decimal
/// rounding happens here and only here.
pub fn print_duration_stats(stats: &DurationStats) {
    println!(
        "The total travel time is: {:.2} hours or {:.2} days!",
        stats.total_hours, stats.total_days
    );
    println!(
        "The average travel time is: {:.2} minutes!",
        stats.mean_minutes
    );
}

pub fn print_user_stats(stats: &UserStats) {
    println!("User Types:");
    for (user_type, count) in &stats.user_types {
        println!("  {user_type}: {count}");
    }
    println!();

    match &stats.genders {
        Some(genders) => {
            println!("Gender count:");
            for (gender, count) in genders {
                println!("  {gender}: {count}");
            }
        }
        None => println!("Gender data is not available for this city."),
    }
    println!();

    match &stats.birth_years {
        Some(birth_years) => {
            println!("The earliest birth year is {}!", birth_years.earliest);
            println!("The most recent birth year is {}!", birth_years.most_recent);
            println!(
                "The most common year of birth is {}!",
                birth_years.most_common
            );
        }
        None => println!("Birth year data is not available for this city."),
    }
    println!();
}

/// All report results for one filtered table, serializable as a single
/// JSON document. A `None` section means the filters matched no rows.
#[derive(Debug, Serialize)]
pub struct CityReport {
    pub city: String,
    pub month: String,
    pub day: String,
    pub generated_at: DateTime<Utc>,
    pub rows: usize,
    pub travel_times: Option<TravelTimeStats>,
    pub stations: Option<StationStats>,
    pub durations: Option<DurationStats>,
    pub users: Option<UserStats>,
}

impl CityReport {
    pub fn new(filter: &TripFilter, rows: usize) -> Self {
        Self {
            city: filter.city.to_string(),
            month: filter.month_label().to_string(),
            day: filter.day_label().to_string(),
            generated_at: Utc::now(),
            rows,
            travel_times: None,
            stations: None,
            durations: None,
            users: None,
        }
    }

    pub fn with_travel_times(mut self, stats: TravelTimeStats) -> Self {
        self.travel_times = Some(stats);
        self
    }

    pub fn with_stations(mut self, stats: StationStats) -> Self {
        self.stations = Some(stats);
        self
    }

    pub fn with_durations(mut self, stats: DurationStats) -> Self {
        self.durations = Some(stats);
        self
    }

    pub fn with_users(mut self, stats: UserStats) -> Self {
        self.users = Some(stats);
        self
    }
}

/// Prints a [`CityReport`] as pretty JSON on stdout.
pub fn print_json(report: &CityReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
