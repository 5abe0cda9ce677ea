//! Filter vocabulary: the fixed city set, month/day tokens, and the
//! validated (city, month, day) criteria applied to a trip table.

use std::fmt;
use std::str::FromStr;

use chrono::{Month, Weekday};

use crate::errors::AnalysisError;

/// The three cities with published trip datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// All cities, in prompt order.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// File name of the backing dataset, relative to the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        })
    }
}

impl FromStr for City {
    type Err = AnalysisError;

    /// Case-insensitive; also accepts the kebab-case form used on the
    /// command line (`new-york-city`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chicago" => Ok(City::Chicago),
            "new york city" | "new-york-city" => Ok(City::NewYorkCity),
            "washington" => Ok(City::Washington),
            _ => Err(AnalysisError::UnknownCity(s.trim().to_string())),
        }
    }
}

/// Parses a month token: a month name within the covered January-June
/// range, or `"all"` for no filter.
pub fn parse_month(token: &str) -> Result<Option<Month>, AnalysisError> {
    let token = token.trim();
    if token.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    let month = Month::from_str(token)
        .map_err(|_| AnalysisError::UnknownMonth(token.to_string()))?;
    // The datasets only cover the first half of the year
    if month.number_from_month() > Month::June.number_from_month() {
        return Err(AnalysisError::UnknownMonth(token.to_string()));
    }
    Ok(Some(month))
}

/// Parses a day token: a day-of-week name, or `"all"` for no filter.
pub fn parse_day(token: &str) -> Result<Option<Weekday>, AnalysisError> {
    let token = token.trim();
    if token.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    token
        .parse::<Weekday>()
        .map(Some)
        .map_err(|_| AnalysisError::UnknownDay(token.to_string()))
}

/// Full English day name; chrono's `Display` only gives the short form.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// English month name for a 1-based month number, as derived at load time.
pub fn month_name(month: u32) -> &'static str {
    match Month::try_from(month as u8) {
        Ok(m) => m.name(),
        Err(_) => "Unknown",
    }
}

/// A validated (city, month, day) selection. `None` means no filter on
/// that axis. Values are checked against their domain during parsing, so
/// the pipeline never sees an out-of-range token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripFilter {
    pub city: City,
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl TripFilter {
    /// An unfiltered selection for `city`.
    pub fn new(city: City) -> Self {
        Self {
            city,
            month: None,
            day: None,
        }
    }

    pub fn with_month(mut self, month: Option<Month>) -> Self {
        self.month = month;
        self
    }

    pub fn with_day(mut self, day: Option<Weekday>) -> Self {
        self.day = day;
        self
    }

    /// Month label for summary lines: the month name, or `"all"`.
    pub fn month_label(&self) -> &'static str {
        self.month.map(|m| m.name()).unwrap_or("all")
    }

    /// Day label for summary lines: the day name, or `"all"`.
    pub fn day_label(&self) -> &'static str {
        self.day.map(day_name).unwrap_or("all")
    }
}
