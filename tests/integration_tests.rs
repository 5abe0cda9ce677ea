use std::path::{Path, PathBuf};

use chrono::{Month, Weekday};

use bikeshare_explorer::errors::AnalysisError;
use bikeshare_explorer::filters::{City, TripFilter};
use bikeshare_explorer::loader::load_city;
use bikeshare_explorer::reports::durations::DurationStats;
use bikeshare_explorer::reports::stations::StationStats;
use bikeshare_explorer::reports::times::TravelTimeStats;
use bikeshare_explorer::reports::users::{BirthYearStats, UserStats};
use bikeshare_explorer::trips::TripTable;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn chicago() -> TripTable {
    load_city(&fixtures_dir(), City::Chicago).expect("Failed to load chicago fixture")
}

#[test]
fn test_chicago_march_pipeline() {
    let filter = TripFilter::new(City::Chicago).with_month(Some(Month::March));
    let table = chicago().filtered(&filter);
    assert_eq!(table.len(), 8);

    let times = TravelTimeStats::from_table(&table).unwrap();
    assert_eq!(times.most_common_month, "March");
    assert_eq!(times.month_count, 8);
    assert_eq!(times.most_common_day, "Monday");
    assert_eq!(times.day_count, 3);
    assert_eq!(times.most_common_hour, 8);
    assert_eq!(times.hour_count, 5);

    let stations = StationStats::from_table(&table).unwrap();
    assert_eq!(stations.most_common_start, "Clark St & Lake St");
    assert_eq!(stations.start_count, 4);
    assert_eq!(stations.most_common_end, "Canal St & Adams St");
    assert_eq!(stations.end_count, 4);
    assert_eq!(
        stations.most_common_trip,
        "Clark St & Lake St to Canal St & Adams St"
    );
    assert_eq!(stations.trip_count, 3);

    let durations = DurationStats::from_table(&table).unwrap();
    assert_eq!(durations.total_secs, 4800.0);
    assert!((durations.total_hours - 4800.0 / 3600.0).abs() < 1e-9);
    assert!((durations.total_days - durations.total_hours / 24.0).abs() < 1e-9);
    assert_eq!(durations.mean_secs, 600.0);
    assert_eq!(durations.mean_minutes, 10.0);

    let users = UserStats::from_table(&table).unwrap();
    assert_eq!(
        users.user_types,
        vec![("Subscriber".to_string(), 6), ("Customer".to_string(), 2)]
    );
    assert_eq!(
        users.genders,
        Some(vec![("Female".to_string(), 3), ("Male".to_string(), 3)])
    );
    assert_eq!(
        users.birth_years,
        Some(BirthYearStats {
            earliest: 1985,
            most_recent: 2001,
            most_common: 1992,
        })
    );
}

#[test]
fn test_chicago_unfiltered_totals() {
    let table = chicago().filtered(&TripFilter::new(City::Chicago));
    assert_eq!(table.len(), 20);

    let times = TravelTimeStats::from_table(&table).unwrap();
    assert_eq!(times.most_common_month, "March");
    assert_eq!(times.month_count, 8);
    assert_eq!(times.most_common_day, "Monday");
    assert_eq!(times.day_count, 7);
    assert_eq!(times.most_common_hour, 8);
    assert_eq!(times.hour_count, 8);

    let stations = StationStats::from_table(&table).unwrap();
    assert_eq!(stations.most_common_start, "Clark St & Lake St");
    assert_eq!(stations.start_count, 8);
    assert_eq!(stations.most_common_end, "Canal St & Adams St");
    assert_eq!(stations.end_count, 8);
    assert_eq!(
        stations.most_common_trip,
        "Clark St & Lake St to Canal St & Adams St"
    );
    assert_eq!(stations.trip_count, 5);

    let durations = DurationStats::from_table(&table).unwrap();
    assert_eq!(durations.total_secs, 19440.0);
    assert!((durations.total_hours - 5.4).abs() < 1e-9);
    assert_eq!(durations.mean_secs, 972.0);
    assert!((durations.mean_minutes - 16.2).abs() < 1e-9);

    let users = UserStats::from_table(&table).unwrap();
    assert_eq!(
        users.user_types,
        vec![("Subscriber".to_string(), 13), ("Customer".to_string(), 7)]
    );
    assert_eq!(
        users.genders,
        Some(vec![("Female".to_string(), 7), ("Male".to_string(), 7)])
    );
    assert_eq!(
        users.birth_years,
        Some(BirthYearStats {
            earliest: 1969,
            most_recent: 2001,
            most_common: 1992,
        })
    );
}

#[test]
fn test_filter_order_is_commutative() {
    let table = chicago();

    let month_only = TripFilter::new(City::Chicago).with_month(Some(Month::March));
    let day_only = TripFilter::new(City::Chicago).with_day(Some(Weekday::Mon));
    let both = month_only.with_day(Some(Weekday::Mon));

    let month_then_day = table.filtered(&month_only).filtered(&day_only);
    let day_then_month = table.filtered(&day_only).filtered(&month_only);
    let combined = table.filtered(&both);

    assert_eq!(month_then_day.trips(), combined.trips());
    assert_eq!(day_then_month.trips(), combined.trips());

    assert_eq!(combined.len(), 3);
    let durations = DurationStats::from_table(&combined).unwrap();
    assert_eq!(durations.total_secs, 1500.0);
}

#[test]
fn test_washington_lacks_demographics() {
    let table = load_city(&fixtures_dir(), City::Washington)
        .expect("Failed to load washington fixture");
    assert_eq!(table.len(), 6);
    assert!(!table.schema().has_gender);
    assert!(!table.schema().has_birth_year);
    assert_eq!(table.schema().column_count(), 9);

    let users = UserStats::from_table(&table).unwrap();
    // The blank user-type cell is excluded from the counts
    assert_eq!(
        users.user_types,
        vec![("Subscriber".to_string(), 3), ("Customer".to_string(), 2)]
    );
    assert_eq!(users.genders, None);
    assert_eq!(users.birth_years, None);
}

#[test]
fn test_empty_filter_combination_is_reported() {
    // The fixture has no Thursday trips in March
    let filter = TripFilter::new(City::Chicago)
        .with_month(Some(Month::March))
        .with_day(Some(Weekday::Thu));
    let table = chicago().filtered(&filter);
    assert!(table.is_empty());

    assert!(matches!(
        TravelTimeStats::from_table(&table),
        Err(AnalysisError::EmptyTable)
    ));
    assert!(matches!(
        StationStats::from_table(&table),
        Err(AnalysisError::EmptyTable)
    ));
    assert!(matches!(
        DurationStats::from_table(&table),
        Err(AnalysisError::EmptyTable)
    ));
    assert!(matches!(
        UserStats::from_table(&table),
        Err(AnalysisError::EmptyTable)
    ));
}
