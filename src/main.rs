//! CLI entry point for the bikeshare explorer.
//!
//! Provides an interactive exploration session plus a one-shot report
//! subcommand for scripted use, with console or JSON output.

mod session;

use anyhow::{Context, Result};
use bikeshare_explorer::filters::{TripFilter, parse_day, parse_month};
use bikeshare_explorer::loader::load_city;
use bikeshare_explorer::output;
use bikeshare_explorer::reports::durations::DurationStats;
use bikeshare_explorer::reports::stations::StationStats;
use bikeshare_explorer::reports::times::TravelTimeStats;
use bikeshare_explorer::reports::users::UserStats;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_explorer")]
#[command(about = "Explore US bikeshare trip data", long_about = None)]
struct Cli {
    /// Directory containing the city CSV datasets
    #[arg(long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively pick filters and browse the reports (the default)
    Explore,
    /// Print all reports for one city without prompting
    Report {
        /// City to analyze: chicago, new york city, or washington
        #[arg(value_name = "CITY")]
        city: String,

        /// Month to filter by (january through june), or "all"
        #[arg(short, long, default_value = "all")]
        month: String,

        /// Day of the week to filter by, or "all"
        #[arg(short, long, default_value = "all")]
        day: String,

        /// Print the results as a single JSON document
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/bikeshare_explorer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_explorer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    // Stderr stays quiet by default so the interactive prompts are readable
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("info".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir);

    match cli.command.unwrap_or(Commands::Explore) {
        Commands::Explore => session::run(&data_dir)?,
        Commands::Report {
            city,
            month,
            day,
            json,
        } => run_report(&data_dir, &city, &month, &day, json)?,
    }

    Ok(())
}

/// The `--data-dir` flag wins, then `BIKESHARE_DATA_DIR`, then the current
/// directory.
fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var("BIKESHARE_DATA_DIR").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Loads, filters, and reports on one city in a single pass.
#[tracing::instrument(skip(data_dir))]
fn run_report(data_dir: &Path, city: &str, month: &str, day: &str, json: bool) -> Result<()> {
    let filter = TripFilter::new(city.parse()?)
        .with_month(parse_month(month)?)
        .with_day(parse_day(day)?);

    let table = load_city(data_dir, filter.city)
        .with_context(|| format!("failed to load the {} dataset", filter.city))?
        .filtered(&filter);
    info!(rows = table.len(), "table filtered");

    let stats = if table.is_empty() {
        None
    } else {
        Some((
            TravelTimeStats::from_table(&table)?,
            StationStats::from_table(&table)?,
            DurationStats::from_table(&table)?,
            UserStats::from_table(&table)?,
        ))
    };

    let mut report = output::CityReport::new(&filter, table.len());
    if let Some((times, stations, durations, users)) = &stats {
        report = report
            .with_travel_times(times.clone())
            .with_stations(stations.clone())
            .with_durations(durations.clone())
            .with_users(users.clone());
    }

    if json {
        return output::print_json(&report);
    }

    println!(
        "City: {}, Month: {}, Day: {} ({} trips)",
        report.city, report.month, report.day, report.rows
    );
    println!();

    match &stats {
        Some((times, stations, durations, users)) => {
            output::print_time_stats(times);
            println!();
            output::print_station_stats(stations);
            println!();
            output::print_duration_stats(durations);
            println!();
            output::print_user_stats(users);
        }
        None => println!("No trips match the current filters."),
    }

    Ok(())
}
