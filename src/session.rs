//! Interactive exploration session: filter prompts, the four report
//! sections, the raw-row pager, and the restart loop.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use bikeshare_explorer::errors::AnalysisError;
use bikeshare_explorer::filters::{City, TripFilter, day_name, parse_day, parse_month};
use bikeshare_explorer::loader::load_city;
use bikeshare_explorer::output;
use bikeshare_explorer::reports::durations::DurationStats;
use bikeshare_explorer::reports::stations::StationStats;
use bikeshare_explorer::reports::times::TravelTimeStats;
use bikeshare_explorer::reports::users::UserStats;
use bikeshare_explorer::trips::{Trip, TripTable};

const PAGE_SIZE: usize = 5;
const SEPARATOR_WIDTH: usize = 40;

/// Runs the prompt-report-restart loop until the user declines a restart.
pub fn run(data_dir: &Path) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let filter = prompt_filters(&mut input)?;
        info!(
            city = %filter.city,
            month = filter.month_label(),
            day = filter.day_label(),
            "filters selected"
        );

        let table = load_city(data_dir, filter.city)
            .with_context(|| format!("failed to load the {} dataset", filter.city))?
            .filtered(&filter);

        run_reports(&table);
        page_raw_data(&mut input, &table)?;
        print_filter_summary(&filter, &table);

        println!("\nWould you like to restart? Enter yes or no.");
        if !read_yes(&mut input)? {
            break;
        }
    }

    Ok(())
}

fn prompt_filters(input: &mut impl BufRead) -> Result<TripFilter> {
    println!("Hello! Let's explore some US bikeshare data!");

    let city = prompt_until(
        input,
        "Choose a city to explore (Chicago, New York City, Washington): ",
        "Invalid input. Please select a valid city.",
        |token| token.parse::<City>(),
    )?;
    println!("\nYou've selected {city}.\n");

    let month = prompt_until(
        input,
        "Choose a month (January to June) or 'all' for no filter: ",
        "Invalid input. Please select a valid month.",
        parse_month,
    )?;
    println!(
        "\nYou've selected {}.\n",
        month.map(|m| m.name()).unwrap_or("All")
    );

    let day = prompt_until(
        input,
        "Choose a day of the week or 'all' for no filter: ",
        "Invalid input. Please select a valid day.",
        parse_day,
    )?;
    println!("\nYou've selected {}.\n", day.map(day_name).unwrap_or("All"));

    println!("{}", "-".repeat(SEPARATOR_WIDTH));

    Ok(TripFilter::new(city).with_month(month).with_day(day))
}

/// Prompts until `parse` accepts the entered token. Rejected tokens print
/// `invalid_msg` and re-prompt; a closed stdin is an error rather than a
/// spin.
fn prompt_until<T, F>(
    input: &mut impl BufRead,
    prompt: &str,
    invalid_msg: &str,
    parse: F,
) -> Result<T>
where
    F: Fn(&str) -> Result<T, AnalysisError>,
{
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;

    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("input ended before a valid selection was made");
        }
        match parse(line.trim()) {
            Ok(value) => return Ok(value),
            Err(err) => {
                warn!(error = %err, "rejected selection");
                println!("{invalid_msg}");
                print!("> ");
                io::stdout().flush()?;
            }
        }
    }
}

/// Runs the four report sections. A section whose reporter finds no rows
/// prints the error line and the remaining sections still run.
fn run_reports(table: &TripTable) {
    report_section("Calculating The Most Frequent Times of Travel...", || {
        let stats = TravelTimeStats::from_table(table)?;
        output::print_time_stats(&stats);
        Ok(())
    });

    report_section("Calculating The Most Popular Stations and Trip...", || {
        let stats = StationStats::from_table(table)?;
        output::print_station_stats(&stats);
        Ok(())
    });

    report_section("Calculating Trip Duration...", || {
        let stats = DurationStats::from_table(table)?;
        output::print_duration_stats(&stats);
        Ok(())
    });

    report_section("Calculating User Stats...", || {
        let stats = UserStats::from_table(table)?;
        output::print_user_stats(&stats);
        Ok(())
    });
}

fn report_section<F>(title: &str, render: F)
where
    F: FnOnce() -> Result<(), AnalysisError>,
{
    println!("\n{title}\n");
    let started = Instant::now();

    if let Err(err) = render() {
        println!("{err}");
    }

    println!("\nThis took {:.4} seconds.", started.elapsed().as_secs_f64());
    println!("{}", "-".repeat(SEPARATOR_WIDTH));
}

fn page_raw_data(input: &mut impl BufRead, table: &TripTable) -> Result<()> {
    println!("Do you want to see some raw data? Type 'yes' or 'no'.");
    print!("> ");
    io::stdout().flush()?;

    let mut offset = 0;
    while read_yes(input)? {
        let Some(window) = page_rows(table.trips(), offset) else {
            println!("No more data to display.");
            break;
        };
        for trip in window {
            println!("{}", format_trip_row(trip));
        }
        offset += PAGE_SIZE;

        println!("Do you want to see the next {PAGE_SIZE} rows? Answer 'yes' or 'no'.");
        print!("> ");
        io::stdout().flush()?;
    }

    println!("Bringing you back to main menu...");
    Ok(())
}

/// The next window of up to [`PAGE_SIZE`] trips starting at `offset`, or
/// `None` once the table is exhausted.
fn page_rows(trips: &[Trip], offset: usize) -> Option<&[Trip]> {
    if offset >= trips.len() {
        return None;
    }
    let end = (offset + PAGE_SIZE).min(trips.len());
    Some(&trips[offset..end])
}

fn format_trip_row(trip: &Trip) -> String {
    let user_type = trip.user_type.as_deref().unwrap_or("-");
    format!(
        "{} | {:>6.0}s | {} to {} | {}",
        trip.start_time, trip.duration_secs, trip.start_station, trip.end_station, user_type
    )
}

fn print_filter_summary(filter: &TripFilter, table: &TripTable) {
    println!();
    println!();
    println!("Filter Summary:");
    println!(
        "City: {}, Month: {}, Day of the week: {}.",
        filter.city.to_string().to_lowercase(),
        filter.month_label().to_lowercase(),
        filter.day_label().to_lowercase()
    );
    println!();
    println!("Shape:");
    println!("({}, {})", table.len(), table.schema().column_count());
    println!();
}

/// Reads one line and reports whether it is an affirmative answer. A
/// closed stdin counts as "no".
fn read_yes(input: &mut impl BufRead) -> Result<bool> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(line.trim().eq_ignore_ascii_case("yes"))
}
