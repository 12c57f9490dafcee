//! The four statistics reports and their shared presentation helpers.
//!
//! Each report prints a headline, its statistic lines, the section's
//! elapsed time, and a closing rule. Undefined statistics are left out
//! rather than printed as placeholders.

use std::io::{BufRead, Write};
use std::time::Duration;

use bikeshare_core::formatting::{format_count, format_duration};
use bikeshare_core::Result;
use bikeshare_data::stats::{DurationStats, StationStats, TimeStats, UserStats};

use crate::console::Console;

/// Horizontal rule closing every report section.
pub(crate) const SECTION_RULE: &str = "----------------------------------------";

/// Most frequent travel times.
pub fn time_stats<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    stats: &TimeStats,
    elapsed: Duration,
) -> Result<()> {
    console.write_line("\nCalculating The Most Frequent Times of Travel...\n")?;

    if let Some(month) = &stats.most_common_month {
        console.write_line(&format!("The most common month is: {month}"))?;
    }
    if let Some(day) = &stats.most_common_weekday {
        console.write_line(&format!("The most common day of the week is: {day}"))?;
    }
    if let Some(hour) = stats.most_common_hour {
        console.write_line(&format!("The most common start hour is: {hour}"))?;
    }

    finish_section(console, elapsed)
}

/// Most popular stations and start/end combination.
pub fn station_stats<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    stats: &StationStats,
    elapsed: Duration,
) -> Result<()> {
    console.write_line("\nCalculating The Most Popular Stations and Trip...\n")?;

    if let Some(start) = &stats.most_common_start {
        console.write_line(&format!("The most common start station is: {start}"))?;
    }
    if let Some(end) = &stats.most_common_end {
        console.write_line(&format!("The most common end station is: {end}"))?;
    }
    if let Some(pair) = &stats.most_common_pair {
        console.write_line(&format!(
            "The most common combination of start // stop stations is: {pair}"
        ))?;
    }

    finish_section(console, elapsed)
}

/// Total and average trip length.
pub fn duration_stats<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    stats: &DurationStats,
    elapsed: Duration,
) -> Result<()> {
    console.write_line("\nCalculating Trip Duration...\n")?;

    console.write_line(&format!(
        "Total travel time (days, hh:mm:ss): {}",
        format_duration(stats.total_secs)
    ))?;
    if let Some(mean) = stats.mean_positive_secs {
        console.write_line(&format!(
            "Average travel time (days, hh:mm:ss): {}",
            format_duration(mean)
        ))?;
    }

    finish_section(console, elapsed)
}

/// Rider demographics.
pub fn user_stats<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    stats: &UserStats,
    elapsed: Duration,
) -> Result<()> {
    console.write_line("\nCalculating User Stats...\n")?;

    if !stats.user_type_counts.is_empty() {
        console.write_line("Here is a breakdown of the types of bike riders:")?;
        write_counts(console, &stats.user_type_counts)?;
    }

    if let Some(genders) = &stats.gender_counts {
        if !genders.is_empty() {
            console.write_line("Here is a breakdown of the genders of bike riders:")?;
            write_counts(console, genders)?;
        }
    }

    if let Some(years) = &stats.birth_years {
        console.write_line(&format!(
            "The earliest birth year of bike riders is: {}",
            years.earliest
        ))?;
        console.write_line(&format!(
            "The most recent birth year of bike riders is: {}",
            years.most_recent
        ))?;
        console.write_line(&format!(
            "The most common birth year of bike riders is: {}",
            years.most_common
        ))?;
    }

    finish_section(console, elapsed)
}

/// The overall elapsed line printed once all four sections are done.
pub fn total_time<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    elapsed: Duration,
) -> Result<()> {
    console.write_line(SECTION_RULE)?;
    console.write_line(&format!(
        "\nTotal time: {:.4} seconds.",
        elapsed.as_secs_f64()
    ))
}

/// Notice shown instead of the reports when the filters match nothing.
pub fn no_matches<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.write_line("\nNo trips match the selected filters.")?;
    console.write_line(SECTION_RULE)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// One indented `name: count` line per entry, then a separating blank.
fn write_counts<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    counts: &[(String, u64)],
) -> Result<()> {
    for (name, count) in counts {
        console.write_line(&format!("  {}: {}", name, format_count(*count)))?;
    }
    console.blank_line()?;
    Ok(())
}

/// Report the section's elapsed time and close it with a rule.
fn finish_section<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    elapsed: Duration,
) -> Result<()> {
    console.write_line(&format!(
        "\nThis took {:.4} seconds.",
        elapsed.as_secs_f64()
    ))?;
    console.write_line(SECTION_RULE)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
