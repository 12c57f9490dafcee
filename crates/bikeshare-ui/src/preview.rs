//! Raw-data preview: an optional, growing window over the filtered table.

use std::io::{BufRead, Write};

use chrono::NaiveDateTime;
use unicode_width::UnicodeWidthStr;

use bikeshare_core::models::{Dataset, TripFilters, TripRecord};
use bikeshare_core::Result;

use crate::console::Console;
use crate::prompt::confirm;

/// Rows added per "See more?" answer.
const PREVIEW_STEP: usize = 5;
/// Hard cap on previewed rows.
const PREVIEW_MAX: usize = 25;

/// Timestamps render in the same format the files carry.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Offer a preview of `dataset`, growing it five rows at a time while the
/// user keeps answering yes, up to 25 rows.
///
/// Short tables clamp to their length but keep the question coming until
/// the cap, mirroring how the row window is driven by answers rather than
/// by the table size.
pub fn run_preview<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    dataset: &Dataset,
    filters: &TripFilters,
) -> Result<()> {
    let mut wanted = confirm(
        console,
        "Would you like to preview a sample of the data (max: 25 lines)? (Y/N)",
    )?;

    let mut shown = 0;
    while wanted && shown < PREVIEW_MAX {
        shown += PREVIEW_STEP;

        console.blank_line()?;
        console.write_line(&format!("Sample data from {}", dataset.city))?;
        console.write_line(&format!(
            "Month: {}; Day of week: {}",
            filters.month_label(),
            filters.day_label()
        ))?;
        console.blank_line()?;

        for line in render_table(dataset, shown.min(dataset.len())) {
            console.write_line(&line)?;
        }

        if shown >= PREVIEW_MAX {
            break;
        }
        wanted = confirm(console, "See more? (Y/N)")?;
    }

    Ok(())
}

// ── Table rendering ───────────────────────────────────────────────────────────

/// Render the first `rows` trips as an aligned table, one string per line.
///
/// The leading column is the row's position in the filtered table. Gender
/// and Birth Year columns appear only when the city publishes them.
fn render_table(dataset: &Dataset, rows: usize) -> Vec<String> {
    let mut headers: Vec<&str> = vec![
        "",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if dataset.has_gender {
        headers.push("Gender");
    }
    if dataset.has_birth_year {
        headers.push("Birth Year");
    }

    let body: Vec<Vec<String>> = dataset.trips[..rows]
        .iter()
        .enumerate()
        .map(|(index, trip)| render_row(index, trip, dataset))
        .collect();

    // Column widths fit the widest cell, headers included.
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in &body {
        for (cell, width) in row.iter().zip(widths.iter_mut()) {
            *width = (*width).max(cell.width());
        }
    }

    let mut lines = Vec::with_capacity(body.len() + 1);
    lines.push(render_line(&headers, &widths));
    for row in &body {
        lines.push(render_line(row, &widths));
    }
    lines
}

fn render_row(index: usize, trip: &TripRecord, dataset: &Dataset) -> Vec<String> {
    let mut cells = vec![
        index.to_string(),
        format_time_cell(&trip.start_time),
        format_time_cell(&trip.end_time),
        trip.duration_secs.to_string(),
        trip.start_station.clone(),
        trip.end_station.clone(),
        trip.user_type.clone(),
    ];
    if dataset.has_gender {
        cells.push(trip.gender.clone().unwrap_or_default());
    }
    if dataset.has_birth_year {
        cells.push(trip.birth_year.map(|y| y.to_string()).unwrap_or_default());
    }
    cells
}

/// Join cells left-aligned with two-space gaps, trailing padding trimmed.
fn render_line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        let cell = cell.as_ref();
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        let pad = widths[i].saturating_sub(cell.width());
        line.push_str(&" ".repeat(pad));
    }
    line.trim_end().to_string()
}

fn format_time_cell(time: &NaiveDateTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

// ── Tests ──────────────────────────────────────────────────────────────────────
