//! The filter prompts that open every session.
//!
//! Each question loops until a valid answer arrives; invalid input is
//! re-asked without comment. Matching ignores case and surrounding
//! whitespace, and "All" at a month or day prompt means no restriction.

use std::io::{BufRead, Write};

use bikeshare_core::catalog::{self, City};
use bikeshare_core::models::TripFilters;
use bikeshare_core::{ExplorerError, Result};

use crate::console::Console;
use crate::report::SECTION_RULE;

const GREETING: &str = "Hello! Let's explore some US bikeshare data!";

/// Greet the user and collect a full set of session filters.
pub fn collect_filters<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<TripFilters> {
    console.write_line(GREETING)?;

    let city = prompt_city(console)?;

    let month = if confirm(console, "\nWould you like to filter the data by month? (Y/N): ")? {
        prompt_month(console)?
    } else {
        None
    };

    let day = if confirm(
        console,
        "\nWould you like to filter the data by day of the week? (Y/N): ",
    )? {
        prompt_weekday(console)?
    } else {
        None
    };

    console.write_line(SECTION_RULE)?;

    Ok(TripFilters { city, month, day })
}

/// Whether the user wants another session once a report completes.
pub fn confirm_restart<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<bool> {
    confirm(console, "\nWould you like to restart? (Y/N).\n")
}

/// A gate question: "y" or "yes" in any casing counts as yes, anything
/// else as no.
pub(crate) fn confirm<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    question: &str,
) -> Result<bool> {
    let answer = next_answer(console, question)?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

// ── Individual prompts ────────────────────────────────────────────────────────

fn prompt_city<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<City> {
    let question = format!(
        "\nWhich of these cities would you like to explore?:\n{}\n",
        city_options()
    );
    loop {
        let answer = next_answer(console, &question)?;
        if let Ok(city) = answer.parse::<City>() {
            return Ok(city);
        }
    }
}

fn prompt_month<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<&'static str>> {
    let question = format!(
        "\nWhich month would you like to explore?:\n{}\n",
        catalog::MONTHS.join(", ")
    );
    loop {
        let answer = next_answer(console, &question)?;
        if catalog::is_all(&answer) {
            return Ok(None);
        }
        if let Some(month) = catalog::match_month(&answer) {
            return Ok(Some(month));
        }
    }
}

fn prompt_weekday<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<&'static str>> {
    let question = format!(
        "\nWhich day of the week would you like to explore?:\n{}\n",
        catalog::WEEKDAYS.join(", ")
    );
    loop {
        let answer = next_answer(console, &question)?;
        if catalog::is_all(&answer) {
            return Ok(None);
        }
        if let Some(day) = catalog::match_weekday(&answer) {
            return Ok(Some(day));
        }
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn city_options() -> String {
    City::all().map(|city| city.name()).join(", ")
}

/// One answer, or [`ExplorerError::InputClosed`] when input is exhausted
/// while a prompt is still waiting.
fn next_answer<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    question: &str,
) -> Result<String> {
    console.ask(question)?.ok_or(ExplorerError::InputClosed)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
