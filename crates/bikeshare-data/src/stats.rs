//! Statistics computed over a filtered [`Dataset`], one struct per report
//! section. Every field is optional where the underlying statistic can be
//! undefined, so the presentation layer decides what to leave out.
//!
//! [`Dataset`]: bikeshare_core::models::Dataset

use std::collections::HashSet;

use bikeshare_core::calculations::{mean_of_positive, mode, value_counts};
use bikeshare_core::models::Dataset;

/// Separator between the two station names of a trip, used when tallying
/// the most frequent start/end combination.
pub const PAIR_SEPARATOR: &str = " // ";

// ── TimeStats ─────────────────────────────────────────────────────────────────

/// Most frequent travel times.
///
/// Month and weekday are only reported when the dataset spans more than one
/// distinct value; under a month or day filter the answer is the filter
/// itself and not worth repeating.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    pub most_common_month: Option<String>,
    pub most_common_weekday: Option<String>,
    pub most_common_hour: Option<u32>,
}

impl TimeStats {
    pub fn compute(dataset: &Dataset) -> Self {
        let distinct_months: HashSet<&str> = dataset
            .trips
            .iter()
            .map(|t| t.month_name.as_str())
            .collect();
        let most_common_month = if distinct_months.len() > 1 {
            mode(dataset.trips.iter().map(|t| t.month_name.as_str())).map(String::from)
        } else {
            None
        };

        let distinct_weekdays: HashSet<&str> = dataset
            .trips
            .iter()
            .map(|t| t.weekday_name.as_str())
            .collect();
        let most_common_weekday = if distinct_weekdays.len() > 1 {
            mode(dataset.trips.iter().map(|t| t.weekday_name.as_str())).map(String::from)
        } else {
            None
        };

        let most_common_hour = mode(dataset.trips.iter().map(|t| &t.start_hour)).copied();

        Self {
            most_common_month,
            most_common_weekday,
            most_common_hour,
        }
    }
}

// ── StationStats ──────────────────────────────────────────────────────────────

/// Most popular stations and start/end combination.
#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub most_common_start: Option<String>,
    pub most_common_end: Option<String>,
    /// Both station names joined by [`PAIR_SEPARATOR`].
    pub most_common_pair: Option<String>,
}

impl StationStats {
    pub fn compute(dataset: &Dataset) -> Self {
        let most_common_start =
            mode(dataset.trips.iter().map(|t| t.start_station.as_str())).map(String::from);
        let most_common_end =
            mode(dataset.trips.iter().map(|t| t.end_station.as_str())).map(String::from);

        let pairs: Vec<String> = dataset
            .trips
            .iter()
            .map(|t| format!("{}{}{}", t.start_station, PAIR_SEPARATOR, t.end_station))
            .collect();
        let most_common_pair = mode(pairs.iter().map(String::as_str)).map(String::from);

        Self {
            most_common_start,
            most_common_end,
            most_common_pair,
        }
    }
}

// ── DurationStats ─────────────────────────────────────────────────────────────

/// Total and average trip length.
///
/// The total includes zero-duration rows; the mean excludes them, since a
/// zero stands for a missing cell rather than an instantaneous trip.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total_secs: f64,
    pub mean_positive_secs: Option<f64>,
}

impl DurationStats {
    pub fn compute(dataset: &Dataset) -> Self {
        let total_secs = dataset.trips.iter().map(|t| t.duration_secs).sum();
        let mean_positive_secs = mean_of_positive(dataset.trips.iter().map(|t| t.duration_secs));

        Self {
            total_secs,
            mean_positive_secs,
        }
    }
}

// ── UserStats ─────────────────────────────────────────────────────────────────

/// Rider demographics. Gender and birth-year sections exist only for cities
/// whose files carry those columns.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    /// Counts per user type, descending; empty cells are excluded.
    pub user_type_counts: Vec<(String, u64)>,
    /// Counts per gender, descending, for cities that publish it.
    pub gender_counts: Option<Vec<(String, u64)>>,
    /// Birth-year extremes and mode, for cities that publish them.
    pub birth_years: Option<BirthYearStats>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

impl UserStats {
    pub fn compute(dataset: &Dataset) -> Self {
        let user_type_counts = owned_counts(
            dataset
                .trips
                .iter()
                .map(|t| t.user_type.as_str())
                .filter(|t| !t.is_empty()),
        );

        let gender_counts = if dataset.has_gender {
            Some(owned_counts(
                dataset.trips.iter().filter_map(|t| t.gender.as_deref()),
            ))
        } else {
            None
        };

        let birth_years = if dataset.has_birth_year {
            birth_year_stats(dataset)
        } else {
            None
        };

        Self {
            user_type_counts,
            gender_counts,
            birth_years,
        }
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn owned_counts<'a, I>(values: I) -> Vec<(String, u64)>
where
    I: IntoIterator<Item = &'a str>,
{
    value_counts(values)
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect()
}

/// Birth-year extremes and mode, or `None` when every cell is empty.
///
/// Only strictly-positive years count; zero or negative values are data
/// entry noise.
fn birth_year_stats(dataset: &Dataset) -> Option<BirthYearStats> {
    let years: Vec<i32> = dataset
        .trips
        .iter()
        .filter_map(|t| t.birth_year)
        .filter(|y| *y > 0)
        .collect();
    let earliest = *years.iter().min()?;
    let most_recent = *years.iter().max()?;
    let most_common = *mode(years.iter())?;

    Some(BirthYearStats {
        earliest,
        most_recent,
        most_common,
    })
}

// ── Tests ──────────────────────────────────────────────────────────────────────
