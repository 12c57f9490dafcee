use chrono::{NaiveDateTime, Timelike};

use crate::catalog::{self, City};
use crate::time_utils;

// ── TripRecord ────────────────────────────────────────────────────────────────

/// A single bikeshare trip, as parsed from one CSV row.
///
/// The three derived fields are computed from `start_time` at construction
/// and never change afterwards, so they cannot drift out of step with it.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// When the trip started.
    pub start_time: NaiveDateTime,
    /// When the trip ended.
    pub end_time: NaiveDateTime,
    /// Trip length in seconds; a missing cell is coerced to `0.0` at load.
    pub duration_secs: f64,
    /// Station where the trip started.
    pub start_station: String,
    /// Station where the trip ended.
    pub end_station: String,
    /// Rider category (e.g. "Subscriber", "Customer"); may be empty.
    pub user_type: String,
    /// Rider gender, when the city publishes it and the cell is filled.
    pub gender: Option<String>,
    /// Rider birth year, when the city publishes it and the cell is filled.
    pub birth_year: Option<i32>,
    /// Full month name derived from `start_time` ("January" … "December").
    pub month_name: String,
    /// Full weekday name derived from `start_time` ("Sunday" … "Saturday").
    pub weekday_name: String,
    /// Hour of day (0–23) derived from `start_time`.
    pub start_hour: u32,
}

impl TripRecord {
    /// Build a record, deriving the month/weekday/hour columns from
    /// `start_time`.
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        duration_secs: f64,
        start_station: String,
        end_station: String,
        user_type: String,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        let month_name = time_utils::month_name(&start_time);
        let weekday_name = time_utils::weekday_name(&start_time);
        let start_hour = start_time.hour();
        Self {
            start_time,
            end_time,
            duration_secs,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
            month_name,
            weekday_name,
            start_hour,
        }
    }
}

// ── Dataset ───────────────────────────────────────────────────────────────────

/// All trips loaded for one city, plus the load-time column-presence flags.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Display name of the city the trips belong to.
    pub city: String,
    /// Trips in file order.
    pub trips: Vec<TripRecord>,
    /// Whether this city's file carries a Gender column.
    pub has_gender: bool,
    /// Whether this city's file carries a Birth Year column.
    pub has_birth_year: bool,
}

impl Dataset {
    /// Build a dataset for `city` from already-parsed trips.
    pub fn new(
        city: impl Into<String>,
        trips: Vec<TripRecord>,
        has_gender: bool,
        has_birth_year: bool,
    ) -> Self {
        Self {
            city: city.into(),
            trips,
            has_gender,
            has_birth_year,
        }
    }

    /// Number of trips.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Whether the dataset holds no trips.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// A new dataset restricted to the given month/day selections.
    ///
    /// `None` means no restriction for that column. Row order and the
    /// derived fields are preserved untouched.
    pub fn filtered(&self, month: Option<&str>, day: Option<&str>) -> Dataset {
        let trips = self
            .trips
            .iter()
            .filter(|trip| {
                month.map_or(true, |m| trip.month_name == m)
                    && day.map_or(true, |d| trip.weekday_name == d)
            })
            .cloned()
            .collect();
        Dataset {
            city: self.city.clone(),
            trips,
            has_gender: self.has_gender,
            has_birth_year: self.has_birth_year,
        }
    }
}

// ── TripFilters ───────────────────────────────────────────────────────────────

/// A validated set of session selections from the filter prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripFilters {
    /// Which city's file to load.
    pub city: City,
    /// Month restriction, or `None` for "All".
    pub month: Option<&'static str>,
    /// Weekday restriction, or `None` for "All".
    pub day: Option<&'static str>,
}

impl TripFilters {
    /// An unrestricted selection for `city`.
    pub fn unfiltered(city: City) -> Self {
        Self {
            city,
            month: None,
            day: None,
        }
    }

    /// The month selection as shown to the user ("All" when unrestricted).
    pub fn month_label(&self) -> &'static str {
        self.month.unwrap_or(catalog::ALL)
    }

    /// The day selection as shown to the user ("All" when unrestricted).
    pub fn day_label(&self) -> &'static str {
        self.day.unwrap_or(catalog::ALL)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
