use std::str::FromStr;

use crate::error::{ExplorerError, Result};

/// The three cities with published trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl FromStr for City {
    type Err = ExplorerError;

    /// Case-insensitive construction from a string slice.
    ///
    /// Accepts `"chicago"`, `"new york city"`, and `"washington"` in any
    /// casing. Returns [`ExplorerError::UnknownCity`] for anything else.
    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "chicago" => Ok(City::Chicago),
            "new york city" => Ok(City::NewYorkCity),
            "washington" => Ok(City::Washington),
            other => Err(ExplorerError::UnknownCity(other.to_string())),
        }
    }
}

impl City {
    /// The canonical display name for this city.
    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// The CSV file holding this city's trips.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// All cities in prompt order.
    pub fn all() -> [City; 3] {
        [City::Chicago, City::NewYorkCity, City::Washington]
    }
}

// ── Selection vocabulary ──────────────────────────────────────────────────────

/// Month names covered by the published datasets (first half of the year).
pub const MONTHS: &[&str] = &["January", "February", "March", "April", "May", "June"];

/// Weekday names in prompt order.
pub const WEEKDAYS: &[&str] = &[
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// The selection answer meaning "no filter".
pub const ALL: &str = "All";

/// Whether `input` spells the "no filter" answer, in any casing.
pub fn is_all(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(ALL)
}

/// Match free-form input against [`MONTHS`], returning the canonical
/// title-case name, or `None` when nothing matches.
pub fn match_month(input: &str) -> Option<&'static str> {
    match_choice(input, MONTHS)
}

/// Match free-form input against [`WEEKDAYS`], returning the canonical
/// title-case name, or `None` when nothing matches.
pub fn match_weekday(input: &str) -> Option<&'static str> {
    match_choice(input, WEEKDAYS)
}

fn match_choice(input: &str, choices: &'static [&'static str]) -> Option<&'static str> {
    let trimmed = input.trim();
    choices
        .iter()
        .copied()
        .find(|choice| choice.eq_ignore_ascii_case(trimmed))
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── City::from_str (via std::str::FromStr) ─────────────────────────────

    #[test]
    fn test_city_from_str_all_valid() {
        assert_eq!("chicago".parse::<City>().unwrap(), City::Chicago);
        assert_eq!("CHICAGO".parse::<City>().unwrap(), City::Chicago);
        assert_eq!("Chicago".parse::<City>().unwrap(), City::Chicago);

        assert_eq!("new york city".parse::<City>().unwrap(), City::NewYorkCity);
        assert_eq!("New York City".parse::<City>().unwrap(), City::NewYorkCity);
        assert_eq!("NEW YORK CITY".parse::<City>().unwrap(), City::NewYorkCity);

        assert_eq!("washington".parse::<City>().unwrap(), City::Washington);
        assert_eq!("Washington".parse::<City>().unwrap(), City::Washington);
    }

    #[test]
    fn test_city_from_str_trims_whitespace() {
        assert_eq!("  chicago ".parse::<City>().unwrap(), City::Chicago);
    }

    #[test]
    fn test_city_from_str_invalid() {
        let err = "springfield".parse::<City>().unwrap_err();
        assert!(matches!(err, ExplorerError::UnknownCity(_)));
        assert!(err.to_string().contains("springfield"));
    }

    #[test]
    fn test_city_from_str_empty() {
        let err = "".parse::<City>().unwrap_err();
        assert!(matches!(err, ExplorerError::UnknownCity(_)));
    }

    // ── City accessors ─────────────────────────────────────────────────────

    #[test]
    fn test_city_names() {
        assert_eq!(City::Chicago.name(), "Chicago");
        assert_eq!(City::NewYorkCity.name(), "New York City");
        assert_eq!(City::Washington.name(), "Washington");
    }

    #[test]
    fn test_city_file_names() {
        assert_eq!(City::Chicago.file_name(), "chicago.csv");
        assert_eq!(City::NewYorkCity.file_name(), "new_york_city.csv");
        assert_eq!(City::Washington.file_name(), "washington.csv");
    }

    #[test]
    fn test_city_all_round_trips_through_from_str() {
        for city in City::all() {
            assert_eq!(city.name().parse::<City>().unwrap(), city);
        }
    }

    // ── Month / weekday matching ───────────────────────────────────────────

    #[test]
    fn test_match_month_case_insensitive() {
        assert_eq!(match_month("january"), Some("January"));
        assert_eq!(match_month("MARCH"), Some("March"));
        assert_eq!(match_month("June"), Some("June"));
    }

    #[test]
    fn test_match_month_trims_whitespace() {
        assert_eq!(match_month("  april "), Some("April"));
    }

    #[test]
    fn test_match_month_rejects_unlisted() {
        // The datasets stop at June; later months are not offered.
        assert_eq!(match_month("July"), None);
        assert_eq!(match_month("December"), None);
        assert_eq!(match_month("not a month"), None);
        assert_eq!(match_month(""), None);
    }

    #[test]
    fn test_match_weekday_case_insensitive() {
        assert_eq!(match_weekday("sunday"), Some("Sunday"));
        assert_eq!(match_weekday("FRIDAY"), Some("Friday"));
        assert_eq!(match_weekday("Wednesday"), Some("Wednesday"));
    }

    #[test]
    fn test_match_weekday_rejects_unlisted() {
        assert_eq!(match_weekday("Someday"), None);
        assert_eq!(match_weekday(""), None);
    }

    #[test]
    fn test_weekdays_run_sunday_through_saturday() {
        assert_eq!(WEEKDAYS.first(), Some(&"Sunday"));
        assert_eq!(WEEKDAYS.last(), Some(&"Saturday"));
        assert_eq!(WEEKDAYS.len(), 7);
    }

    #[test]
    fn test_months_run_january_through_june() {
        assert_eq!(MONTHS.first(), Some(&"January"));
        assert_eq!(MONTHS.last(), Some(&"June"));
        assert_eq!(MONTHS.len(), 6);
    }

    // ── is_all ─────────────────────────────────────────────────────────────

    #[test]
    fn test_is_all_any_casing() {
        assert!(is_all("All"));
        assert!(is_all("all"));
        assert!(is_all("ALL"));
        assert!(is_all(" all "));
    }

    #[test]
    fn test_is_all_rejects_other_answers() {
        assert!(!is_all("everything"));
        assert!(!is_all(""));
    }
}
