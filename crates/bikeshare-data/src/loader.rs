//! CSV loading for the bikeshare explorer.
//!
//! Reads a city's trip file from the data directory and converts each row
//! into a [`TripRecord`], deriving the month/weekday/hour columns once at
//! load time so every downstream consumer sees the same values.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use bikeshare_core::catalog::City;
use bikeshare_core::models::{Dataset, TripFilters, TripRecord};
use bikeshare_core::time_utils;
use bikeshare_core::{ExplorerError, Result};

// ── Raw CSV row ───────────────────────────────────────────────────────────────

/// One row as it appears on disk, before timestamps are parsed.
///
/// The files carry an unnamed leading index column, which deserialization
/// by header name skips. Gender and Birth Year default to `None` for cities
/// that do not publish them.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: Option<f64>,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every trip for `city` from `data_dir`.
///
/// The header row decides the dataset's Gender / Birth Year flags. Any
/// unreadable row or unparseable timestamp aborts the load; trip files are
/// machine-generated, so a malformed row means the file itself is suspect.
pub fn load_city(data_dir: &Path, city: City) -> Result<Dataset> {
    let path = data_dir.join(city.file_name());
    if !path.exists() {
        return Err(ExplorerError::DataFileNotFound(path));
    }

    let mut reader = csv::Reader::from_path(&path).map_err(|e| csv_error(&path, e))?;
    let headers = reader.headers().map_err(|e| csv_error(&path, e))?.clone();
    let has_gender = headers.iter().any(|h| h == "Gender");
    let has_birth_year = headers.iter().any(|h| h == "Birth Year");

    let mut trips: Vec<TripRecord> = Vec::new();
    for row in reader.deserialize() {
        let raw: RawTrip = row.map_err(|e| csv_error(&path, e))?;
        trips.push(into_record(raw)?);
    }

    debug!("Loaded {} trips from {}", trips.len(), path.display());

    Ok(Dataset::new(city.name(), trips, has_gender, has_birth_year))
}

/// Load `filters.city` and restrict the result to the selected month/day.
pub fn load_filtered(data_dir: &Path, filters: TripFilters) -> Result<Dataset> {
    let dataset = load_city(data_dir, filters.city)?;
    let filtered = dataset.filtered(filters.month, filters.day);

    debug!(
        "Filter month={} day={} kept {} of {} trips",
        filters.month_label(),
        filters.day_label(),
        filtered.len(),
        dataset.len()
    );

    Ok(filtered)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn csv_error(path: &Path, source: csv::Error) -> ExplorerError {
    ExplorerError::CsvParse {
        path: path.to_path_buf(),
        source,
    }
}

/// Parse the timestamp columns and fill the derived fields.
///
/// A missing duration cell becomes `0.0`, a missing User Type cell an empty
/// string; both keep the row countable without inventing data for it.
fn into_record(raw: RawTrip) -> Result<TripRecord> {
    let start_time = time_utils::parse_timestamp(&raw.start_time)?;
    let end_time = time_utils::parse_timestamp(&raw.end_time)?;

    Ok(TripRecord::new(
        start_time,
        end_time,
        raw.trip_duration.unwrap_or(0.0),
        raw.start_station,
        raw.end_station,
        raw.user_type.unwrap_or_default(),
        raw.gender,
        raw.birth_year.map(|y| y as i32),
    ))
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // ── Helpers ───────────────────────────────────────────────────────────────

    const FULL_HEADER: &str =
        ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year";
    const SLIM_HEADER: &str =
        ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type";

    /// Write `name` under `dir` with the given header and data rows.
    fn write_csv(dir: &Path, name: &str, header: &str, rows: &[&str]) -> PathBuf {
        let path = dir.join(name);
        let mut content = String::from(header);
        content.push('\n');
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        std::fs::write(&path, content).expect("write csv");
        path
    }

    fn chicago_fixture(dir: &Path) {
        write_csv(
            dir,
            "chicago.csv",
            FULL_HEADER,
            &[
                "0,2017-01-01 00:07:57,2017-01-01 00:20:53,776,Clark St,State St,Subscriber,Male,1992.0",
                "1,2017-02-14 09:15:00,2017-02-14 09:30:00,900,State St,Clark St,Customer,Female,1985.0",
                "2,2017-01-08 10:00:00,2017-01-08 10:05:00,300,Lake Shore Dr,Clark St,Subscriber,,",
            ],
        );
    }

    // ── load_city ─────────────────────────────────────────────────────────────

    #[test]
    fn test_load_city_parses_rows_and_derived_columns() {
        let tmp = TempDir::new().expect("tempdir");
        chicago_fixture(tmp.path());

        let dataset = load_city(tmp.path(), City::Chicago).expect("load");

        assert_eq!(dataset.city, "Chicago");
        assert_eq!(dataset.len(), 3);

        // 2017-01-01 was a Sunday.
        let first = &dataset.trips[0];
        assert_eq!(first.month_name, "January");
        assert_eq!(first.weekday_name, "Sunday");
        assert_eq!(first.start_hour, 0);
        assert_eq!(first.duration_secs, 776.0);
        assert_eq!(first.start_station, "Clark St");
        assert_eq!(first.end_station, "State St");
        assert_eq!(first.user_type, "Subscriber");
        assert_eq!(first.gender.as_deref(), Some("Male"));
        assert_eq!(first.birth_year, Some(1992));
    }

    #[test]
    fn test_load_city_detects_optional_columns() {
        let tmp = TempDir::new().expect("tempdir");
        chicago_fixture(tmp.path());

        let dataset = load_city(tmp.path(), City::Chicago).expect("load");
        assert!(dataset.has_gender);
        assert!(dataset.has_birth_year);
    }

    #[test]
    fn test_load_city_without_optional_columns() {
        let tmp = TempDir::new().expect("tempdir");
        write_csv(
            tmp.path(),
            "washington.csv",
            SLIM_HEADER,
            &["0,2017-03-15 08:00:00,2017-03-15 08:30:00,1800,14th St,K St,Subscriber"],
        );

        let dataset = load_city(tmp.path(), City::Washington).expect("load");
        assert!(!dataset.has_gender);
        assert!(!dataset.has_birth_year);
        assert_eq!(dataset.trips[0].gender, None);
        assert_eq!(dataset.trips[0].birth_year, None);
    }

    #[test]
    fn test_load_city_empty_optional_cells_are_none() {
        let tmp = TempDir::new().expect("tempdir");
        chicago_fixture(tmp.path());

        let dataset = load_city(tmp.path(), City::Chicago).expect("load");
        let third = &dataset.trips[2];
        assert_eq!(third.gender, None);
        assert_eq!(third.birth_year, None);
    }

    #[test]
    fn test_load_city_empty_duration_becomes_zero() {
        let tmp = TempDir::new().expect("tempdir");
        write_csv(
            tmp.path(),
            "chicago.csv",
            FULL_HEADER,
            &["0,2017-01-01 00:07:57,2017-01-01 00:20:53,,Clark St,State St,Subscriber,Male,1992.0"],
        );

        let dataset = load_city(tmp.path(), City::Chicago).expect("load");
        assert_eq!(dataset.trips[0].duration_secs, 0.0);
    }

    #[test]
    fn test_load_city_missing_file() {
        let tmp = TempDir::new().expect("tempdir");

        let err = load_city(tmp.path(), City::NewYorkCity).unwrap_err();
        match err {
            ExplorerError::DataFileNotFound(path) => {
                assert!(path.ends_with("new_york_city.csv"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_city_bad_timestamp_is_fatal() {
        let tmp = TempDir::new().expect("tempdir");
        write_csv(
            tmp.path(),
            "chicago.csv",
            FULL_HEADER,
            &["0,yesterday at noon,2017-01-01 00:20:53,776,Clark St,State St,Subscriber,Male,1992.0"],
        );

        let err = load_city(tmp.path(), City::Chicago).unwrap_err();
        assert!(matches!(err, ExplorerError::TimestampParse(_)));
        assert!(err.to_string().contains("yesterday at noon"));
    }

    #[test]
    fn test_load_city_ragged_row_is_fatal() {
        let tmp = TempDir::new().expect("tempdir");
        write_csv(
            tmp.path(),
            "chicago.csv",
            FULL_HEADER,
            &["0,2017-01-01 00:07:57,2017-01-01 00:20:53,776"],
        );

        let err = load_city(tmp.path(), City::Chicago).unwrap_err();
        assert!(matches!(err, ExplorerError::CsvParse { .. }));
    }

    #[test]
    fn test_load_city_preserves_row_order() {
        let tmp = TempDir::new().expect("tempdir");
        chicago_fixture(tmp.path());

        let dataset = load_city(tmp.path(), City::Chicago).expect("load");
        let durations: Vec<f64> = dataset.trips.iter().map(|t| t.duration_secs).collect();
        assert_eq!(durations, vec![776.0, 900.0, 300.0]);
    }

    // ── load_filtered ─────────────────────────────────────────────────────────

    #[test]
    fn test_load_filtered_unrestricted_keeps_everything() {
        let tmp = TempDir::new().expect("tempdir");
        chicago_fixture(tmp.path());

        let filters = TripFilters::unfiltered(City::Chicago);
        let dataset = load_filtered(tmp.path(), filters).expect("load");
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn test_load_filtered_by_month_and_day() {
        let tmp = TempDir::new().expect("tempdir");
        chicago_fixture(tmp.path());

        // Both January rows fall on Sundays; only they survive.
        let filters = TripFilters {
            city: City::Chicago,
            month: Some("January"),
            day: Some("Sunday"),
        };
        let dataset = load_filtered(tmp.path(), filters).expect("load");
        assert_eq!(dataset.len(), 2);
        assert!(dataset.trips.iter().all(|t| t.month_name == "January"));
    }

    #[test]
    fn test_load_filtered_can_return_empty_dataset() {
        let tmp = TempDir::new().expect("tempdir");
        chicago_fixture(tmp.path());

        let filters = TripFilters {
            city: City::Chicago,
            month: Some("June"),
            day: None,
        };
        let dataset = load_filtered(tmp.path(), filters).expect("load");
        assert!(dataset.is_empty());
    }
}
