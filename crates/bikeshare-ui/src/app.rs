//! The session loop: prompt for filters, load the city, preview, report,
//! and offer a restart.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;

use bikeshare_core::models::Dataset;
use bikeshare_core::Result;
use bikeshare_data::loader;
use bikeshare_data::stats::{DurationStats, StationStats, TimeStats, UserStats};

use crate::console::Console;
use crate::{preview, prompt, report};

pub struct App<R, W> {
    console: Console<R, W>,
    data_dir: PathBuf,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(input: R, output: W, data_dir: PathBuf) -> Self {
        Self {
            console: Console::new(input, output),
            data_dir,
        }
    }

    /// Run sessions until the user declines a restart.
    ///
    /// Prompt errors and load failures are fatal; a dataset the filters
    /// empty out is not, and still ends with the restart question.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.run_session()?;
            if !prompt::confirm_restart(&mut self.console)? {
                return Ok(());
            }
        }
    }

    fn run_session(&mut self) -> Result<()> {
        let filters = prompt::collect_filters(&mut self.console)?;
        let dataset = loader::load_filtered(&self.data_dir, filters)?;

        debug!(
            "Session: city={} month={} day={} rows={}",
            dataset.city,
            filters.month_label(),
            filters.day_label(),
            dataset.len()
        );

        if dataset.is_empty() {
            return report::no_matches(&mut self.console);
        }

        preview::run_preview(&mut self.console, &dataset, &filters)?;
        self.report_all(&dataset)
    }

    fn report_all(&mut self, dataset: &Dataset) -> Result<()> {
        let overall = Instant::now();

        let start = Instant::now();
        let times = TimeStats::compute(dataset);
        report::time_stats(&mut self.console, &times, start.elapsed())?;

        let start = Instant::now();
        let stations = StationStats::compute(dataset);
        report::station_stats(&mut self.console, &stations, start.elapsed())?;

        let start = Instant::now();
        let durations = DurationStats::compute(dataset);
        report::duration_stats(&mut self.console, &durations, start.elapsed())?;

        let start = Instant::now();
        let users = UserStats::compute(dataset);
        report::user_stats(&mut self.console, &users, start.elapsed())?;

        report::total_time(&mut self.console, overall.elapsed())
    }

    /// Give back the console, letting tests inspect the output.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
