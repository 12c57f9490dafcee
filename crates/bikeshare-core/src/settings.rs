use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Interactive explorer for US bikeshare trip data
#[derive(Parser, Debug, Clone)]
#[command(
    name = "bikeshare-explorer",
    about = "Interactive explorer for US bikeshare trip data",
    version
)]
pub struct Settings {
    /// Directory holding the city CSV files
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse CLI arguments from the environment.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os().collect())
    }

    /// Same as [`load`](Self::load) but accepts an explicit argument list,
    /// enabling unit-testing without spawning subprocesses.
    pub fn load_from_args(args: Vec<std::ffi::OsString>) -> Self {
        let mut settings = Settings::parse_from(args);

        // --debug overrides log level.
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }

        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn load(args: &[&str]) -> Settings {
        let mut full = vec!["bikeshare-explorer".to_string()];
        full.extend(args.iter().map(|a| a.to_string()));
        Settings::load_from_args(full.into_iter().map(Into::into).collect())
    }

    // ── Defaults ──────────────────────────────────────────────────────────────

    #[test]
    fn test_defaults() {
        let settings = load(&[]);
        assert_eq!(settings.data_dir, PathBuf::from("."));
        assert_eq!(settings.log_level, "WARNING");
        assert!(!settings.debug);
    }

    // ── Explicit flags ────────────────────────────────────────────────────────

    #[test]
    fn test_data_dir_flag() {
        let settings = load(&["--data-dir", "/srv/bikeshare"]);
        assert_eq!(settings.data_dir, PathBuf::from("/srv/bikeshare"));
    }

    #[test]
    fn test_log_level_flag() {
        let settings = load(&["--log-level", "INFO"]);
        assert_eq!(settings.log_level, "INFO");
    }

    #[test]
    fn test_debug_overrides_log_level() {
        let settings = load(&["--log-level", "ERROR", "--debug"]);
        assert!(settings.debug);
        assert_eq!(settings.log_level, "DEBUG");
    }

    // ── Validation ────────────────────────────────────────────────────────────

    #[test]
    fn test_rejects_unknown_log_level() {
        let result = Settings::try_parse_from(["bikeshare-explorer", "--log-level", "VERBOSE"]);
        assert!(result.is_err());
    }
}
