use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the Bikeshare Explorer.
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// A city CSV file could not be decoded.
    #[error("Malformed CSV data in {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A timestamp string did not match any recognised format.
    #[error("Invalid timestamp format: {0}")]
    TimestampParse(String),

    /// A city name string is not one of the recognised cities.
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    /// The expected city data file does not exist.
    #[error("Data file not found: {0}")]
    DataFileNotFound(PathBuf),

    /// Interactive input reached end-of-file while a prompt was waiting.
    #[error("Input stream closed while waiting for a response")]
    InputClosed,

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the explorer crates.
pub type Result<T> = std::result::Result<T, ExplorerError>;
