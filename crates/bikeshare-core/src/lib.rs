//! Core domain types and pure logic for the Bikeshare Explorer.
//!
//! Houses the trip and dataset models, the city/month/weekday catalog,
//! frequency and mean primitives, duration formatting, timestamp parsing,
//! the shared error type, and the CLI settings used by every crate in the
//! workspace.

pub mod calculations;
pub mod catalog;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;

pub use error::{ExplorerError, Result};
