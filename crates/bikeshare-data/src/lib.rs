//! Data access for the bikeshare explorer: CSV loading and the
//! per-session statistics computed from a loaded [`Dataset`].
//!
//! [`Dataset`]: bikeshare_core::models::Dataset

pub mod loader;
pub mod stats;

pub use bikeshare_core as core;
