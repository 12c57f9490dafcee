//! Interactive terminal front end for the bikeshare explorer: the prompt
//! flow, raw-data preview, statistics reports, and the session loop tying
//! them together.

pub mod app;
pub mod console;
pub mod preview;
pub mod prompt;
pub mod report;

pub use bikeshare_core as core;
