//! Configuration module for fintrack
//!
//! - Data file location resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::{DateClock, ExportFormat, Settings};
