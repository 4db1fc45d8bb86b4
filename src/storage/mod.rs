//! Storage layer for fintrack
//!
//! JSON file storage with atomic writes and a lenient loader.

pub mod file_io;

pub use file_io::{read_json_lenient, write_json_atomic, LoadOutcome};
