//! Utility functions

pub mod time;

pub use time::{format_minutes, seconds_to_minutes};
