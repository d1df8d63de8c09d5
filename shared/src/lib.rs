//! Exercise Tracker Shared Library
//!
//! This crate contains the API types, input validation and date handling
//! shared by the backend and its tests.

pub mod dates;
pub mod errors;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use dates::{format_log_date, parse_calendar_date};
pub use errors::*;
pub use types::*;
