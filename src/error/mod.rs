//! Error handling module for timesphere
//!
//! This module provides the error types shared by the calendar engine, the
//! duration type and the fixed-capacity containers.

pub mod types;

// Re-export main types
pub use types::{CalendarField, TimeError, TimeResult};
