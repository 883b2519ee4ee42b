//! Configuration module for timesphere
//!
//! Compile-time policies for field validation and counter overflow.

pub mod macros;
pub mod settings;

// Re-export main types
pub use macros::define_time_config;
pub use settings::{DefaultConfig, OverflowPolicy, TimeConfig};
