//! Time configuration trait and implementations
//!
//! This module defines the TimeConfig trait that selects, at compile time, how
//! the calendar engine treats out-of-range input and counter overflow.

/// Behaviour when an epoch counter mutation leaves the `u32` range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OverflowPolicy {
    /// Modular `u32` arithmetic, no error reported
    Wrap,
    /// Leave the counter untouched and report `TimeError::RangeExceeded`
    Error,
}

/// Compile-time configuration for the calendar engine
///
/// The configuration travels as a phantom type parameter, so choosing a
/// stricter policy costs nothing at runtime.
pub trait TimeConfig {
    /// What add operations do when the counter would wrap
    const OVERFLOW_POLICY: OverflowPolicy;

    /// Whether encode rejects civil fields outside their calendar ranges
    const VALIDATE_FIELDS: bool;

    /// Returns true if both validation and overflow reporting are enabled
    fn is_strict() -> bool {
        Self::VALIDATE_FIELDS && matches!(Self::OVERFLOW_POLICY, OverflowPolicy::Error)
    }
}

/// Default configuration
///
/// Silent wraparound and no field validation: encode accepts any field values
/// and produces an arithmetically derived counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DefaultConfig;

impl TimeConfig for DefaultConfig {
    const OVERFLOW_POLICY: OverflowPolicy = OverflowPolicy::Wrap;
    const VALIDATE_FIELDS: bool = false;
}
