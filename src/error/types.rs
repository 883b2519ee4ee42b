//! Core error types for timesphere
//!
//! This module defines the main error types used throughout the library.

use core::fmt;

/// Calendar field that failed validation at the encode boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalendarField {
    /// Year before 1970
    Year,
    /// Month outside 1..=12
    Month,
    /// Day outside 1..=days_in_month
    Day,
    /// Hour outside 0..=23
    Hour,
    /// Minute outside 0..=59
    Minute,
    /// Second outside 0..=59
    Second,
}

impl CalendarField {
    /// Returns the field name as a string
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        }
    }
}

/// Main error type for time operations
///
/// The calendar engine itself never fails in its default configuration: these
/// variants surface only from the checked entry points, from configurations
/// that opt into validation, and from the fixed-capacity containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    // Calendar errors
    /// A civil field is outside its calendar range
    InvalidCalendarField(CalendarField),

    // Range errors
    /// The epoch counter would leave its representable range
    RangeExceeded,

    // Container errors
    /// Fixed capacity exhausted
    CapacityExceeded,
    /// Index past the end of the container
    IndexOutOfBounds,
}

impl TimeError {
    /// Returns true if this error was raised at the encode boundary
    pub const fn is_calendar_error(&self) -> bool {
        matches!(self, Self::InvalidCalendarField(_))
    }

    /// Returns the offending field for calendar errors
    pub const fn field(&self) -> Option<CalendarField> {
        match self {
            Self::InvalidCalendarField(field) => Some(*field),
            _ => None,
        }
    }

    /// Returns the error category as a string
    pub const fn category(&self) -> &'static str {
        match self {
            Self::InvalidCalendarField(_) => "Calendar",
            Self::RangeExceeded => "Range",
            Self::CapacityExceeded | Self::IndexOutOfBounds => "Container",
        }
    }
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCalendarField(field) => {
                write!(f, "invalid calendar field: {}", field.name())
            }
            Self::RangeExceeded => f.write_str("epoch counter range exceeded"),
            Self::CapacityExceeded => f.write_str("container capacity exceeded"),
            Self::IndexOutOfBounds => f.write_str("index out of bounds"),
        }
    }
}

/// Result type for time operations
pub type TimeResult<T> = Result<T, TimeError>;
