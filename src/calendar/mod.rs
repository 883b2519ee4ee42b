//! Calendar conversion module
//!
//! Proleptic Gregorian rules and the encode/decode engine between civil
//! fields and the 32-bit Unix epoch counter. UTC only, no time zones.

pub mod civil;
pub mod convert;
pub mod leap;

// Re-export main types
pub use civil::CivilDateTime;
pub use convert::{
    EPOCH_YEAR, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, checked_to_unix_time,
    from_unix_time, to_unix_time, try_to_unix_time,
};
pub use leap::{days_in_month, days_in_year, is_leap_year};
