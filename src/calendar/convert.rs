//! Encode and decode between civil fields and the epoch counter
//!
//! Both directions scan year by year and then month by month from the epoch
//! origin. A `u32` counter spans 1970 to 2106, so decode finishes within 137
//! year steps and 12 month steps.

use crate::calendar::civil::CivilDateTime;
use crate::calendar::leap::{days_in_month, days_in_year};
use crate::error::{TimeError, TimeResult};

/// First year of the epoch
pub const EPOCH_YEAR: u16 = 1970;

/// Seconds in a minute
pub const SECONDS_PER_MINUTE: u32 = 60;

/// Seconds in an hour
pub const SECONDS_PER_HOUR: u32 = 3_600;

/// Seconds in a day
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Encodes civil fields as seconds since 1970-01-01 00:00:00
///
/// No validation: out-of-range fields yield an arithmetically derived counter
/// and overflow wraps modulo 2^32. Years before 1970 contribute no whole years.
///
/// # Example
/// ```rust
/// use timesphere::calendar::to_unix_time;
/// assert_eq!(to_unix_time(2023, 1, 1, 0, 0, 0), 1_672_531_200);
/// ```
pub fn to_unix_time(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> u32 {
    let mut days: u32 = 0;

    for y in EPOCH_YEAR..year {
        days = days.wrapping_add(days_in_year(y as i32) as u32);
    }

    for m in 1..month {
        days = days.wrapping_add(days_in_month(m, year as i32) as u32);
    }

    // day 0 steps back into the previous month
    days = days.wrapping_add(day as u32).wrapping_sub(1);

    days.wrapping_mul(SECONDS_PER_DAY)
        .wrapping_add(hour as u32 * SECONDS_PER_HOUR)
        .wrapping_add(minute as u32 * SECONDS_PER_MINUTE)
        .wrapping_add(second as u32)
}

/// Encodes civil fields after validating them
///
/// # Errors
/// - `TimeError::InvalidCalendarField` for the first field outside its range
/// - `TimeError::RangeExceeded` for instants after 2106-02-07 06:28:15
pub fn try_to_unix_time(civil: &CivilDateTime) -> TimeResult<u32> {
    civil.validate()?;
    checked_to_unix_time(civil)
}

/// Encodes civil fields without validation, reporting overflow
///
/// Same arithmetic as [`to_unix_time`], but a result outside the `u32` range
/// (including the one second before the epoch reached through day 0) is
/// reported instead of wrapped.
///
/// # Errors
/// `TimeError::RangeExceeded` when the result does not fit the counter.
pub fn checked_to_unix_time(civil: &CivilDateTime) -> TimeResult<u32> {
    let mut days: i64 = 0;
    for y in EPOCH_YEAR..civil.year {
        days += days_in_year(y as i32) as i64;
    }
    for m in 1..civil.month {
        days += days_in_month(m, civil.year as i32) as i64;
    }
    days += civil.day as i64 - 1;

    let seconds = days * SECONDS_PER_DAY as i64
        + civil.hour as i64 * SECONDS_PER_HOUR as i64
        + civil.minute as i64 * SECONDS_PER_MINUTE as i64
        + civil.second as i64;

    u32::try_from(seconds).map_err(|_| TimeError::RangeExceeded)
}

/// Decodes seconds since 1970-01-01 00:00:00 into civil fields
///
/// Total over `u32`.
///
/// # Example
/// ```rust
/// use timesphere::calendar::{from_unix_time, CivilDateTime};
/// assert_eq!(
///     from_unix_time(1_700_000_000),
///     CivilDateTime::new(2023, 11, 14, 22, 13, 20)
/// );
/// ```
pub fn from_unix_time(timestamp: u32) -> CivilDateTime {
    let mut remaining = timestamp;

    let mut year = EPOCH_YEAR;
    loop {
        let seconds_in_year = days_in_year(year as i32) as u32 * SECONDS_PER_DAY;
        if remaining < seconds_in_year {
            break;
        }
        remaining -= seconds_in_year;
        year += 1;
    }

    let mut month: u8 = 1;
    loop {
        let seconds_in_month = days_in_month(month, year as i32) as u32 * SECONDS_PER_DAY;
        if remaining < seconds_in_month {
            break;
        }
        remaining -= seconds_in_month;
        month += 1;
    }

    let day = (remaining / SECONDS_PER_DAY) as u8 + 1;
    remaining %= SECONDS_PER_DAY;

    let hour = (remaining / SECONDS_PER_HOUR) as u8;
    remaining %= SECONDS_PER_HOUR;

    CivilDateTime::new(
        year,
        month,
        day,
        hour,
        (remaining / SECONDS_PER_MINUTE) as u8,
        (remaining % SECONDS_PER_MINUTE) as u8,
    )
}
