//! Civil date and time fields

use core::fmt;

use crate::calendar::convert::{self, EPOCH_YEAR};
use crate::calendar::leap::days_in_month;
use crate::error::{CalendarField, TimeError, TimeResult};

/// Decoded view of an epoch counter
///
/// Field order gives chronological ordering, so the derived `Ord` compares
/// instants.
///
/// # Example
/// ```rust
/// use timesphere::calendar::CivilDateTime;
///
/// let civil = CivilDateTime::new(2023, 11, 14, 22, 13, 20);
/// assert_eq!(civil.to_unix_time(), 1_700_000_000);
/// assert_eq!(CivilDateTime::from_unix_time(1_700_000_000), civil);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CivilDateTime {
    /// Year, 1970 or later
    pub year: u16,
    /// Month, 1..=12
    pub month: u8,
    /// Day of the month, 1..=31
    pub day: u8,
    /// Hour, 0..=23
    pub hour: u8,
    /// Minute, 0..=59
    pub minute: u8,
    /// Second, 0..=59
    pub second: u8,
}

impl CivilDateTime {
    /// The epoch origin, 1970-01-01 00:00:00
    pub const EPOCH: Self = Self::new(EPOCH_YEAR, 1, 1, 0, 0, 0);

    /// Creates civil fields without validating them
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Creates civil fields, rejecting values outside their calendar ranges
    ///
    /// # Example
    /// ```rust
    /// use timesphere::calendar::CivilDateTime;
    /// use timesphere::error::{CalendarField, TimeError};
    ///
    /// assert!(CivilDateTime::checked(2024, 2, 29, 12, 0, 0).is_ok());
    /// assert_eq!(
    ///     CivilDateTime::checked(2023, 2, 29, 12, 0, 0),
    ///     Err(TimeError::InvalidCalendarField(CalendarField::Day))
    /// );
    /// ```
    pub fn checked(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> TimeResult<Self> {
        let civil = Self::new(year, month, day, hour, minute, second);
        civil.validate()?;
        Ok(civil)
    }

    /// Checks every field against its calendar range
    ///
    /// Fields are checked from year down to second; the first offender is
    /// reported.
    pub fn validate(&self) -> TimeResult<()> {
        if self.year < EPOCH_YEAR {
            return Err(TimeError::InvalidCalendarField(CalendarField::Year));
        }
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidCalendarField(CalendarField::Month));
        }
        if self.day == 0 || self.day > days_in_month(self.month, self.year as i32) {
            return Err(TimeError::InvalidCalendarField(CalendarField::Day));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidCalendarField(CalendarField::Hour));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidCalendarField(CalendarField::Minute));
        }
        if self.second > 59 {
            return Err(TimeError::InvalidCalendarField(CalendarField::Second));
        }
        Ok(())
    }

    /// Returns true if every field is within its calendar range
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Decodes an epoch counter
    pub fn from_unix_time(timestamp: u32) -> Self {
        convert::from_unix_time(timestamp)
    }

    /// Encodes these fields without validation, wrapping on overflow
    pub fn to_unix_time(&self) -> u32 {
        convert::to_unix_time(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// Encodes these fields, rejecting invalid fields and counter overflow
    pub fn try_to_unix_time(&self) -> TimeResult<u32> {
        convert::try_to_unix_time(self)
    }
}

impl Default for CivilDateTime {
    fn default() -> Self {
        Self::EPOCH
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
