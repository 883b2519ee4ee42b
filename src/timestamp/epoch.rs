//! Unix timestamp with in-place calendar arithmetic
//!
//! A single `u32` epoch counter plus the configuration that decides how it
//! reacts to invalid fields and overflow.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::calendar::{
    CivilDateTime, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, checked_to_unix_time,
    from_unix_time,
};
use crate::config::{DefaultConfig, OverflowPolicy, TimeConfig};
use crate::duration::{Duration, TimeUnit};
use crate::error::{TimeError, TimeResult};
use crate::timestamp::text::TimestampText;
use crate::logging::{log_debug, log_trace, log_warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seconds since 1970-01-01 00:00:00 UTC
///
/// # Type Parameters
/// - `C`: Time configuration selecting field validation and overflow behaviour
///   (defaults to [`DefaultConfig`]: no validation, silent wraparound)
///
/// # Memory Usage
/// - 4 bytes, the configuration is zero-sized
///
/// # Example
/// ```rust
/// use timesphere::prelude::*;
///
/// let mut ts = Timestamp::<DefaultConfig>::new();
/// ts.set_time(2023, 1, 1, 0, 0, 0)?;
/// assert_eq!(ts.unix_time(), 1_672_531_200);
///
/// ts.add_days(1)?;
/// assert_eq!(ts.to_text().as_str(), "2023-01-02 00:00:00");
/// assert!(ts.is_expired(1_700_000_000));
/// # Ok::<(), timesphere::error::TimeError>(())
/// ```
pub struct Timestamp<C: TimeConfig = DefaultConfig> {
    /// Epoch counter
    seconds: u32,

    /// Phantom data to maintain the time config type
    _config: PhantomData<C>,
}

impl<C: TimeConfig> Timestamp<C> {
    /// Creates a timestamp at the epoch origin
    pub const fn new() -> Self {
        Self::from_unix_time(0)
    }

    /// Creates a timestamp from a raw epoch counter
    pub const fn from_unix_time(seconds: u32) -> Self {
        Self {
            seconds,
            _config: PhantomData,
        }
    }

    /// Creates a timestamp from civil fields
    ///
    /// # Errors
    /// Same as [`Timestamp::set_civil`].
    pub fn from_civil(civil: &CivilDateTime) -> TimeResult<Self> {
        let mut ts = Self::new();
        ts.set_civil(civil)?;
        Ok(ts)
    }

    /// Sets the counter from civil fields
    ///
    /// # Errors
    /// See [`Timestamp::set_civil`]. Never fails under [`DefaultConfig`].
    pub fn set_time(
        &mut self,
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> TimeResult<()> {
        self.set_civil(&CivilDateTime::new(year, month, day, hour, minute, second))
    }

    /// Sets the counter from civil fields
    ///
    /// With `VALIDATE_FIELDS` the fields are checked first. The encode then
    /// wraps or reports overflow according to `OVERFLOW_POLICY`. On error the
    /// stored counter is unchanged.
    ///
    /// # Errors
    /// - `TimeError::InvalidCalendarField` if validation is enabled and a
    ///   field is out of range
    /// - `TimeError::RangeExceeded` under `OverflowPolicy::Error` for
    ///   instants outside the counter's range
    pub fn set_civil(&mut self, civil: &CivilDateTime) -> TimeResult<()> {
        if C::VALIDATE_FIELDS {
            if let Err(error) = civil.validate() {
                log_warn!("rejected civil fields: {}", error);
                return Err(error);
            }
        }

        self.seconds = match C::OVERFLOW_POLICY {
            OverflowPolicy::Wrap => civil.to_unix_time(),
            OverflowPolicy::Error => checked_to_unix_time(civil).inspect_err(|error| {
                log_warn!("civil fields outside counter range: {}", error);
            })?,
        };

        log_trace!("timestamp set to {}", self.seconds);
        Ok(())
    }

    /// Returns the raw epoch counter
    pub const fn unix_time(&self) -> u32 {
        self.seconds
    }

    /// Decodes the counter into civil fields
    pub fn civil(&self) -> CivilDateTime {
        from_unix_time(self.seconds)
    }

    /// Adds `seconds` to the counter; negative values subtract
    ///
    /// # Errors
    /// `TimeError::RangeExceeded` under `OverflowPolicy::Error` when the
    /// counter would leave `0..=u32::MAX`.
    pub fn add_seconds(&mut self, seconds: i32) -> TimeResult<()> {
        self.offset(seconds as i64)
    }

    /// Adds `minutes` to the counter; negative values subtract
    ///
    /// # Errors
    /// See [`Timestamp::add_seconds`].
    pub fn add_minutes(&mut self, minutes: i32) -> TimeResult<()> {
        self.offset(minutes as i64 * SECONDS_PER_MINUTE as i64)
    }

    /// Adds `hours` to the counter; negative values subtract
    ///
    /// # Errors
    /// See [`Timestamp::add_seconds`].
    pub fn add_hours(&mut self, hours: i32) -> TimeResult<()> {
        self.offset(hours as i64 * SECONDS_PER_HOUR as i64)
    }

    /// Adds `days` to the counter; negative values subtract
    ///
    /// # Errors
    /// See [`Timestamp::add_seconds`].
    pub fn add_days(&mut self, days: i32) -> TimeResult<()> {
        self.offset(days as i64 * SECONDS_PER_DAY as i64)
    }

    /// Adds the whole seconds of `duration`; the sub-second part is dropped
    ///
    /// # Errors
    /// See [`Timestamp::add_seconds`].
    pub fn add_duration(&mut self, duration: Duration) -> TimeResult<()> {
        self.offset(duration.get(TimeUnit::Seconds))
    }

    fn offset(&mut self, delta: i64) -> TimeResult<()> {
        match C::OVERFLOW_POLICY {
            // truncating the delta keeps the sum correct modulo 2^32
            OverflowPolicy::Wrap => {
                let wrapped = self.seconds.wrapping_add(delta as u32);
                if (self.seconds as i64).checked_add(delta) != Some(wrapped as i64) {
                    log_debug!("offset {} from {} wrapped to {}", delta, self.seconds, wrapped);
                }
                self.seconds = wrapped;
                Ok(())
            }
            OverflowPolicy::Error => {
                let target = (self.seconds as i64)
                    .checked_add(delta)
                    .and_then(|target| u32::try_from(target).ok());

                match target {
                    Some(seconds) => {
                        self.seconds = seconds;
                        Ok(())
                    }
                    None => {
                        log_warn!("offset {} from {} leaves counter range", delta, self.seconds);
                        Err(TimeError::RangeExceeded)
                    }
                }
            }
        }
    }

    /// Returns true if this instant is strictly before `current`
    pub const fn is_expired(&self, current: u32) -> bool {
        self.seconds < current
    }

    /// Returns true if this instant is strictly before `now`
    pub const fn is_expired_at(&self, now: &Self) -> bool {
        self.is_expired(now.seconds)
    }

    /// Signed span from `earlier` to `self`
    pub const fn duration_since(&self, earlier: &Self) -> Duration {
        Duration::seconds(self.seconds as i64 - earlier.seconds as i64)
    }

    /// Renders `YYYY-MM-DD HH:MM:SS` without allocating
    pub fn to_text(&self) -> TimestampText {
        TimestampText::new(&self.civil())
    }
}

impl<C: TimeConfig> Default for Timestamp<C> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impls: derives would demand the same traits from the config marker
impl<C: TimeConfig> Clone for Timestamp<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: TimeConfig> Copy for Timestamp<C> {}

impl<C: TimeConfig> PartialEq for Timestamp<C> {
    fn eq(&self, other: &Self) -> bool {
        self.seconds == other.seconds
    }
}

impl<C: TimeConfig> Eq for Timestamp<C> {}

impl<C: TimeConfig> PartialOrd for Timestamp<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: TimeConfig> Ord for Timestamp<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.seconds.cmp(&other.seconds)
    }
}

impl<C: TimeConfig> Hash for Timestamp<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.seconds.hash(state);
    }
}

impl<C: TimeConfig> fmt::Debug for Timestamp<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Timestamp").field(&self.seconds).finish()
    }
}

impl<C: TimeConfig> fmt::Display for Timestamp<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.civil(), f)
    }
}

impl<C: TimeConfig> From<u32> for Timestamp<C> {
    fn from(seconds: u32) -> Self {
        Self::from_unix_time(seconds)
    }
}

impl<C: TimeConfig> From<Timestamp<C>> for u32 {
    fn from(ts: Timestamp<C>) -> Self {
        ts.seconds
    }
}

#[cfg(feature = "defmt")]
impl<C: TimeConfig> defmt::Format for Timestamp<C> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Timestamp({=u32})", self.seconds);
    }
}

// Serialized as the bare counter so the wire form is independent of the config
#[cfg(feature = "serde")]
impl<C: TimeConfig> Serialize for Timestamp<C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.seconds)
    }
}

#[cfg(feature = "serde")]
impl<'de, C: TimeConfig> Deserialize<'de> for Timestamp<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u32::deserialize(deserializer).map(Self::from_unix_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::{RtcConfig, StrictConfig};
    use crate::error::CalendarField;

    #[test]
    fn test_new_timestamp() {
        let ts = Timestamp::<DefaultConfig>::new();
        assert_eq!(ts.unix_time(), 0);
        assert_eq!(ts.civil(), CivilDateTime::EPOCH);
        assert_eq!(Timestamp::<DefaultConfig>::default(), ts);
    }

    #[test]
    fn test_set_time() {
        let mut ts = Timestamp::<DefaultConfig>::new();
        ts.set_time(2023, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(ts.unix_time(), 1_672_531_200);

        ts.set_time(2024, 2, 29, 12, 0, 0).unwrap();
        assert_eq!(ts.civil(), CivilDateTime::new(2024, 2, 29, 12, 0, 0));
    }

    #[test]
    fn test_unvalidated_fields_are_accepted() {
        let mut ts = Timestamp::<DefaultConfig>::new();
        assert!(ts.set_time(2023, 2, 30, 0, 0, 0).is_ok());
        assert_eq!(ts.civil(), CivilDateTime::new(2023, 3, 2, 0, 0, 0));

        assert!(ts.set_time(2023, 1, 1, 25, 0, 0).is_ok());
        assert_eq!(ts.civil(), CivilDateTime::new(2023, 1, 2, 1, 0, 0));
    }

    #[test]
    fn test_validated_fields_are_rejected() {
        let mut ts = Timestamp::<StrictConfig>::from_unix_time(42);

        assert_eq!(
            ts.set_time(2023, 2, 29, 0, 0, 0),
            Err(TimeError::InvalidCalendarField(CalendarField::Day))
        );
        assert_eq!(
            ts.set_time(2023, 13, 1, 0, 0, 0),
            Err(TimeError::InvalidCalendarField(CalendarField::Month))
        );
        assert_eq!(
            ts.set_time(2023, 1, 1, 24, 0, 0),
            Err(TimeError::InvalidCalendarField(CalendarField::Hour))
        );
        assert_eq!(ts.unix_time(), 42);

        assert!(ts.set_time(2024, 2, 29, 0, 0, 0).is_ok());
    }

    #[test]
    fn test_encode_past_counter_range() {
        let mut strict = Timestamp::<StrictConfig>::new();
        assert_eq!(strict.set_time(2106, 2, 7, 6, 28, 16), Err(TimeError::RangeExceeded));
        assert_eq!(strict.unix_time(), 0);

        let mut rtc = Timestamp::<RtcConfig>::new();
        assert!(rtc.set_time(2106, 2, 7, 6, 28, 16).is_ok());
        assert_eq!(rtc.unix_time(), 0);
    }

    #[test]
    fn test_add_operations() {
        let mut ts = Timestamp::<DefaultConfig>::new();
        ts.add_seconds(86_400).unwrap();
        assert_eq!(ts, Timestamp::from_civil(&CivilDateTime::new(1970, 1, 2, 0, 0, 0)).unwrap());

        ts.add_minutes(90).unwrap();
        ts.add_hours(-1).unwrap();
        ts.add_days(2).unwrap();
        assert_eq!(ts.civil(), CivilDateTime::new(1970, 1, 4, 0, 30, 0));

        ts.add_duration(Duration::ms(61_999)).unwrap();
        assert_eq!(ts.civil(), CivilDateTime::new(1970, 1, 4, 0, 31, 1));
    }

    #[test]
    fn test_wraparound_policy() {
        let mut ts = Timestamp::<DefaultConfig>::new();
        ts.add_seconds(-1).unwrap();
        assert_eq!(ts.unix_time(), u32::MAX);

        ts.add_seconds(1).unwrap();
        assert_eq!(ts.unix_time(), 0);

        ts.add_days(-1).unwrap();
        assert_eq!(ts.unix_time(), u32::MAX - SECONDS_PER_DAY + 1);
    }

    #[test]
    fn test_error_policy() {
        let mut ts = Timestamp::<StrictConfig>::new();
        assert_eq!(ts.add_seconds(-1), Err(TimeError::RangeExceeded));
        assert_eq!(ts.unix_time(), 0);

        let mut ts = Timestamp::<StrictConfig>::from_unix_time(u32::MAX - 10);
        assert!(ts.add_seconds(10).is_ok());
        assert_eq!(ts.add_seconds(1), Err(TimeError::RangeExceeded));
        assert_eq!(ts.add_days(i32::MAX), Err(TimeError::RangeExceeded));
        assert_eq!(ts.unix_time(), u32::MAX);

        assert!(ts.add_days(-1).is_ok());
        assert_eq!(ts.unix_time(), u32::MAX - SECONDS_PER_DAY);
    }

    #[test]
    fn test_expiry() {
        let earlier = Timestamp::<DefaultConfig>::from_unix_time(100);
        let later = Timestamp::<DefaultConfig>::from_unix_time(200);

        assert!(earlier.is_expired(200));
        assert!(!later.is_expired(100));
        assert!(!earlier.is_expired(100));
        assert!(earlier.is_expired_at(&later));
        assert!(!later.is_expired_at(&earlier));
    }

    #[test]
    fn test_duration_since() {
        let earlier = Timestamp::<DefaultConfig>::from_unix_time(100);
        let later = Timestamp::<DefaultConfig>::from_unix_time(190);

        assert_eq!(later.duration_since(&earlier), Duration::seconds(90));
        assert_eq!(earlier.duration_since(&later), Duration::seconds(-90));
    }

    #[test]
    fn test_formatting() {
        use std::format;

        let civil = CivilDateTime::new(2023, 1, 1, 0, 0, 0);
        let ts = Timestamp::<DefaultConfig>::from_civil(&civil).unwrap();
        assert_eq!(ts.to_text().as_str(), "2023-01-01 00:00:00");
        assert_eq!(format!("{}", ts), "2023-01-01 00:00:00");
        assert_eq!(format!("{:?}", ts), "Timestamp(1672531200)");
    }

    #[test]
    fn test_conversions() {
        let ts: Timestamp = 1_700_000_000u32.into();
        assert_eq!(u32::from(ts), 1_700_000_000);
        assert!(Timestamp::<DefaultConfig>::from_unix_time(1) < ts);
    }
}
