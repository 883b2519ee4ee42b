//! Millisecond duration value type

use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::duration::tick::TickSource;

/// Unit for scaled duration retrieval
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeUnit {
    /// Microseconds
    Micros,
    /// Milliseconds
    #[default]
    Millis,
    /// Seconds
    Seconds,
    /// Minutes
    Minutes,
    /// Hours
    Hours,
}

/// Signed span of time with millisecond resolution
///
/// Durations double as tick readings: [`Duration::now`] wraps the current tick
/// counter, and subtracting two readings gives the elapsed time between them.
/// Arithmetic wraps on `i64` overflow.
///
/// # Example
/// ```rust
/// use timesphere::duration::{Duration, TimeUnit};
///
/// let a = Duration::ms(1_500);
/// let b = Duration::ms(3_000);
///
/// assert_eq!(a.add(b).get(TimeUnit::Seconds), 4); // 4500 ms truncates
/// assert_eq!(b.subtract(a).get(TimeUnit::Millis), 1_500);
/// assert!(b.after(a));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Duration {
    millis: i64,
}

impl Duration {
    /// Zero-length duration
    pub const ZERO: Self = Self { millis: 0 };

    /// Creates a duration from milliseconds
    pub const fn ms(millis: i64) -> Self {
        Self { millis }
    }

    /// Creates a duration from microseconds, truncating toward zero
    pub const fn from_micros(micros: i64) -> Self {
        Self {
            millis: micros / 1_000,
        }
    }

    /// Creates a duration from seconds
    pub const fn seconds(seconds: i64) -> Self {
        Self {
            millis: seconds.wrapping_mul(1_000),
        }
    }

    /// Creates a duration from minutes
    pub const fn minutes(minutes: i64) -> Self {
        Self {
            millis: minutes.wrapping_mul(60_000),
        }
    }

    /// Creates a duration from hours
    pub const fn hours(hours: i64) -> Self {
        Self {
            millis: hours.wrapping_mul(3_600_000),
        }
    }

    /// Creates a duration spanning an epoch counter's worth of seconds
    pub const fn from_epoch_seconds(seconds: u32) -> Self {
        Self::seconds(seconds as i64)
    }

    /// Reads the current tick counter as a duration since boot
    pub fn now<S: TickSource + ?Sized>(source: &S) -> Self {
        Self::ms(source.now_millis() as i64)
    }

    /// Time elapsed since the tick reading `start_tick`
    ///
    /// Unlike subtracting two [`Duration::now`] readings, this survives one
    /// rollover of the `u32` tick counter.
    ///
    /// # Example
    /// ```rust
    /// use timesphere::duration::{Duration, ManualTicks, TickSource};
    ///
    /// let ticks = ManualTicks::new(u32::MAX - 99);
    /// let start = ticks.now_millis();
    /// ticks.advance(250);
    ///
    /// assert_eq!(Duration::since(start, &ticks), Duration::ms(250));
    /// ```
    pub fn since<S: TickSource + ?Sized>(start_tick: u32, source: &S) -> Self {
        Self::ms(source.now_millis().wrapping_sub(start_tick) as i64)
    }

    /// Returns the raw millisecond count
    pub const fn as_millis(self) -> i64 {
        self.millis
    }

    /// Returns the duration in `unit`
    ///
    /// Coarser units truncate toward zero: 1500 ms is 1 second.
    pub const fn get(self, unit: TimeUnit) -> i64 {
        match unit {
            TimeUnit::Micros => self.millis.wrapping_mul(1_000),
            TimeUnit::Millis => self.millis,
            TimeUnit::Seconds => self.millis / 1_000,
            TimeUnit::Minutes => self.millis / 60_000,
            TimeUnit::Hours => self.millis / 3_600_000,
        }
    }

    /// Difference `self - other`
    pub const fn diff(self, other: Self) -> Self {
        self.subtract(other)
    }

    /// Sum `self + other`
    #[allow(clippy::should_implement_trait)]
    pub const fn add(self, other: Self) -> Self {
        Self::ms(self.millis.wrapping_add(other.millis))
    }

    /// Difference `self - other`
    pub const fn subtract(self, other: Self) -> Self {
        Self::ms(self.millis.wrapping_sub(other.millis))
    }

    /// Returns true if `self` is strictly later (longer) than `other`
    pub const fn after(self, other: Self) -> bool {
        self.millis > other.millis
    }

    /// Returns true if `self` is strictly earlier (shorter) than `other`
    pub const fn before(self, other: Self) -> bool {
        self.millis < other.millis
    }

    /// Returns true for spans pointing backwards in time
    pub const fn is_negative(self) -> bool {
        self.millis < 0
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::ms(self.millis.wrapping_add(rhs.millis))
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::ms(self.millis.wrapping_sub(rhs.millis))
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        Self::ms(self.millis.wrapping_neg())
    }
}
