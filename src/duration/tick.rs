//! Millisecond tick sources
//!
//! The board's free-running millisecond counter is the only clock the
//! library ever reads, and only through this trait.

use core::cell::Cell;

/// Source of the free-running millisecond tick counter
///
/// The counter is `u32` and wraps roughly every 49.7 days.
///
/// # Example
/// ```rust
/// use timesphere::duration::{Duration, TickSource};
///
/// fn millis() -> u32 {
///     1_500
/// }
///
/// let now = Duration::now(&millis);
/// assert_eq!(now.as_millis(), 1_500);
/// ```
pub trait TickSource {
    /// Returns milliseconds since boot
    fn now_millis(&self) -> u32;
}

impl<F> TickSource for F
where
    F: Fn() -> u32,
{
    fn now_millis(&self) -> u32 {
        self()
    }
}

/// Manually driven tick counter for host tests and simulation
///
/// Interior mutability lets code under test hold `&ManualTicks` while the test
/// advances time. Not `Sync`.
#[derive(Debug, Default)]
pub struct ManualTicks {
    millis: Cell<u32>,
}

impl ManualTicks {
    /// Creates a counter starting at `start` milliseconds
    pub const fn new(start: u32) -> Self {
        Self {
            millis: Cell::new(start),
        }
    }

    /// Sets the counter
    pub fn set(&self, millis: u32) {
        self.millis.set(millis);
    }

    /// Advances the counter, wrapping like the hardware counter does
    pub fn advance(&self, millis: u32) {
        self.millis.set(self.millis.get().wrapping_add(millis));
    }
}

impl TickSource for ManualTicks {
    fn now_millis(&self) -> u32 {
        self.millis.get()
    }
}
