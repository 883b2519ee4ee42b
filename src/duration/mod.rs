//! Duration module
//!
//! Millisecond durations for relative timing: elapsed intervals, timeouts and
//! offsets fed into the calendar engine.

pub mod tick;
pub mod value;

// Re-export main types
pub use tick::{ManualTicks, TickSource};
pub use value::{Duration, TimeUnit};
