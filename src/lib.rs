#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

//! **Embedded Time Utilities Without an Operating System**
//!
//! timesphere is a `no_std` Rust library for microcontroller firmware that needs relative
//! timing (elapsed intervals, timeouts) and absolute wall-clock bookkeeping (timestamps,
//! expiry checks) without a standard time library.
//!
//! ## Features
//!
//! - **Calendar Engine** - Unix epoch counter ↔ civil fields, proleptic Gregorian, UTC
//! - **Fixed-Width Counter** - 32-bit epoch seconds, valid from 1970 to 2106-02-07
//! - **Configurable Strictness** - Field validation and overflow policy chosen at compile time
//! - **Tick Durations** - Millisecond spans read from any board's `millis()` counter
//! - **No Dynamic Allocation** - Text rendering and containers live on the stack
//!
//! ## Feature Overview
//!
//! ### Serialization Features
//! - `serde` - Serde serialization support (no_std compatible)
//!
//! ### Logging Features
//! - `defmt` - Log rejected input and overflow through defmt
//!
//! ## Configurations
//!
//! | Config | Field validation | Overflow |
//! |--------|------------------|----------|
//! | [`DefaultConfig`] | ❌ | wraps |
//! | [`RtcConfig`] | ✅ | wraps |
//! | [`StrictConfig`] | ✅ | `RangeExceeded` |
//!
//! ## Quick Start
//!
//! ```rust
//! use timesphere::prelude::*;
//!
//! fn example() -> Result<(), TimeError> {
//!     let mut expiry = Timestamp::<StrictConfig>::new();
//!     expiry.set_time(2023, 11, 14, 22, 13, 20)?;
//!     expiry.add_hours(24)?;
//!
//!     assert_eq!(expiry.to_text().as_str(), "2023-11-15 22:13:20");
//!     assert!(!expiry.is_expired(1_700_000_000));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! [`DefaultConfig`]: crate::config::DefaultConfig
//! [`RtcConfig`]: crate::configs::RtcConfig
//! [`StrictConfig`]: crate::configs::StrictConfig

#![no_std]
#![deny(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::unnecessary_cast)]
#![allow(clippy::too_many_arguments)]

#[cfg(test)]
extern crate std;

// Ambient infrastructure modules
pub mod config;
pub mod error;
mod logging;

// Core time modules
pub mod calendar;
pub mod duration;
pub mod timestamp;

// Containers
pub mod list;

// Configuration presets
pub mod configs;

/// Prelude module of timesphere
///
/// Convenient re-exports for common timesphere types
pub mod prelude {

    // Re-export configuration
    pub use crate::config::{DefaultConfig, OverflowPolicy, TimeConfig, define_time_config};

    // Re-export error types
    pub use crate::error::{CalendarField, TimeError, TimeResult};

    // Re-export configuration presets
    pub use crate::configs::*;

    // Re-export time types
    pub use crate::calendar::CivilDateTime;
    pub use crate::duration::{Duration, TickSource, TimeUnit};
    pub use crate::timestamp::{Timestamp, TimestampText};

    // Re-export containers
    pub use crate::list::List;
}
