//! Timestamp module
//!
//! The epoch counter value type and its text rendering.

pub mod epoch;
pub mod text;

// Re-export main types
pub use epoch::Timestamp;
pub use text::{TEXT_CAPACITY, TEXT_LEN, TimestampText};
