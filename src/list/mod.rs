//! Ordered container module
//!
//! A general-purpose list for firmware bookkeeping, independent of the
//! calendar engine.

pub mod linked;

// Re-export main types
pub use linked::{Iter, List};
