//! Allocation-free `YYYY-MM-DD HH:MM:SS` rendering

use core::fmt::{self, Write};

use heapless::String;

use crate::calendar::CivilDateTime;

/// Length of the rendered text for in-range fields
pub const TEXT_LEN: usize = 19;

/// Capacity of the text buffer
///
/// Wide enough for every field at its full integer width (`65535-255-255 255:255:255`),
/// so fields that never went through validation render the same as [`CivilDateTime`]'s
/// `Display`.
pub const TEXT_CAPACITY: usize = 25;

/// `YYYY-MM-DD HH:MM:SS` text held in a stack buffer
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TimestampText {
    buf: String<TEXT_CAPACITY>,
}

impl TimestampText {
    /// Renders civil fields
    pub fn new(civil: &CivilDateTime) -> Self {
        let mut buf = String::new();
        // cannot fail: TEXT_CAPACITY covers the widest field values
        let _ = write!(buf, "{}", civil);
        Self { buf }
    }

    /// Returns the text
    pub fn as_str(&self) -> &str {
        self.buf.as_str()
    }

    /// Returns the raw ASCII bytes, e.g. for a UART write
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    /// Returns the rendered length, [`TEXT_LEN`] for in-range fields
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing was rendered
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl AsRef<str> for TimestampText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TimestampText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for TimestampText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}
