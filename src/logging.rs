//! Logging abstraction
//!
//! Provides logging macros that work across targets:
//! - Embedded with the `defmt` feature: forwards to defmt
//! - Everything else: arguments are type-checked and discarded
//!
//! Format strings must stay within the `{}` subset that both defmt and
//! `core::fmt` accept. The macros stay crate-private so the `defmt` feature
//! check resolves against this crate.

/// Log trace message
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::trace!($($arg)*);

        #[cfg(not(feature = "defmt"))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

/// Log debug message
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($arg)*);

        #[cfg(not(feature = "defmt"))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

/// Log warning message
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::warn!($($arg)*);

        #[cfg(not(feature = "defmt"))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

pub(crate) use {log_debug, log_trace, log_warn};
