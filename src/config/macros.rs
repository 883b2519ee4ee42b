//! Time configuration macros
//!
//! This module provides the `define_time_config!` macro for easy creation
//! of custom time configurations.

/// Macro to define a custom time configuration
///
/// This macro creates a new struct that implements the `TimeConfig` trait.
/// Omitted settings fall back to the lenient defaults.
///
/// # Example
///
/// ```rust
/// use timesphere::config::{define_time_config, OverflowPolicy, TimeConfig};
///
/// define_time_config! {
///     name: GpsConfig,
///     overflow: OverflowPolicy::Error,
///     validate_fields: true,
/// }
///
/// assert!(GpsConfig::is_strict());
/// ```
#[macro_export]
macro_rules! define_time_config {
    (
        name: $name:ident
        $(, overflow: $overflow:expr)?
        $(, validate_fields: $validate:expr)?
        $(,)?
    ) => {
        /// Custom time configuration
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl $crate::config::TimeConfig for $name {
            const OVERFLOW_POLICY: $crate::config::OverflowPolicy = $crate::define_time_config!(
                @default $($overflow)?, $crate::config::OverflowPolicy::Wrap
            );
            const VALIDATE_FIELDS: bool =
                $crate::define_time_config!(@default $($validate)?, false);
        }
    };

    (@default , $default:expr) => { $default };
    (@default $value:expr, $default:expr) => { $value };
}

// Re-export the macro for convenience
pub use define_time_config;
