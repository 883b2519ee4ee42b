//! Configuration presets module
//!
//! This module provides pre-defined time configurations for common firmware setups.

use crate::config::{OverflowPolicy, define_time_config};

// Everything checked: rejected fields and overflow both surface as errors
define_time_config! {
    name: StrictConfig,
    overflow: OverflowPolicy::Error,
    validate_fields: true,
}

// Fields read back from an RTC chip are validated, uptime arithmetic wraps
define_time_config! {
    name: RtcConfig,
    overflow: OverflowPolicy::Wrap,
    validate_fields: true,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimeConfig;

    #[test]
    fn test_presets() {
        assert!(StrictConfig::is_strict());
        assert!(RtcConfig::VALIDATE_FIELDS);
        assert_eq!(RtcConfig::OVERFLOW_POLICY, OverflowPolicy::Wrap);
    }
}
