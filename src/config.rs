//! System configuration parameters
//!
//! All tunable parameters for the intersection controller.  The table itself
//! is fixed at compile time; only timing and wiring are configurable.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Longest accepted dwell unit (one minute).
pub const MAX_DWELL_UNIT_MS: u32 = 60_000;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Timing ---
    /// Length of one dwell unit (milliseconds).  A state with dwell `n`
    /// holds its outputs for `n * dwell_unit_ms`.
    pub dwell_unit_ms: u32,

    // --- Wiring ---
    /// Presence sensors pull the line LOW when something is detected.
    pub sensors_active_low: bool,
    /// Lamps are lit by driving the pin LOW (current-sinking drivers).
    pub lamps_active_low: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            dwell_unit_ms: 100,
            sensors_active_low: false,
            lamps_active_low: false,
        }
    }
}

impl SystemConfig {
    /// Reject values the controller cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dwell_unit_ms == 0 || self.dwell_unit_ms > MAX_DWELL_UNIT_MS {
            return Err(ConfigError::ValidationFailed(
                "dwell_unit_ms must be 1..=60000",
            ));
        }
        Ok(())
    }
}
