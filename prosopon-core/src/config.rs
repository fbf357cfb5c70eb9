//! Configuration type definitions

/// Default pause between sensor polls, matching the sensor's ~5 Hz
/// detection rate
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 200;

/// Poll loop configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollConfig {
    /// Pause between poll cycles in milliseconds
    pub interval_ms: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}
