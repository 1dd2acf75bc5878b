//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

// =============================================================================
// Dispatch Defaults
// =============================================================================

/// Seconds to wait for ii to open the reading end of its `in` FIFO.
pub fn default_open_timeout_secs() -> u64 {
    60
}

/// Seconds allowed for a single `/mode` line to be written.
pub fn default_write_timeout_secs() -> u64 {
    5
}

/// Pause after each written line so ii is not flooded.
pub fn default_pacing_millis() -> u64 {
    2000
}

// =============================================================================
// Friends Defaults
// =============================================================================

pub const DEFAULT_FRIENDS_FILE: &str = "friends.txt";
