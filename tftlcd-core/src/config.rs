//! Input configuration
//!
//! Theme and touch timing for the widgets. With the `serde` feature the
//! whole configuration can be persisted to flash as postcard binary data,
//! or described in TOML by a host-side tool.

use tftlcd_display::Theme;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default sampling interval while waiting for a release (µs)
pub const DEFAULT_POLL_INTERVAL_US: u32 = 5_000;

/// Default upper bound on a single release wait (ms)
pub const DEFAULT_RELEASE_TIMEOUT_MS: u32 = 5_000;

/// Wait-for-release timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ReleaseConfig {
    /// Delay between touch samples while a key is held (µs)
    pub poll_interval_us: u32,
    /// Give up waiting after this long (ms); 0 waits forever
    pub timeout_ms: u32,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            poll_interval_us: DEFAULT_POLL_INTERVAL_US,
            timeout_ms: DEFAULT_RELEASE_TIMEOUT_MS,
        }
    }
}

impl ReleaseConfig {
    /// Wait forever for the finger to lift
    pub const UNBOUNDED: ReleaseConfig = ReleaseConfig {
        poll_interval_us: DEFAULT_POLL_INTERVAL_US,
        timeout_ms: 0,
    };

    /// Number of samples after the first before the wait times out
    ///
    /// `None` when the wait is unbounded.
    pub const fn max_polls(&self) -> Option<u32> {
        if self.timeout_ms == 0 {
            return None;
        }
        let interval = if self.poll_interval_us == 0 {
            1
        } else {
            self.poll_interval_us as u64
        };
        let polls = (self.timeout_ms as u64 * 1_000) / interval;
        if polls > u32::MAX as u64 {
            Some(u32::MAX)
        } else {
            Some(polls as u32)
        }
    }
}

/// Complete input configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct InputConfig {
    /// Colour palette
    pub theme: Theme,
    /// Release wait timing
    pub release: ReleaseConfig,
    /// Highlight a key's border while it is held
    pub press_feedback: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            release: ReleaseConfig::default(),
            press_feedback: true,
        }
    }
}

/// Configuration persistence errors
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Buffer too small or value not encodable
    Serialize,
    /// Stored bytes are not a valid configuration
    Deserialize,
}

#[cfg(feature = "serde")]
impl InputConfig {
    /// Upper bound on the encoded size, for sizing flash buffers
    pub const MAX_ENCODED_LEN: usize = 64;

    /// Serialize into `buf`, returning the used prefix
    pub fn store<'b>(&self, buf: &'b mut [u8]) -> Result<&'b mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Deserialize a configuration written by [`InputConfig::store`]
    pub fn load(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)
    }
}
