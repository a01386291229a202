//! # Tracker Configuration
//!
//! The tracker has exactly one tunable: the recency window. A window of `0`
//! disables eviction and remembers every address forever.

// ============================================================================
// TRACKER CONFIG
// ============================================================================

/// Construction-time configuration for a [`WindowTracker`](crate::WindowTracker)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackerConfig {
    /// Recency horizon in accesses, `0` for unbounded
    pub window_size: u64,
}

impl TrackerConfig {
    /// Window size meaning "never evict"
    pub const UNBOUNDED: u64 = 0;

    /// Track every address for the tracker's lifetime
    pub const fn unbounded() -> Self {
        Self {
            window_size: Self::UNBOUNDED,
        }
    }

    /// Track addresses seen within the last `window_size` accesses
    pub const fn windowed(window_size: u64) -> Self {
        Self { window_size }
    }

    /// Create builder for config
    pub fn builder() -> TrackerConfigBuilder {
        TrackerConfigBuilder::new()
    }

    /// Whether eviction is disabled
    #[inline(always)]
    pub const fn is_unbounded(&self) -> bool {
        self.window_size == Self::UNBOUNDED
    }
}

// ============================================================================
// CONFIG BUILDER
// ============================================================================

/// Builder for TrackerConfig
#[derive(Debug, Default)]
pub struct TrackerConfigBuilder {
    window_size: Option<u64>,
}

impl TrackerConfigBuilder {
    /// Create new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set window size (`0` for unbounded)
    pub fn window_size(mut self, window_size: u64) -> Self {
        self.window_size = Some(window_size);
        self
    }

    /// Build the config, unbounded unless a window was given
    pub fn build(self) -> TrackerConfig {
        TrackerConfig {
            window_size: self.window_size.unwrap_or(TrackerConfig::UNBOUNDED),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();
        assert!(config.is_unbounded());
        assert_eq!(config, TrackerConfig::unbounded());
    }

    #[test]
    fn test_builder() {
        let config = TrackerConfig::builder().window_size(64).build();
        assert_eq!(config, TrackerConfig::windowed(64));
        assert!(!config.is_unbounded());

        assert!(TrackerConfig::builder().build().is_unbounded());
    }
}
