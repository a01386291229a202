//! # Replay Configuration

use reuse_core::{ReportFormat, TrackerConfig};

// ============================================================================
// REPLAY CONFIG
// ============================================================================

/// Replay settings: tracker window, error policy and report layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayConfig {
    /// Window handed to the tracker, `0` for unbounded
    pub window_size: u64,
    /// Abort on the first malformed line instead of skipping it
    pub strict: bool,
    /// Layout of the final report
    pub format: ReportFormat,
}

impl ReplayConfig {
    /// Create builder for config
    pub fn builder() -> ReplayConfigBuilder {
        ReplayConfigBuilder::new()
    }

    /// Tracker configuration derived from this config
    #[inline]
    pub fn tracker_config(&self) -> TrackerConfig {
        TrackerConfig::windowed(self.window_size)
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            window_size: TrackerConfig::UNBOUNDED,
            strict: true,
            format: ReportFormat::reference(),
        }
    }
}

// ============================================================================
// CONFIG BUILDER
// ============================================================================

/// Builder for ReplayConfig
#[derive(Debug, Default)]
pub struct ReplayConfigBuilder {
    window_size: Option<u64>,
    strict: Option<bool>,
    format: Option<ReportFormat>,
}

impl ReplayConfigBuilder {
    /// Create new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set tracker window size
    pub fn window_size(mut self, window_size: u64) -> Self {
        self.window_size = Some(window_size);
        self
    }

    /// Abort (`true`) or skip (`false`) on malformed lines
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }

    /// Set report layout
    pub fn format(mut self, format: ReportFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Build the config
    pub fn build(self) -> ReplayConfig {
        let defaults = ReplayConfig::default();
        ReplayConfig {
            window_size: self.window_size.unwrap_or(defaults.window_size),
            strict: self.strict.unwrap_or(defaults.strict),
            format: self.format.unwrap_or(defaults.format),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
