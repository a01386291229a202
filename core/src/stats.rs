//! Tracker-wide counters.

// ============================================================================
// TRACKER STATISTICS
// ============================================================================

/// Classification and housekeeping counters for one tracker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackerStats {
    /// Events processed
    pub events: u64,
    /// Events whose address was not in the window
    pub cold_accesses: u64,
    /// Events whose previous use was at or beyond the window
    pub outside_window: u64,
    /// Events that recorded an exact, non-zero distance
    pub reuses: u64,
    /// Cleanup passes that actually scanned the window
    pub cleanups: u64,
    /// Window entries removed by cleanup passes
    pub evicted: u64,
    /// Largest window size observed after an insert
    pub peak_window: u64,
}

impl TrackerStats {
    /// Create zeroed stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of events that measured a reuse
    #[inline]
    pub fn reuse_ratio(&self) -> f64 {
        if self.events == 0 {
            0.0
        } else {
            self.reuses as f64 / self.events as f64
        }
    }

    /// Events recorded into bucket 0
    #[inline(always)]
    pub fn unmeasured(&self) -> u64 {
        self.cold_accesses + self.outside_window
    }
}

// ============================================================================
// TESTS
// ============================================================================
