//! # Window Tracker
//!
//! Windowed reuse-distance measurement over a stream of access events.
//!
//! ```text
//!   event ──▶ cleanup? ──▶ lookup window[address] ──▶ histogram[group].record(d)
//!                              │
//!                              └──▶ window[address] = sequence; sequence += 1
//! ```
//!
//! The window is compacted at most once every `window_size` events instead of
//! on every access. Between two passes the map may hold up to `window_size`
//! stale entries; they never affect measured distances because every lookup
//! re-checks the gap against the window.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::borrow::Borrow;

use hashbrown::HashMap;

use crate::config::TrackerConfig;
use crate::event::AccessEvent;
use crate::histogram::DistanceHistogram;
use crate::stats::TrackerStats;

// ============================================================================
// WINDOW TRACKER
// ============================================================================

/// Reuse-distance tracker with a bounded recency window
///
/// Owns the logical clock, the address → last-seen map and one
/// [`DistanceHistogram`] per group. Not internally synchronized: use one
/// tracker per producer.
#[derive(Debug)]
pub struct WindowTracker {
    /// Recency horizon, `0` for unbounded
    window_size: u64,
    /// Events processed so far
    sequence: u64,
    /// Sequence at which the window was last compacted
    last_cleanup: u64,
    /// Address → sequence of its most recent access
    window: HashMap<u64, u64>,
    /// Group → distance histogram, created on first access
    histograms: BTreeMap<u64, DistanceHistogram>,
    /// Counters
    stats: TrackerStats,
}

impl WindowTracker {
    /// Create a tracker, `window_size == 0` meaning unbounded
    pub fn new(window_size: u64) -> Self {
        Self::with_config(TrackerConfig::windowed(window_size))
    }

    /// Create a tracker from a config
    pub fn with_config(config: TrackerConfig) -> Self {
        Self {
            window_size: config.window_size,
            sequence: 0,
            last_cleanup: 0,
            window: HashMap::new(),
            histograms: BTreeMap::new(),
            stats: TrackerStats::new(),
        }
    }

    /// Process one access event
    pub fn process(&mut self, event: AccessEvent) {
        self.cleanup();

        let distance = match self.window.get(&event.address) {
            None => {
                self.stats.cold_accesses += 1;
                DistanceHistogram::OUTSIDE_WINDOW
            },
            Some(&seen) => {
                let gap = self.sequence - seen;
                if self.window_size != 0 && gap >= self.window_size {
                    self.stats.outside_window += 1;
                    DistanceHistogram::OUTSIDE_WINDOW
                } else {
                    self.stats.reuses += 1;
                    gap
                }
            },
        };

        self.histograms
            .entry(event.group)
            .or_insert_with(|| {
                log::trace!("ReuseTracker: new group {}", event.group);
                DistanceHistogram::new()
            })
            .record(distance);

        self.window.insert(event.address, self.sequence);
        self.sequence += 1;

        self.stats.events = self.sequence;
        let live = self.window.len() as u64;
        if live > self.stats.peak_window {
            self.stats.peak_window = live;
        }
    }

    /// Process events in the order given
    pub fn process_all<I>(&mut self, events: I)
    where
        I: IntoIterator,
        I::Item: Borrow<AccessEvent>,
    {
        for event in events {
            self.process(*event.borrow());
        }
    }

    /// Process a slice of events in order
    #[inline]
    pub fn process_slice(&mut self, events: &[AccessEvent]) {
        self.process_all(events);
    }

    /// Compact the window once `window_size` events have passed
    fn cleanup(&mut self) {
        if self.window_size == 0 || self.sequence - self.last_cleanup < self.window_size {
            return;
        }

        let (sequence, window_size) = (self.sequence, self.window_size);
        let before = self.window.len();
        self.window.retain(|_, seen| sequence - *seen < window_size);
        let evicted = (before - self.window.len()) as u64;

        self.last_cleanup = sequence;
        self.stats.cleanups += 1;
        self.stats.evicted += evicted;

        debug_assert!(self.window.values().all(|&seen| self.is_live(seen)));
        log::debug!(
            "ReuseTracker: cleanup at sequence {} evicted {} entries, {} live",
            sequence,
            evicted,
            self.window.len()
        );
    }

    /// Whether an entry last seen at `seen` is still inside the window
    #[inline(always)]
    fn is_live(&self, seen: u64) -> bool {
        self.window_size == 0 || self.sequence - seen < self.window_size
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Group ids with recorded statistics, ascending
    pub fn groups(&self) -> Vec<u64> {
        self.histograms.keys().copied().collect()
    }

    /// Addresses currently held by the window map, ascending
    ///
    /// May include entries that went stale since the last cleanup pass.
    pub fn active_addresses(&self) -> Vec<u64> {
        let mut addrs: Vec<u64> = self.window.keys().copied().collect();
        addrs.sort_unstable();
        addrs
    }

    /// Effective last-seen sequence of `address`
    ///
    /// Returns `0` when the address is absent or stale, which cannot be told
    /// apart from an address genuinely last seen at sequence 0.
    pub fn sequence_value(&self, address: u64) -> u64 {
        match self.window.get(&address) {
            Some(&seen) if self.is_live(seen) => seen,
            _ => 0,
        }
    }

    /// Histogram for one group
    #[inline]
    pub fn histogram(&self, group: u64) -> Option<&DistanceHistogram> {
        self.histograms.get(&group)
    }

    /// All `(group, histogram)` pairs in ascending group order
    pub fn histograms(&self) -> impl Iterator<Item = (u64, &DistanceHistogram)> + '_ {
        self.histograms.iter().map(|(&group, h)| (group, h))
    }

    /// Configured window size, `0` for unbounded
    #[inline(always)]
    pub fn window_size(&self) -> u64 {
        self.window_size
    }

    /// Events processed so far
    #[inline(always)]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Sequence at the last cleanup pass
    #[inline(always)]
    pub fn last_cleanup(&self) -> u64 {
        self.last_cleanup
    }

    /// Number of entries in the window map, stale ones included
    #[inline(always)]
    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    /// Tracker counters
    #[inline(always)]
    pub fn stats(&self) -> &TrackerStats {
        &self.stats
    }

    /// Config this tracker was built with
    #[inline]
    pub fn config(&self) -> TrackerConfig {
        TrackerConfig::windowed(self.window_size)
    }
}

impl Default for WindowTracker {
    fn default() -> Self {
        Self::with_config(TrackerConfig::default())
    }
}

impl Clone for WindowTracker {
    /// Deep copy: histograms by value, window rebuilt from live entries only
    fn clone(&self) -> Self {
        let window: HashMap<u64, u64> = self
            .window
            .iter()
            .filter(|&(_, &seen)| self.is_live(seen))
            .map(|(&addr, &seen)| (addr, seen))
            .collect();

        Self {
            window_size: self.window_size,
            sequence: self.sequence,
            last_cleanup: self.sequence,
            window,
            histograms: self.histograms.clone(),
            stats: self.stats,
        }
    }
}

static_assertions::assert_impl_all!(WindowTracker: Send, Sync, Clone, Default);

// ============================================================================
// TESTS
// ============================================================================
