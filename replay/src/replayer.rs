//! # Trace Replayer
//!
//! Drives a [`WindowTracker`] from recorded traces. Line order in the trace
//! is the tracker's clock, so lines are fed strictly in the order read.

use core::fmt;

use reuse_core::{write_report, AccessEvent, WindowTracker};

use crate::config::ReplayConfig;
use crate::error::{ReplayError, ReplayResult};
use crate::parser::parse_line;

// ============================================================================
// REPLAY SUMMARY
// ============================================================================

/// Line and event counters for one replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Trace lines read
    pub lines: usize,
    /// Events handed to the tracker
    pub events: u64,
    /// Malformed lines skipped (lenient mode only)
    pub skipped: usize,
    /// Blank and comment-only lines
    pub comments: usize,
}

impl fmt::Display for ReplaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lines, {} events, {} skipped, {} comments",
            self.lines, self.events, self.skipped, self.comments
        )
    }
}

// ============================================================================
// REPLAYER
// ============================================================================

/// Feeds trace input into an owned tracker
#[derive(Debug, Clone)]
pub struct Replayer {
    config: ReplayConfig,
    tracker: WindowTracker,
    summary: ReplaySummary,
}

impl Replayer {
    /// Create replayer with a fresh tracker
    pub fn new(config: ReplayConfig) -> Self {
        Self {
            tracker: WindowTracker::with_config(config.tracker_config()),
            config,
            summary: ReplaySummary::default(),
        }
    }

    /// Feed the next trace line
    pub fn feed_line(&mut self, line: &str) -> ReplayResult<()> {
        self.summary.lines += 1;
        match parse_line(self.summary.lines, line) {
            Ok(Some(event)) => {
                self.tracker.process(event);
                self.summary.events += 1;
            },
            Ok(None) => self.summary.comments += 1,
            Err(err) if self.config.strict => return Err(err),
            Err(err) => {
                log::warn!("Replay: skipping {}", err);
                self.summary.skipped += 1;
            },
        }
        Ok(())
    }

    /// Replay an in-memory trace
    pub fn replay_str(&mut self, text: &str) -> ReplayResult<()> {
        for line in text.lines() {
            self.feed_line(line)?;
        }
        Ok(())
    }

    /// Replay a trace from a buffered reader
    #[cfg(feature = "std")]
    pub fn replay_reader<R: std::io::BufRead>(&mut self, reader: R) -> ReplayResult<()> {
        for line in reader.lines() {
            self.feed_line(&line?)?;
        }
        Ok(())
    }

    /// Replay already-decoded events
    pub fn replay_events<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = AccessEvent>,
    {
        for event in events {
            self.tracker.process(event);
            self.summary.events += 1;
        }
    }

    /// Tracker being driven
    #[inline(always)]
    pub fn tracker(&self) -> &WindowTracker {
        &self.tracker
    }

    /// Counters so far
    #[inline(always)]
    pub fn summary(&self) -> &ReplaySummary {
        &self.summary
    }

    /// Active configuration
    #[inline(always)]
    pub fn config(&self) -> &ReplayConfig {
        &self.config
    }

    /// Write the tracker report in the configured layout
    pub fn write_report<W: fmt::Write>(&self, sink: &mut W) -> ReplayResult<()> {
        write_report(&self.tracker, &self.config.format, sink).map_err(ReplayError::Report)
    }

    /// Write the tracker report to an I/O sink in the configured layout
    #[cfg(feature = "std")]
    pub fn write_report_io<W: std::io::Write>(&self, sink: &mut W) -> ReplayResult<()> {
        reuse_core::write_report_io(&self.tracker, &self.config.format, sink)?;
        Ok(())
    }

    /// Stop replaying and hand back the tracker
    pub fn finish(self) -> (WindowTracker, ReplaySummary) {
        log::info!(
            "Replay: finished, {} ({} groups, window {})",
            self.summary,
            self.tracker.groups().len(),
            self.tracker.window_size()
        );
        log::debug!("Replay: tracker stats {:?}", self.tracker.stats());
        (self.tracker, self.summary)
    }
}

// ============================================================================
// TESTS
// ============================================================================
