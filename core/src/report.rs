//! # Statistics Report
//!
//! Textual dump of every group's histogram. The layout is fixed for
//! downstream consumers:
//!
//! ```text
//! REUSESTATS<TAB><group><TAB><total_accesses><TAB><outside_window>
//! <TAB><distance><TAB><count>
//! <TAB><distance><TAB><count>
//! ```
//!
//! Groups appear in ascending id order and rows in ascending distance order.
//! Bucket 0 only appears in the header; zero-count rows are never written.
//! Rendering is a pure function of the tracker state, so two reports with no
//! intervening `process` call are byte-identical.

extern crate alloc;

use alloc::string::String;
use core::fmt::Write;

use crate::error::{ReuseError, ReuseResult};
use crate::histogram::DistanceHistogram;
use crate::tracker::WindowTracker;

// ============================================================================
// REPORT FORMAT
// ============================================================================

/// Field separator, line terminator and header tag of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportFormat {
    /// Leading token of each group header
    pub tag: &'static str,
    /// Field separator, also used to indent distance rows
    pub separator: &'static str,
    /// Line terminator
    pub terminator: &'static str,
}

impl ReportFormat {
    /// Header tag of the reference layout
    pub const TAG: &'static str = "REUSESTATS";
    /// Separator of the reference layout
    pub const TAB: &'static str = "\t";
    /// Terminator of the reference layout
    pub const ENDL: &'static str = "\n";

    /// The reference layout
    pub const fn reference() -> Self {
        Self {
            tag: Self::TAG,
            separator: Self::TAB,
            terminator: Self::ENDL,
        }
    }

    /// Use another header tag
    pub const fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = tag;
        self
    }

    /// Use another field separator
    pub const fn with_separator(mut self, separator: &'static str) -> Self {
        self.separator = separator;
        self
    }

    /// Use another line terminator
    pub const fn with_terminator(mut self, terminator: &'static str) -> Self {
        self.terminator = terminator;
        self
    }

    /// Check that output in this format can be split back into fields
    pub fn validate(&self) -> ReuseResult<()> {
        if self.separator.is_empty() {
            return Err(ReuseError::InvalidFormat("empty separator"));
        }
        if self.terminator.is_empty() {
            return Err(ReuseError::InvalidFormat("empty terminator"));
        }
        if self.tag.is_empty() {
            return Err(ReuseError::InvalidFormat("empty tag"));
        }
        if self.tag.contains(self.separator) || self.tag.contains(self.terminator) {
            return Err(ReuseError::InvalidFormat("tag contains a delimiter"));
        }
        if self.separator.contains(self.terminator) || self.terminator.contains(self.separator) {
            return Err(ReuseError::InvalidFormat("separator overlaps terminator"));
        }
        Ok(())
    }
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self::reference()
    }
}

// ============================================================================
// RENDERING
// ============================================================================

impl DistanceHistogram {
    /// Write this histogram's header and distance rows for `group`
    ///
    /// Fails with [`ReuseError::InvalidFormat`] before writing anything if
    /// `format` does not validate.
    pub fn write_report<W: Write>(
        &self,
        group: u64,
        format: &ReportFormat,
        sink: &mut W,
    ) -> ReuseResult<()> {
        format.validate()?;
        self.write_rows(group, format, sink)
    }

    fn write_rows<W: Write>(
        &self,
        group: u64,
        format: &ReportFormat,
        sink: &mut W,
    ) -> ReuseResult<()> {
        let ReportFormat {
            tag,
            separator: sep,
            terminator: end,
        } = *format;

        write!(
            sink,
            "{tag}{sep}{group}{sep}{total}{sep}{outside}{end}",
            total = self.total_accesses(),
            outside = self.outside_window_count(),
        )?;

        for (distance, count) in self.iter_sorted() {
            if distance == Self::OUTSIDE_WINDOW || count == 0 {
                continue;
            }
            write!(sink, "{sep}{distance}{sep}{count}{end}")?;
        }
        Ok(())
    }
}

/// Write every group of `tracker` to `sink`
pub fn write_report<W: Write>(
    tracker: &WindowTracker,
    format: &ReportFormat,
    sink: &mut W,
) -> ReuseResult<()> {
    format.validate()?;
    for (group, histogram) in tracker.histograms() {
        histogram.write_rows(group, format, sink)?;
    }
    Ok(())
}

/// Render every group of `tracker` in the reference layout
pub fn render_report(tracker: &WindowTracker) -> String {
    let mut out = String::new();
    let result = write_report(tracker, &ReportFormat::reference(), &mut out);
    debug_assert!(result.is_ok(), "string sink and reference layout never fail");
    out
}

/// Write every group of `tracker` to an I/O sink
#[cfg(feature = "std")]
pub fn write_report_io<W: std::io::Write>(
    tracker: &WindowTracker,
    format: &ReportFormat,
    sink: &mut W,
) -> ReuseResult<()> {
    let mut text = String::new();
    write_report(tracker, format, &mut text)?;
    sink.write_all(text.as_bytes())?;
    Ok(())
}

impl WindowTracker {
    /// Render every group in the reference layout
    #[inline]
    pub fn report(&self) -> String {
        render_report(self)
    }

    /// Print every group to standard output
    #[cfg(feature = "std")]
    pub fn print(&self) -> ReuseResult<()> {
        let stdout = std::io::stdout();
        write_report_io(self, &ReportFormat::reference(), &mut stdout.lock())
    }
}

// ============================================================================
// TESTS
// ============================================================================
