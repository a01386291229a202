//! # Error Types
//!
//! Distance measurement itself cannot fail: every event is a pair of raw
//! integers. Errors only arise at the reporting boundary, when a sink rejects
//! output or a report format is unusable.

use core::fmt;

// ============================================================================
// ERROR
// ============================================================================

/// Result type for reporting operations
pub type ReuseResult<T> = Result<T, ReuseError>;

/// Reporting error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReuseError {
    /// The `core::fmt::Write` sink rejected a write
    Format,
    /// The `std::io::Write` sink failed
    #[cfg(feature = "std")]
    Io(std::io::ErrorKind),
    /// Report format cannot produce parseable output
    InvalidFormat(&'static str),
}

impl fmt::Display for ReuseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format => write!(f, "Report sink rejected a write"),
            #[cfg(feature = "std")]
            Self::Io(kind) => write!(f, "Report I/O failed: {}", kind),
            Self::InvalidFormat(why) => write!(f, "Invalid report format: {}", why),
        }
    }
}

impl From<fmt::Error> for ReuseError {
    fn from(_: fmt::Error) -> Self {
        Self::Format
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for ReuseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.kind())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReuseError {}

// ============================================================================
// TESTS
// ============================================================================
