//! # Replay Errors

use core::fmt;

use reuse_core::ReuseError;

// ============================================================================
// PARSE ERROR KIND
// ============================================================================

/// Why a trace line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Address present but no group field
    MissingGroup,
    /// Field is neither decimal nor `0x` hexadecimal, or overflows `u64`
    InvalidNumber,
    /// More than two fields on the line
    TrailingField,
}

impl ParseErrorKind {
    /// Short description
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingGroup => "missing group field",
            Self::InvalidNumber => "invalid number",
            Self::TrailingField => "unexpected trailing field",
        }
    }
}

// ============================================================================
// REPLAY ERROR
// ============================================================================

/// Result type for replay operations
pub type ReplayResult<T> = Result<T, ReplayError>;

/// Replay error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayError {
    /// Malformed trace line
    Parse {
        /// 1-based line number
        line: usize,
        /// What was wrong with it
        kind: ParseErrorKind,
    },
    /// Reading the trace failed
    #[cfg(feature = "std")]
    Io(std::io::ErrorKind),
    /// Writing the report failed
    Report(ReuseError),
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { line, kind } => write!(f, "Trace line {}: {}", line, kind.as_str()),
            #[cfg(feature = "std")]
            Self::Io(kind) => write!(f, "Trace read failed: {}", kind),
            Self::Report(err) => write!(f, "Report failed: {}", err),
        }
    }
}

impl From<ReuseError> for ReplayError {
    fn from(err: ReuseError) -> Self {
        Self::Report(err)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for ReplayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.kind())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReplayError {}

// ============================================================================
// TESTS
// ============================================================================
