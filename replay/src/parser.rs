//! # Trace Parser
//!
//! Text traces carry one access per line:
//!
//! ```text
//! # address   group
//! 0x7ffe1000  3
//! 140737488   3     # decimal works too
//! ```
//!
//! Fields are split on ASCII whitespace, `#` starts a comment and blank lines
//! are ignored.

use reuse_core::AccessEvent;

use crate::error::{ParseErrorKind, ReplayError, ReplayResult};

// ============================================================================
// LINE PARSING
// ============================================================================

/// Comment marker
pub const COMMENT: char = '#';

/// Parse a decimal or `0x`-prefixed hexadecimal `u64`
///
/// Only bare digits are accepted after the optional prefix; signs are
/// rejected.
pub fn parse_number(field: &str) -> Option<u64> {
    match field
        .strip_prefix("0x")
        .or_else(|| field.strip_prefix("0X"))
    {
        Some(hex) if !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()) => {
            u64::from_str_radix(hex, 16).ok()
        },
        Some(_) => None,
        None if !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit()) => {
            field.parse().ok()
        },
        None => None,
    }
}

/// Parse one trace line, `Ok(None)` for blank and comment-only lines
///
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_line(line_no: usize, line: &str) -> ReplayResult<Option<AccessEvent>> {
    let body = line.split_once(COMMENT).map_or(line, |(body, _)| body);
    let mut fields = body.split_ascii_whitespace();

    let Some(address) = fields.next() else {
        return Ok(None);
    };
    let error = |kind| ReplayError::Parse {
        line: line_no,
        kind,
    };

    let group = fields.next().ok_or(error(ParseErrorKind::MissingGroup))?;
    if fields.next().is_some() {
        return Err(error(ParseErrorKind::TrailingField));
    }

    let address = parse_number(address).ok_or(error(ParseErrorKind::InvalidNumber))?;
    let group = parse_number(group).ok_or(error(ParseErrorKind::InvalidNumber))?;
    Ok(Some(AccessEvent::new(address, group)))
}

// ============================================================================
// TRACE PARSER
// ============================================================================

/// Iterator over the events of an in-memory trace
///
/// Yields one item per non-blank, non-comment line, in file order.
#[derive(Debug, Clone)]
pub struct TraceParser<'a> {
    lines: core::str::Lines<'a>,
    line_no: usize,
}

impl<'a> TraceParser<'a> {
    /// Create parser over trace text
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line_no: 0,
        }
    }

    /// Number of lines consumed so far
    #[inline(always)]
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

impl Iterator for TraceParser<'_> {
    type Item = ReplayResult<AccessEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            self.line_no += 1;
            match parse_line(self.line_no, line) {
                Ok(None) => continue,
                Ok(Some(event)) => return Some(Ok(event)),
                Err(err) => return Some(Err(err)),
            }
        }
        None
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), Some(42));
        assert_eq!(parse_number("0x2A"), Some(42));
        assert_eq!(parse_number("0X2a"), Some(42));
        assert_eq!(parse_number("18446744073709551615"), Some(u64::MAX));
        assert_eq!(parse_number("18446744073709551616"), None);
        assert_eq!(parse_number("0x"), None);
        assert_eq!(parse_number("-1"), None);
        assert_eq!(parse_number("ff"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("+5"), None);
        assert_eq!(parse_number("0x+A"), None);
        assert_eq!(parse_number("0x-1"), None);
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line(1, "0x10 2"), Ok(Some(AccessEvent::new(16, 2))));
        assert_eq!(parse_line(1, "  7\t\t9  # trailing"), Ok(Some(AccessEvent::new(7, 9))));
        assert_eq!(parse_line(1, ""), Ok(None));
        assert_eq!(parse_line(1, "   "), Ok(None));
        assert_eq!(parse_line(1, "# 1 2 3"), Ok(None));
    }

    #[test]
    fn test_parse_line_errors() {
        let err = |line, kind| Err(ReplayError::Parse { line, kind });
        assert_eq!(parse_line(3, "0x10"), err(3, ParseErrorKind::MissingGroup));
        assert_eq!(parse_line(4, "1 2 3"), err(4, ParseErrorKind::TrailingField));
        assert_eq!(parse_line(5, "zz 2"), err(5, ParseErrorKind::InvalidNumber));
        assert_eq!(parse_line(6, "1 0xg"), err(6, ParseErrorKind::InvalidNumber));
        assert_eq!(parse_line(7, "+5 1"), err(7, ParseErrorKind::InvalidNumber));
        assert_eq!(parse_line(8, "1 0x+A"), err(8, ParseErrorKind::InvalidNumber));
    }

    #[test]
    fn test_trace_parser() {
        let text = "# header\n0xA 1\n\n0xB 1\n0xA 1 # again\n";
        let events: Vec<AccessEvent> = TraceParser::new(text).map(Result::unwrap).collect();
        assert_eq!(
            events,
            [
                AccessEvent::new(0xA, 1),
                AccessEvent::new(0xB, 1),
                AccessEvent::new(0xA, 1)
            ]
        );
    }

    #[test]
    fn test_trace_parser_reports_line_numbers() {
        let mut parser = TraceParser::new("1 1\n\n# c\n2\n3 3\n");
        assert_eq!(parser.next(), Some(Ok(AccessEvent::new(1, 1))));
        assert_eq!(
            parser.next(),
            Some(Err(ReplayError::Parse {
                line: 4,
                kind: ParseErrorKind::MissingGroup
            }))
        );
        assert_eq!(parser.line_no(), 4);
        assert_eq!(parser.next(), Some(Ok(AccessEvent::new(3, 3))));
        assert_eq!(parser.next(), None);
    }
}
