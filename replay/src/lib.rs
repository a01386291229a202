//! # Reuse Trace Replay
//!
//! Parses recorded memory-access traces and replays them through a
//! [`WindowTracker`](reuse_core::WindowTracker). Capturing traces is out of
//! scope; this crate only consumes what an instrumentation tool or simulator
//! already wrote down.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐     ┌──────────┐
//! │  trace text  │────▶│ TraceParser  │────▶│   Replayer   │────▶│  report  │
//! │ addr  group  │     │ (AccessEvent)│     │ (tracker)    │     │          │
//! └──────────────┘     └──────────────┘     └──────────────┘     └──────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use reuse_replay::{ReplayConfig, Replayer};
//!
//! let mut replayer = Replayer::new(ReplayConfig::builder().window_size(4).build());
//! replayer.replay_str("0xA 1\n0xB 1\n0xA 1\n").unwrap();
//!
//! let mut report = String::new();
//! replayer.write_report(&mut report).unwrap();
//! assert_eq!(report, "REUSESTATS\t1\t3\t2\n\t2\t1\n");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(test)]
extern crate alloc;

pub mod config;
pub mod error;
pub mod parser;
pub mod replayer;

pub use config::{ReplayConfig, ReplayConfigBuilder};
pub use error::{ParseErrorKind, ReplayError, ReplayResult};
pub use parser::{parse_line, parse_number, TraceParser};
pub use replayer::{ReplaySummary, Replayer};
