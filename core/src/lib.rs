//! # Reuse Distance Core
//!
//! Cheap approximation of LRU stack distance for streams of memory accesses.
//! Each access carries an opaque address and a group id; the tracker measures
//! how many accesses elapsed since the address was last seen, within a
//! bounded recency window, and accumulates one distance histogram per group.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌─────────────────────┐
//! │ AccessEvent  │────▶│  WindowTracker   │────▶│ DistanceHistogram   │
//! │ (addr, group)│     │ (clock + window) │     │ (one per group)     │
//! └──────────────┘     └──────────────────┘     └──────────┬──────────┘
//!                                                          │
//!                                                          ▼
//!                                               ┌─────────────────────┐
//!                                               │  REUSESTATS report  │
//!                                               └─────────────────────┘
//! ```
//!
//! ## Distance Buckets
//!
//! | Situation                              | Recorded distance |
//! |----------------------------------------|-------------------|
//! | Address never seen                     | 0                 |
//! | Last seen `>= window_size` events ago  | 0                 |
//! | Last seen `d` events ago, `d < window` | `d`               |
//!
//! A window of `0` disables eviction: every address is remembered forever
//! and every reuse is measured exactly.
//!
//! ## Usage
//!
//! ```rust
//! use reuse_core::{AccessEvent, WindowTracker};
//!
//! let mut tracker = WindowTracker::new(4);
//! for addr in [0xA, 0xB, 0xA] {
//!     tracker.process(AccessEvent::new(addr, 1));
//! }
//!
//! let histogram = tracker.histogram(1).unwrap();
//! assert_eq!(histogram.count_at(2), 1);
//! assert_eq!(tracker.report(), "REUSESTATS\t1\t3\t2\n\t2\t1\n");
//! ```
//!
//! ## Concurrency
//!
//! Nothing here is internally synchronized. Feed one tracker from one
//! producer; independent traces get independent trackers.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

pub mod config;
pub mod error;
pub mod event;
pub mod histogram;
pub mod report;
pub mod stats;
pub mod tracker;

pub use config::{TrackerConfig, TrackerConfigBuilder};
pub use error::{ReuseError, ReuseResult};
pub use event::AccessEvent;
pub use histogram::DistanceHistogram;
pub use report::{render_report, write_report, ReportFormat};
#[cfg(feature = "std")]
pub use report::write_report_io;
pub use stats::TrackerStats;
pub use tracker::WindowTracker;
