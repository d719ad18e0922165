//! Swapcost harness: front-end orchestration for the search crates.
//!
//! The harness reads problem instances, picks a strategy, and renders
//! results — it implements no search logic itself:
//!
//! - [`runner`] — the two-line stdin/stdout contract for the `ucs` and
//!   `astar` binaries
//! - [`report`] — serializable solve reports with byte-stable JSON

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod report;
pub mod runner;
