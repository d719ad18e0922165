//! Swapcost kernel: the immutable problem state and its cost model.
//!
//! This crate owns everything the search layer treats as opaque domain data:
//! the [`layout::Layout`] value sequence, the parity-based swap-cost table in
//! [`cost`], and the identity [`fingerprint`] used to key dedup maps. It has
//! no knowledge of frontiers, heuristics, or strategies.
//!
//! # Crate Dependency Direction
//!
//! `swapcost_kernel` ← `swapcost_search` ← `swapcost_harness`
//!
//! One-way only. No cycles. The kernel depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cost;
pub mod error;
pub mod fingerprint;
pub mod layout;
