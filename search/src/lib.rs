//! Swapcost search: deterministic best-first search over swap successors.
//!
//! This crate provides the search layer. It depends only on
//! `swapcost_kernel` — it does NOT depend on `swapcost_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! swapcost_kernel  ←  swapcost_search  ←  swapcost_harness
//! (layout, costs)     (fringe, solver)    (runners, reports)
//! ```
//!
//! # Key types
//!
//! - [`node::SearchNode`] — immutable arena node with deterministic ordering
//! - [`fringe::Fringe`] — open-node priority structure (heap or buckets)
//! - [`heuristic::lower_bound`] — admissible remaining-cost estimate
//! - [`strategy::Strategy`] — ordering seam (uniform-cost and A*)
//! - [`solver::solve`] — the strategy-agnostic expansion loop

#![forbid(unsafe_code)]

pub mod error;
pub mod fringe;
pub mod heuristic;
pub mod node;
pub mod solver;
pub mod strategy;
