//! Frontier ordering strategies.
//!
//! A strategy is the only thing that differs between uniform-cost search
//! and A*: the integer priority a node is keyed under, and the fringe
//! structure that priority lives in. The expansion loop in
//! [`crate::solver`] never looks past this seam.

use swapcost_kernel::layout::Layout;

use crate::error::SearchError;
use crate::fringe::{BucketFringe, Fringe, HeapFringe};
use crate::heuristic;

/// A frontier ordering.
pub trait Strategy {
    /// Short identifier for logs and reports.
    fn name(&self) -> &'static str;

    /// Integer ordering key for a node with path cost `g` at `layout`.
    ///
    /// # Errors
    ///
    /// Strategies that consult the heuristic surface its domain errors.
    fn priority(&self, g: u64, layout: &Layout) -> Result<u64, SearchError>;

    /// Fresh fringe for one solve.
    fn make_fringe(&self) -> Box<dyn Fringe>;
}

/// Uniform-cost ordering: the priority is the accumulated path cost alone.
///
/// Optimal under non-negative step costs. Uses the bucketed fringe —
/// integer path costs make bucket keys exact.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCost;

impl Strategy for UniformCost {
    fn name(&self) -> &'static str {
        "uniform_cost"
    }

    fn priority(&self, g: u64, _layout: &Layout) -> Result<u64, SearchError> {
        Ok(g)
    }

    fn make_fringe(&self) -> Box<dyn Fringe> {
        Box::new(BucketFringe::new())
    }
}

/// A* ordering: the priority is `g` plus the cycle-decomposition lower
/// bound from the layout to the goal.
///
/// Optimal whenever the bound is admissible. Ties still break by insertion
/// order through the fringe key.
#[derive(Debug, Clone)]
pub struct AStar {
    goal: Layout,
}

impl AStar {
    /// Ordering toward `goal`.
    #[must_use]
    pub fn new(goal: Layout) -> Self {
        Self { goal }
    }
}

impl Strategy for AStar {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn priority(&self, g: u64, layout: &Layout) -> Result<u64, SearchError> {
        Ok(g + heuristic::lower_bound(layout, &self.goal)?)
    }

    fn make_fringe(&self) -> Box<dyn Fringe> {
        Box::new(HeapFringe::new())
    }
}
