//! Serializable solve reports.
//!
//! A report is the artifact surface of one solve: the rendered path, the
//! total cost, and the solver counters. Struct field order is fixed, so a
//! report serializes to the same JSON bytes every time — the determinism
//! tests compare those bytes directly.

use serde::Serialize;

use swapcost_kernel::layout::Layout;
use swapcost_search::solver::SearchOutcome;

/// Solver counters as serialized into a report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportStats {
    pub expansions: u64,
    pub generated: u64,
    pub obsolete_skipped: u64,
    pub frontier_peak: u64,
}

/// A complete solve rendered for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    /// Strategy identifier (`uniform_cost` or `astar`).
    pub strategy: String,
    /// Start layout rendering.
    pub start: String,
    /// Goal layout rendering.
    pub goal: String,
    /// Path layout renderings, root to goal; empty when unsolved.
    pub path: Vec<String>,
    /// Goal-node cost; absent when unsolved.
    pub total_cost: Option<u64>,
    /// Run counters.
    pub stats: ReportStats,
}

impl SolveReport {
    /// Build a report from a finished solve.
    #[must_use]
    pub fn new(strategy: &str, start: &Layout, goal: &Layout, outcome: &SearchOutcome) -> Self {
        let (path, total_cost) = match &outcome.solution {
            Some(solution) => (
                solution.path.iter().map(ToString::to_string).collect(),
                Some(solution.total_cost),
            ),
            None => (Vec::new(), None),
        };
        Self {
            strategy: strategy.to_string(),
            start: start.to_string(),
            goal: goal.to_string(),
            path,
            total_cost,
            stats: ReportStats {
                expansions: outcome.stats.expansions,
                generated: outcome.stats.generated,
                obsolete_skipped: outcome.stats.obsolete_skipped,
                frontier_peak: outcome.stats.frontier_peak,
            },
        }
    }

    /// Deterministic JSON bytes for this report.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization failures.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
