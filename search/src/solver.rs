//! Search entry point and expansion loop.

use std::collections::HashMap;

use tracing::debug;

use swapcost_kernel::fingerprint::Fingerprint;
use swapcost_kernel::layout::Layout;

use crate::error::SearchError;
use crate::node::{FringeKey, NodeId, SearchNode};
use crate::strategy::Strategy;

/// A reconstructed root-to-goal path with its total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Layouts from the start to the goal, inclusive.
    pub path: Vec<Layout>,
    /// Accumulated cost of the goal node.
    pub total_cost: u64,
}

/// Counters describing one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Nodes expanded (closed-set inserts). Each layout is expanded at most
    /// once, so this never exceeds the number of distinct layouts reached.
    pub expansions: u64,
    /// Successor nodes admitted to the fringe.
    pub generated: u64,
    /// Stale pops discarded against the open map.
    pub obsolete_skipped: u64,
    /// Largest fringe size observed, stale entries included.
    pub frontier_peak: u64,
}

/// Result of a solve: the optional solution plus its counters.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// `None` when the goal is unreachable from the start.
    pub solution: Option<Solution>,
    /// Counters for the run.
    pub stats: SolveStats,
}

/// Run best-first search from `start` toward `goal` under `strategy`.
///
/// Nodes pop in non-decreasing priority; equal priorities pop in insertion
/// order. The goal test happens at pop time, so the first goal popped is
/// final under the strategy's ordering. A layout is expanded at most once:
/// closed entries are never replaced, and a cheaper route found while a
/// layout is still open supersedes the stale node lazily — the stale entry
/// stays in the fringe and is discarded against the open map when popped.
///
/// Relaxation admits a successor only if its layout is not closed and
/// either not open or open at strictly higher `g`.
///
/// # Errors
///
/// Surfaces strategy errors; for A* that is a start/goal multiset mismatch
/// detected on the first heuristic evaluation.
pub fn solve(
    start: Layout,
    goal: &Layout,
    strategy: &dyn Strategy,
) -> Result<SearchOutcome, SearchError> {
    let mut stats = SolveStats::default();
    let mut arena: Vec<SearchNode> = Vec::new();
    let mut open: HashMap<Fingerprint, NodeId> = HashMap::new();
    let mut closed: HashMap<Fingerprint, NodeId> = HashMap::new();
    let mut fringe = strategy.make_fringe();
    let mut seq: u64 = 0;

    debug!(
        strategy = strategy.name(),
        len = start.len(),
        "search start"
    );

    let root_priority = strategy.priority(0, &start)?;
    let root_fp = start.fingerprint();
    arena.push(SearchNode {
        layout: start,
        fingerprint: root_fp,
        parent: None,
        g: 0,
        seq,
    });
    open.insert(root_fp, 0);
    fringe.insert(
        FringeKey {
            priority: root_priority,
            seq,
        },
        0,
    );
    seq += 1;
    stats.frontier_peak = 1;

    while let Some(id) = fringe.pop_min() {
        let fp = arena[id].fingerprint;

        // A popped node is current only while the open map still points at
        // it; anything else was superseded by a cheaper route.
        if open.get(&fp) != Some(&id) {
            stats.obsolete_skipped += 1;
            continue;
        }
        open.remove(&fp);

        if arena[id].layout.is_goal(goal) {
            let solution = reconstruct(&arena, id);
            debug!(
                strategy = strategy.name(),
                total_cost = solution.total_cost,
                expansions = stats.expansions,
                generated = stats.generated,
                "goal reached"
            );
            return Ok(SearchOutcome {
                solution: Some(solution),
                stats,
            });
        }

        closed.insert(fp, id);
        stats.expansions += 1;

        let parent_g = arena[id].g;
        for child in arena[id].layout.children() {
            let child_fp = child.fingerprint();
            if closed.contains_key(&child_fp) {
                continue;
            }
            let g = parent_g + child.step_cost();
            if let Some(&existing) = open.get(&child_fp) {
                if arena[existing].g <= g {
                    continue;
                }
            }
            let priority = strategy.priority(g, &child)?;
            let node_id = arena.len();
            arena.push(SearchNode {
                layout: child,
                fingerprint: child_fp,
                parent: Some(id),
                g,
                seq,
            });
            open.insert(child_fp, node_id);
            fringe.insert(FringeKey { priority, seq }, node_id);
            seq += 1;
            stats.generated += 1;
            if fringe.len() as u64 > stats.frontier_peak {
                stats.frontier_peak = fringe.len() as u64;
            }
        }
    }

    debug!(
        strategy = strategy.name(),
        expansions = stats.expansions,
        "fringe exhausted without reaching goal"
    );
    Ok(SearchOutcome {
        solution: None,
        stats,
    })
}

/// Walk parent links from `goal_id` back to the root.
fn reconstruct(arena: &[SearchNode], goal_id: NodeId) -> Solution {
    let mut path = Vec::new();
    let mut cursor = Some(goal_id);
    while let Some(id) = cursor {
        path.push(arena[id].layout.clone());
        cursor = arena[id].parent;
    }
    path.reverse();
    Solution {
        path,
        total_cost: arena[goal_id].g,
    }
}
