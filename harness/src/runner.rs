//! Front-end runners: parse two layouts, solve, print the contract.
//!
//! Both runners read exactly two lines — the start and goal sequences —
//! from the supplied reader. The uniform-cost runner prints every layout on
//! the solution path followed by the total cost; the A* runner prints the
//! total cost alone. An unreachable goal prints `no solution found`.
//! Runners take `impl BufRead` / `impl Write` so tests drive them against
//! in-memory buffers.

use std::io::{BufRead, Write};

use tracing::debug;

use swapcost_kernel::error::ParseError;
use swapcost_kernel::layout::Layout;
use swapcost_search::error::SearchError;
use swapcost_search::solver::{solve, SearchOutcome};
use swapcost_search::strategy::{AStar, Strategy, UniformCost};

/// Error during a front-end run.
#[derive(Debug)]
pub enum RunError {
    /// Reading the input or writing the output failed.
    Io(std::io::Error),
    /// The input ended before both layout lines were read.
    MissingLine { which: &'static str },
    /// A layout line failed integer parsing.
    Parse(ParseError),
    /// The solver rejected the problem.
    Search(SearchError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {err}"),
            Self::MissingLine { which } => write!(f, "missing {which} line on input"),
            Self::Parse(err) => write!(f, "{err}"),
            Self::Search(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<std::io::Error> for RunError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ParseError> for RunError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<SearchError> for RunError {
    fn from(err: SearchError) -> Self {
        Self::Search(err)
    }
}

/// How a solved run is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    /// Every path layout on its own line, then the total cost.
    PathAndCost,
    /// The total cost alone.
    CostOnly,
}

/// Read one layout line, tagged for error reporting.
fn read_layout(input: &mut impl BufRead, which: &'static str) -> Result<Layout, RunError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(RunError::MissingLine { which });
    }
    Ok(Layout::parse(&line)?)
}

fn render(
    out: &mut impl Write,
    outcome: &SearchOutcome,
    mode: OutputMode,
) -> Result<(), RunError> {
    match &outcome.solution {
        None => writeln!(out, "no solution found")?,
        Some(solution) => {
            if mode == OutputMode::PathAndCost {
                for layout in &solution.path {
                    writeln!(out, "{layout}")?;
                }
            }
            writeln!(out, "{}", solution.total_cost)?;
        }
    }
    Ok(())
}

fn run(
    input: &mut impl BufRead,
    out: &mut impl Write,
    strategy: &dyn Strategy,
    mode: OutputMode,
) -> Result<(), RunError> {
    let start = read_layout(input, "start")?;
    let goal = read_layout(input, "goal")?;
    let outcome = solve(start, &goal, strategy)?;
    debug!(
        strategy = strategy.name(),
        solved = outcome.solution.is_some(),
        expansions = outcome.stats.expansions,
        "run complete"
    );
    render(out, &outcome, mode)
}

/// Uniform-cost front-end body.
///
/// # Errors
///
/// Fails on I/O errors, a missing input line, or a malformed integer token.
pub fn run_uniform_cost(input: &mut impl BufRead, out: &mut impl Write) -> Result<(), RunError> {
    run(input, out, &UniformCost, OutputMode::PathAndCost)
}

/// A* front-end body.
///
/// # Errors
///
/// Fails on I/O errors, a missing input line, a malformed integer token, or
/// a start/goal pair that is not a permutation of one multiset (the
/// heuristic's precondition).
pub fn run_astar(input: &mut impl BufRead, out: &mut impl Write) -> Result<(), RunError> {
    let start = read_layout(input, "start")?;
    let goal = read_layout(input, "goal")?;
    let strategy = AStar::new(goal.clone());
    let outcome = solve(start, &goal, &strategy)?;
    debug!(
        strategy = strategy.name(),
        solved = outcome.solution.is_some(),
        expansions = outcome.stats.expansions,
        "run complete"
    );
    render(out, &outcome, OutputMode::CostOnly)
}
