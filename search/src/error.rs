//! Typed search errors.

/// Typed failure for search operations.
///
/// "No solution" is not an error — an unreachable goal is reported as an
/// absent solution by the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Current and goal sequences have different lengths.
    LengthMismatch { current: usize, goal: usize },

    /// A value in the current sequence has no unmatched slot in the goal;
    /// the two layouts are not permutations of the same multiset.
    MultisetMismatch { value: i64, position: usize },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { current, goal } => {
                write!(
                    f,
                    "length mismatch: current has {current} values, goal has {goal}"
                )
            }
            Self::MultisetMismatch { value, position } => {
                write!(
                    f,
                    "multiset mismatch: value {value} at position {position} has no goal slot"
                )
            }
        }
    }
}

impl std::error::Error for SearchError {}
