use std::fmt;

use waypath_core::Point;

/// Errors reported by [`AStar`](crate::AStar) searches and path extraction.
///
/// An unreachable goal is *not* an error: it shows up as
/// [`Status::Exhausted`](crate::Status::Exhausted) and an empty path.
#[derive(Debug, Clone, PartialEq)]
pub enum PathError<L> {
    /// The start location is not part of the graph (out of bounds or blocked).
    InvalidStart(L),
    /// The goal location is not part of the graph (out of bounds or blocked).
    InvalidGoal(L),
    /// The graph returned a negative or NaN edge cost.
    InvalidCost { from: L, to: L, cost: f64 },
    /// The predecessor map loops back on itself. Never happens unless the
    /// relaxation invariants were broken.
    PredecessorCycle { goal: L, steps: usize },
}

impl<L: fmt::Debug> fmt::Display for PathError<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStart(l) => write!(f, "invalid start location {l:?}"),
            Self::InvalidGoal(l) => write!(f, "invalid goal location {l:?}"),
            Self::InvalidCost { from, to, cost } => {
                write!(f, "invalid edge cost {cost} from {from:?} to {to:?}")
            }
            Self::PredecessorCycle { goal, steps } => write!(
                f,
                "internal error: predecessor cycle while walking back from {goal:?} ({steps} steps)"
            ),
        }
    }
}

impl<L: fmt::Debug> std::error::Error for PathError<L> {}

/// Errors that can occur when parsing a [`SquareGrid`](crate::SquareGrid)
/// from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row's width differs from the first row's.
    InconsistentSize {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `.`, `#` or `F` was found.
    InvalidRune { ch: char, pos: Point },
    /// A row or column count does not fit grid coordinates.
    TooLarge { line: usize, len: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid: inconsistent size at line {line}: expected {expected} cells, found {found}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::TooLarge { line, len } => {
                write!(f, "grid: dimension {len} at line {line} exceeds coordinate range")
            }
        }
    }
}

impl std::error::Error for GridError {}
