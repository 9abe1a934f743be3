//! Search errors.

use std::fmt;

use gridpath_core::Position;

/// One of the two cells a search runs between.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Errors reported by a search run.
///
/// Not finding a path is not an error; see
/// [`SearchResult::NotFound`](crate::SearchResult::NotFound).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The endpoint is absent from the grid (or lies outside it). Reported
    /// before the grid is touched.
    MissingEndpoint(Endpoint),
    /// The endpoint cell is a wall, which no path may enter. Reported before
    /// the grid is touched.
    WallEndpoint(Endpoint),
    /// More than one cell holds the endpoint, so the search target is
    /// ambiguous. Reported before the grid is touched.
    DuplicateEndpoint { endpoint: Endpoint, count: usize },
    /// Following parent links back from `end` did not reach the start
    /// within `steps` steps: the chain is broken or cyclic.
    MalformedParentChain { end: Position, steps: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEndpoint(e) => write!(f, "search: no {e} cell on the grid"),
            Self::WallEndpoint(e) => write!(f, "search: the {e} cell is a wall"),
            Self::DuplicateEndpoint { endpoint, count } => {
                write!(f, "search: {count} {endpoint} cells on the grid, expected one")
            }
            Self::MalformedParentChain { end, steps } => write!(
                f,
                "search: parent chain from {end} does not reach the start after {steps} steps"
            ),
        }
    }
}

impl std::error::Error for SearchError {}
