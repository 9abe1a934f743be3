//! The [`Algorithm`] selector and the [`Strategy`] capability.

use std::fmt;
use std::str::FromStr;

use gridpath_core::{Grid, Position};

use crate::astar::AStar;
use crate::bfs::Bfs;
use crate::dfs::Dfs;
use crate::dijkstra::Dijkstra;
use crate::error::SearchError;
use crate::pathfinder::Pathfinder;
use crate::result::SearchResult;

/// Which search strategy to run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// Every algorithm, in selector order.
    pub const ALL: [Algorithm; 4] = [Self::Bfs, Self::Dfs, Self::Dijkstra, Self::AStar];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        }
    }

    /// The next algorithm in selector order, wrapping around.
    pub const fn next(self) -> Self {
        match self {
            Self::Bfs => Self::Dfs,
            Self::Dfs => Self::Dijkstra,
            Self::Dijkstra => Self::AStar,
            Self::AStar => Self::Bfs,
        }
    }

    /// The previous algorithm in selector order, wrapping around.
    pub const fn prev(self) -> Self {
        match self {
            Self::Bfs => Self::AStar,
            Self::Dfs => Self::Bfs,
            Self::Dijkstra => Self::Dfs,
            Self::AStar => Self::Dijkstra,
        }
    }

    /// The strategy implementing this algorithm.
    pub fn strategy(self) -> &'static dyn Strategy {
        match self {
            Self::Bfs => &Bfs,
            Self::Dfs => &Dfs,
            Self::Dijkstra => &Dijkstra,
            Self::AStar => &AStar,
        }
    }

    /// Whether the strategy always returns a path with the fewest moves.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Self::Dfs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a*" => Ok(Self::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Returned when a string names no known algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected bfs, dfs, dijkstra or astar)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

/// A search strategy that can be run between two cells of a grid.
///
/// Constructing a strategy does nothing; the search happens in
/// [`run`](Strategy::run), which borrows the grid only for the call.
pub trait Strategy {
    /// The algorithm this strategy implements.
    fn algorithm(&self) -> Algorithm;

    /// Search from `start` to `end`, leaving `Visited` marks and, on
    /// success, the painted path on `grid`.
    fn run(
        &self,
        grid: &mut Grid,
        start: Position,
        end: Position,
    ) -> Result<SearchResult, SearchError> {
        Pathfinder::default().run_between(self.algorithm(), grid, start, end)
    }
}

impl Strategy for Algorithm {
    fn algorithm(&self) -> Algorithm {
        *self
    }
}
