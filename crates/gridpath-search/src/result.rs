//! The outcome of one search run.

use gridpath_core::Position;

/// What a search run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchResult {
    /// A path from start to end, both included. Consecutive positions are
    /// one cardinal step apart.
    Found(Vec<Position>),
    /// The frontier ran out before the end was reached.
    NotFound,
}

impl SearchResult {
    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The path, or an empty slice if none was found.
    #[inline]
    pub fn path(&self) -> &[Position] {
        match self {
            Self::Found(path) => path,
            Self::NotFound => &[],
        }
    }

    /// Number of moves along the path (0 when not found).
    #[inline]
    pub fn moves(&self) -> usize {
        self.path().len().saturating_sub(1)
    }

    /// Consume the result, returning the path (empty when not found).
    pub fn into_path(self) -> Vec<Position> {
        match self {
            Self::Found(path) => path,
            Self::NotFound => Vec::new(),
        }
    }
}
