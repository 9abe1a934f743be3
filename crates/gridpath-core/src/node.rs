//! The [`Node`] type — one grid cell's search-relevant state.

use crate::geom::Position;

/// What a cell currently is, for both editing and rendering.
///
/// `Wall`, `Start` and `End` are durable: only the editor changes them.
/// `Visited` and `Path` are marks left behind by a search run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeType {
    #[default]
    Empty,
    Wall,
    Start,
    End,
    Visited,
    Path,
}

impl NodeType {
    /// Whether this is the `Start` or `End` cell.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }

    /// Whether this is a mark left by a previous search (`Visited`/`Path`).
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Visited | Self::Path)
    }

    /// Character used by the ASCII map format.
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Visited => 'o',
            Self::Path => '*',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Empty),
            '#' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            'o' => Some(Self::Visited),
            '*' => Some(Self::Path),
            _ => None,
        }
    }
}

/// A single grid cell.
///
/// `parent` records which cell discovered this one during the most recent
/// search. It is a plain coordinate, never an owning link, and may be stale
/// after the grid is edited.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub kind: NodeType,
    pub parent: Option<Position>,
}

impl Node {
    /// A node of the given kind with no parent.
    #[inline]
    pub const fn new(kind: NodeType) -> Self {
        Self { kind, parent: None }
    }
}
