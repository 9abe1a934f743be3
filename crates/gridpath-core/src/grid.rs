//! The [`Grid`] type — a fixed-size rectangular matrix of [`Node`]s.
//!
//! Unlike a shared-buffer view, a `Grid` owns its cells outright. The editor
//! keeps it for the whole session and lends it mutably to one search at a
//! time.

use std::fmt;

use crate::geom::Position;
use crate::node::{Node, NodeType};

/// A rectangular grid of [`Node`]s, stored row-major.
///
/// Deserialized grids are checked: the node buffer must hold exactly
/// `rows * cols` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    nodes: Vec<Node>,
    rows: i32,
    cols: i32,
}

/// Unchecked wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    nodes: Vec<Node>,
    rows: i32,
    cols: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let RawGrid { nodes, rows, cols } = raw;
        let expected = usize::try_from(rows)
            .ok()
            .zip(usize::try_from(cols).ok())
            .and_then(|(r, c)| r.checked_mul(c));
        if expected != Some(nodes.len()) {
            return Err(GridError::SizeMismatch {
                rows,
                cols,
                len: nodes.len(),
            });
        }
        Ok(Self { nodes, rows, cols })
    }
}

impl Grid {
    /// Create a new grid of the given dimensions, every node `Empty`.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        Self {
            nodes: vec![Node::default(); (rows as usize) * (cols as usize)],
            rows,
            cols,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the grid has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `pos` lies inside the grid.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.row < self.rows && pos.col >= 0 && pos.col < self.cols
    }

    /// Flat row-major index of `pos`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some((pos.row as usize) * (self.cols as usize) + pos.col as usize)
    }

    /// Inverse of [`index`](Self::index). `idx` must be below [`len`](Self::len).
    #[inline]
    pub fn position(&self, idx: usize) -> Position {
        let cols = self.cols as usize;
        Position::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Read the node at `pos`. Returns `None` outside the grid.
    #[inline]
    pub fn at(&self, pos: Position) -> Option<Node> {
        self.index(pos).map(|i| self.nodes[i])
    }

    /// Read only the kind of the node at `pos`.
    #[inline]
    pub fn kind(&self, pos: Position) -> Option<NodeType> {
        self.at(pos).map(|n| n.kind)
    }

    /// Set the kind of the node at `pos`. No-op if `pos` is outside the grid.
    pub fn set_type(&mut self, pos: Position, kind: NodeType) {
        if let Some(i) = self.index(pos) {
            self.nodes[i].kind = kind;
        }
    }

    /// Set the parent link of the node at `pos`. No-op outside the grid.
    pub fn set_parent(&mut self, pos: Position, parent: Option<Position>) {
        if let Some(i) = self.index(pos) {
            self.nodes[i].parent = parent;
        }
    }

    /// Reset every node to `Empty` with no parent (the editor's "clear").
    pub fn clear(&mut self) {
        self.nodes.fill(Node::default());
    }

    /// Drop the marks of previous searches: `Visited`/`Path` become `Empty`
    /// and every parent link is removed. Walls and endpoints are kept.
    pub fn clear_search_marks(&mut self) {
        for node in self.nodes.iter_mut() {
            if node.kind.is_search_mark() {
                node.kind = NodeType::Empty;
            }
            node.parent = None;
        }
    }

    /// Whether a `Start` node exists.
    pub fn has_start(&self) -> bool {
        self.nodes.iter().any(|n| n.kind == NodeType::Start)
    }

    /// Whether an `End` node exists.
    pub fn has_end(&self) -> bool {
        self.nodes.iter().any(|n| n.kind == NodeType::End)
    }

    /// Number of nodes of the given kind.
    pub fn count(&self, kind: NodeType) -> usize {
        self.nodes.iter().filter(|n| n.kind == kind).count()
    }

    /// Row-major list of positions holding `kind`.
    pub fn positions_of(&self, kind: NodeType) -> Vec<Position> {
        self.iter()
            .filter(|(_, n)| n.kind == kind)
            .map(|(p, _)| p)
            .collect()
    }

    /// Row-major iterator over `(Position, Node)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (self.position(i), *n))
    }

    /// Parse an ASCII map.
    ///
    /// Each line is one row; see [`NodeType::glyph`] for the characters.
    /// Leading/trailing whitespace is trimmed from the whole string and from
    /// each line, so maps can be indented in source code.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s.trim().lines().map(str::trim).collect();
        let Some(first) = lines.first() else {
            return Err(GridError::Empty);
        };
        let cols = first.chars().count();
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let mut grid = Grid::new(lines.len() as i32, cols as i32);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridError::InconsistentSize {
                    row: row as i32,
                    expected: cols,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Position::new(row as i32, col as i32);
                let kind = NodeType::from_glyph(ch).ok_or(GridError::InvalidGlyph { ch, pos })?;
                grid.set_type(pos, kind);
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                let kind = self.kind(Position::new(row, col)).unwrap_or_default();
                write!(f, "{}", kind.glyph())?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Errors that can occur when parsing an ASCII map or loading a stored grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The map has no rows or no columns.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentSize {
        row: i32,
        expected: usize,
        found: usize,
    },
    /// A character outside the map alphabet was found.
    InvalidGlyph { ch: char, pos: Position },
    /// Stored dimensions do not describe the stored cells.
    SizeMismatch { rows: i32, cols: i32, len: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: empty map"),
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidGlyph { ch, pos } => {
                write!(f, "grid: invalid glyph \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::SizeMismatch { rows, cols, len } => {
                write!(f, "grid: {len} cells do not fill {rows}x{cols}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "\
        S.#.
        ..#E
        ....";

    #[test]
    fn new_and_dims() {
        let g = Grid::new(3, 4);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.len(), 12);
        assert_eq!(g.count(NodeType::Empty), 12);
        assert!(Grid::new(0, 5).is_empty());
    }

    #[test]
    fn bounds_checked_access() {
        let mut g = Grid::new(2, 3);
        let p = Position::new(1, 2);
        g.set_type(p, NodeType::Wall);
        assert_eq!(g.kind(p), Some(NodeType::Wall));
        assert_eq!(g.at(Position::new(2, 0)), None);
        assert_eq!(g.at(Position::new(0, -1)), None);
        // out of bounds writes are ignored
        g.set_type(Position::new(5, 5), NodeType::Wall);
        assert_eq!(g.count(NodeType::Wall), 1);
    }

    #[test]
    fn index_round_trip() {
        let g = Grid::new(3, 5);
        for i in 0..g.len() {
            assert_eq!(g.index(g.position(i)), Some(i));
        }
        assert_eq!(g.index(Position::new(1, 2)), Some(7));
    }

    #[test]
    fn parse_and_display() {
        let g = Grid::parse(MAP).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.kind(Position::new(0, 0)), Some(NodeType::Start));
        assert_eq!(g.kind(Position::new(1, 3)), Some(NodeType::End));
        assert_eq!(g.positions_of(NodeType::Wall).len(), 2);
        assert_eq!(g.to_string(), "S.#.\n..#E\n....");
        assert_eq!(g.to_string().parse::<Grid>().unwrap(), g);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Grid::parse("   \n "), Err(GridError::Empty));
        assert!(matches!(
            Grid::parse("..\n..."),
            Err(GridError::InconsistentSize { row: 1, expected: 2, found: 3 })
        ));
        assert_eq!(
            Grid::parse("..\n.x"),
            Err(GridError::InvalidGlyph {
                ch: 'x',
                pos: Position::new(1, 1)
            })
        );
    }

    #[test]
    fn clear_search_marks_keeps_durable_cells() {
        let mut g = Grid::parse("So*#E").unwrap();
        g.set_parent(Position::new(0, 1), Some(Position::new(0, 0)));
        g.clear_search_marks();
        assert_eq!(g.to_string(), "S..#E");
        assert!(g.iter().all(|(_, n)| n.parent.is_none()));
    }

    #[test]
    fn clear_resets_everything() {
        let mut g = Grid::parse(MAP).unwrap();
        assert!(g.has_start());
        assert!(g.has_end());
        g.clear();
        assert!(!g.has_start());
        assert!(!g.has_end());
        assert_eq!(g.count(NodeType::Empty), g.len());
    }
}
