//! Editing rules for painting walls and endpoints.
//!
//! The host decides *where* the user clicked; these rules decide what a
//! given [`Tool`] may change in the cell under the cursor.

use crate::geom::Position;
use crate::grid::Grid;
use crate::node::NodeType;

/// An editor tool.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tool {
    /// Draws walls on empty cells.
    Pencil,
    /// Removes walls and endpoints.
    Eraser,
    /// Places the single start cell.
    StartFlag,
    /// Places the single end cell.
    EndFlag,
}

impl Grid {
    /// Apply `tool` to the cell at `pos`. Returns `true` if the cell changed.
    ///
    /// Search marks (`Visited`/`Path`) are never touched by a tool; the
    /// editor clears them with [`Grid::clear`] or
    /// [`Grid::clear_search_marks`].
    pub fn apply_tool(&mut self, pos: Position, tool: Tool) -> bool {
        let Some(kind) = self.kind(pos) else {
            return false;
        };
        let next = match (tool, kind) {
            (Tool::Pencil, NodeType::Empty) => NodeType::Wall,
            (Tool::Eraser, NodeType::Wall | NodeType::Start | NodeType::End) => NodeType::Empty,
            (Tool::StartFlag, NodeType::Empty) if !self.has_start() => NodeType::Start,
            (Tool::EndFlag, NodeType::Empty) if !self.has_end() => NodeType::End,
            _ => return false,
        };
        self.set_type(pos, next);
        true
    }

    /// Apply `tool` along the straight line from `from` to `to` (both
    /// inclusive), as when the cursor moves several cells between two
    /// samples. Cells outside the grid are skipped. Returns the number of
    /// cells that changed.
    pub fn stroke(&mut self, from: Position, to: Position, tool: Tool) -> usize {
        line(from, to)
            .into_iter()
            .filter(|&p| self.apply_tool(p, tool))
            .count()
    }
}

/// Bresenham line between two positions, endpoints included.
fn line(from: Position, to: Position) -> Vec<Position> {
    let dc = (to.col - from.col).abs();
    let dr = (to.row - from.row).abs();
    let sc = if from.col < to.col { 1 } else { -1 };
    let sr = if from.row < to.row { 1 } else { -1 };

    let mut err = dc - dr;
    let mut cur = from;
    let mut out = Vec::with_capacity((dc.max(dr) + 1) as usize);
    loop {
        out.push(cur);
        if cur == to {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dr {
            err -= dr;
            cur.col += sc;
        }
        if e2 < dc {
            err += dc;
            cur.row += sr;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pencil_only_draws_on_empty() {
        let mut g = Grid::parse("S..").unwrap();
        assert!(g.apply_tool(Position::new(0, 1), Tool::Pencil));
        assert!(!g.apply_tool(Position::new(0, 1), Tool::Pencil));
        assert!(!g.apply_tool(Position::new(0, 0), Tool::Pencil));
        assert_eq!(g.to_string(), "S#.");
    }

    #[test]
    fn eraser_clears_walls_and_endpoints() {
        let mut g = Grid::parse("S#Eo").unwrap();
        for col in 0..4 {
            g.apply_tool(Position::new(0, col), Tool::Eraser);
        }
        assert_eq!(g.to_string(), "...o");
    }

    #[test]
    fn flags_are_unique() {
        let mut g = Grid::new(1, 4);
        assert!(g.apply_tool(Position::new(0, 0), Tool::StartFlag));
        assert!(!g.apply_tool(Position::new(0, 1), Tool::StartFlag));
        assert!(g.apply_tool(Position::new(0, 3), Tool::EndFlag));
        assert!(!g.apply_tool(Position::new(0, 2), Tool::EndFlag));
        assert_eq!(g.to_string(), "S..E");
        assert!(!g.apply_tool(Position::new(3, 3), Tool::Pencil));
    }

    #[test]
    fn stroke_fills_gaps() {
        let mut g = Grid::new(5, 5);
        let changed = g.stroke(Position::new(0, 0), Position::new(4, 4), Tool::Pencil);
        assert_eq!(changed, 5);
        for i in 0..5 {
            assert_eq!(g.kind(Position::new(i, i)), Some(NodeType::Wall));
        }
    }

    #[test]
    fn stroke_is_continuous() {
        let pts = line(Position::new(0, 0), Position::new(2, 6));
        assert_eq!(pts.first(), Some(&Position::new(0, 0)));
        assert_eq!(pts.last(), Some(&Position::new(2, 6)));
        for w in pts.windows(2) {
            assert!((w[1].row - w[0].row).abs() <= 1);
            assert!((w[1].col - w[0].col).abs() <= 1);
        }
    }

    #[test]
    fn stroke_skips_out_of_bounds() {
        let mut g = Grid::new(2, 2);
        let changed = g.stroke(Position::new(0, -2), Position::new(0, 1), Tool::Pencil);
        assert_eq!(changed, 2);
        assert_eq!(g.to_string(), "##\n..");
    }
}
