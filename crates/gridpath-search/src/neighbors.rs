use gridpath_core::{Grid, Position};

/// Cached neighbor computation helper.
///
/// Enumerates the in-bounds cardinal neighbors of a cell in up, down, left,
/// right order, reusing one buffer across calls.
pub struct Neighbors {
    buf: Vec<Position>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbors of `pos` that lie inside `grid`.
    ///
    /// No wraparound and no diagonals. Cell kinds are not inspected.
    pub fn cardinal(&mut self, pos: Position, grid: &Grid) -> &[Position] {
        self.buf.clear();
        for n in pos.neighbors_4() {
            if grid.contains(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

/// The in-bounds cardinal neighbors of `pos`, in up, down, left, right order.
pub fn neighbors(pos: Position, grid: &Grid) -> Vec<Position> {
    Neighbors::new().cardinal(pos, grid).to_vec()
}
