use std::cmp::Ordering;

use gridpath_core::{Grid, NodeType, Position};

/// Sentinel cost meaning "not reached yet" in the cost table.
pub(crate) const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Priority-queue entry for Dijkstra / A*
// ---------------------------------------------------------------------------

/// A queued cell, ordered so that `BinaryHeap` (a max-heap) pops the lowest
/// `priority` first, ties going to the row-major smallest position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct QueueEntry {
    pub(crate) priority: i32,
    pub(crate) pos: Position,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Scratch
// ---------------------------------------------------------------------------

/// Per-run bookkeeping, kept apart from the grid.
///
/// Strategies read durable cell kinds from the grid and write only here;
/// [`merge_into`](Scratch::merge_into) copies the outcome onto the grid when
/// the run ends. The tables are flat, indexed by [`Grid::index`], and reused
/// across runs by a [`Pathfinder`](crate::Pathfinder).
#[derive(Debug, Default)]
pub(crate) struct Scratch {
    /// Discovery link for every cell the run reached.
    pub(crate) parent: Vec<Option<Position>>,
    /// Enqueued (BFS/DFS), relaxed (Dijkstra) or expanded (A*).
    pub(crate) seen: Vec<bool>,
    /// Best known cost from the start (Dijkstra / A*).
    pub(crate) cost: Vec<i32>,
    /// Cells to mark `Visited`, in the order they were marked.
    pub(crate) visited: Vec<Position>,
}

impl Scratch {
    /// Size every table for a grid of `len` cells and forget the last run.
    pub(crate) fn reset(&mut self, len: usize) {
        self.parent.clear();
        self.parent.resize(len, None);
        self.seen.clear();
        self.seen.resize(len, false);
        self.cost.clear();
        self.cost.resize(len, UNREACHABLE);
        self.visited.clear();
    }

    /// Record `pos` as visited, once.
    #[inline]
    pub(crate) fn visit(&mut self, idx: usize, pos: Position) {
        if !self.seen[idx] {
            self.seen[idx] = true;
            self.visited.push(pos);
        }
    }

    /// Write parent links and `Visited` marks onto `grid`.
    ///
    /// Endpoints and walls keep their kind. Cells this run never reached
    /// keep whatever parent they already had.
    pub(crate) fn merge_into(&self, grid: &mut Grid) {
        for (idx, parent) in self.parent.iter().enumerate() {
            if parent.is_some() {
                grid.set_parent(grid.position(idx), *parent);
            }
        }
        for &pos in &self.visited {
            match grid.kind(pos) {
                Some(NodeType::Start | NodeType::End | NodeType::Wall) | None => {}
                Some(_) => grid.set_type(pos, NodeType::Visited),
            }
        }
    }
}
