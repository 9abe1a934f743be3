use std::collections::VecDeque;

use gridpath_core::{Grid, NodeType, Position};

use crate::algorithm::{Algorithm, Strategy};
use crate::neighbors::Neighbors;
use crate::scratch::Scratch;

/// Breadth-first search: shortest paths by move count.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Bfs;

impl Strategy for Bfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }
}

/// Breadth-first search from `start` towards `end`.
///
/// Only `Empty` cells are entered; each is marked when it is enqueued. The
/// search stops as soon as `end` shows up among the neighbors of the cell
/// being expanded, before anything else is enqueued. With unit costs the
/// path found has the fewest possible moves.
pub(crate) fn explore(grid: &Grid, start: Position, end: Position, scratch: &mut Scratch) -> bool {
    let Some(si) = grid.index(start) else {
        return false;
    };
    scratch.seen[si] = true;

    let mut queue = VecDeque::from([start]);
    let mut nbrs = Neighbors::new();

    while let Some(cur) = queue.pop_front() {
        for &np in nbrs.cardinal(cur, grid) {
            if grid.kind(np) == Some(NodeType::Wall) {
                continue;
            }
            if np == end {
                if let Some(ei) = grid.index(np) {
                    scratch.parent[ei] = Some(cur);
                }
                return true;
            }
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if scratch.seen[ni] || grid.kind(np) != Some(NodeType::Empty) {
                continue;
            }
            scratch.parent[ni] = Some(cur);
            scratch.visit(ni, np);
            queue.push_back(np);
        }
    }
    false
}
