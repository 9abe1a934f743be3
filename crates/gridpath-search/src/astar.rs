use std::collections::BinaryHeap;

use gridpath_core::{Grid, NodeType, Position, manhattan};
use log::trace;

use crate::algorithm::{Algorithm, Strategy};
use crate::neighbors::Neighbors;
use crate::scratch::{QueueEntry, Scratch};

/// A* search with the Manhattan heuristic.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AStar;

impl Strategy for AStar {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }
}

/// Cost of one cardinal move.
const STEP_COST: i32 = 1;

/// A* search from `start` towards `end` with the Manhattan heuristic.
///
/// The heuristic is admissible and consistent on a 4-connected unit-cost
/// grid, so the path found is a shortest one. Cells are marked when they are
/// expanded (the start excepted), and the search stops when `end` is popped
/// from the queue rather than when it is first relaxed.
pub(crate) fn explore(grid: &Grid, start: Position, end: Position, scratch: &mut Scratch) -> bool {
    let Some(si) = grid.index(start) else {
        return false;
    };
    scratch.cost[si] = 0;

    let mut open = BinaryHeap::from([QueueEntry {
        priority: manhattan(start, end),
        pos: start,
    }]);
    let mut nbrs = Neighbors::new();

    while let Some(current) = open.pop() {
        if current.pos == end {
            return true;
        }
        let Some(ci) = grid.index(current.pos) else {
            continue;
        };
        // Already expanded through a cheaper entry.
        if scratch.seen[ci] {
            trace!("astar: dropping stale entry {} at {}", current.pos, current.priority);
            continue;
        }
        if ci == si {
            scratch.seen[ci] = true;
        } else {
            scratch.visit(ci, current.pos);
        }
        let g = scratch.cost[ci];

        for &np in nbrs.cardinal(current.pos, grid) {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if grid.kind(np) == Some(NodeType::Wall) {
                continue;
            }
            let tentative = g + STEP_COST;
            if tentative >= scratch.cost[ni] {
                continue;
            }
            scratch.cost[ni] = tentative;
            scratch.parent[ni] = Some(current.pos);
            open.push(QueueEntry {
                priority: tentative + manhattan(np, end),
                pos: np,
            });
        }
    }
    false
}
