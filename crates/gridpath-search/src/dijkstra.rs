use std::collections::BinaryHeap;

use gridpath_core::{Grid, NodeType, Position};
use log::trace;

use crate::algorithm::{Algorithm, Strategy};
use crate::neighbors::Neighbors;
use crate::scratch::{QueueEntry, Scratch};

/// Uniform-cost (Dijkstra) search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Dijkstra;

impl Strategy for Dijkstra {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
    }
}

/// Cost of one cardinal move.
const STEP_COST: i32 = 1;

/// Uniform-cost search from `start` towards `end`.
///
/// Entries superseded by a cheaper relaxation stay in the queue and are
/// dropped when popped. A cell is marked when it is relaxed. The search
/// stops when `end` is relaxed, without queueing it.
pub(crate) fn explore(grid: &Grid, start: Position, end: Position, scratch: &mut Scratch) -> bool {
    let Some(si) = grid.index(start) else {
        return false;
    };
    scratch.cost[si] = 0;

    let mut open = BinaryHeap::from([QueueEntry {
        priority: 0,
        pos: start,
    }]);
    let mut nbrs = Neighbors::new();

    while let Some(current) = open.pop() {
        let Some(ci) = grid.index(current.pos) else {
            continue;
        };
        if current.priority > scratch.cost[ci] {
            trace!("dijkstra: dropping stale entry {} at {}", current.pos, current.priority);
            continue;
        }
        let distance = scratch.cost[ci];

        for &np in nbrs.cardinal(current.pos, grid) {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if grid.kind(np) == Some(NodeType::Wall) {
                continue;
            }
            let tentative = distance + STEP_COST;
            if tentative >= scratch.cost[ni] {
                continue;
            }
            if np == end {
                scratch.parent[ni] = Some(current.pos);
                return true;
            }
            scratch.cost[ni] = tentative;
            scratch.parent[ni] = Some(current.pos);
            scratch.visit(ni, np);
            open.push(QueueEntry {
                priority: tentative,
                pos: np,
            });
        }
    }
    false
}
