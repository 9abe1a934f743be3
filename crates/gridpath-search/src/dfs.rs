use gridpath_core::{Grid, NodeType, Position};

use crate::algorithm::{Algorithm, Strategy};
use crate::neighbors::Neighbors;
use crate::scratch::Scratch;

/// Depth-first search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Dfs;

impl Strategy for Dfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }
}

/// Depth-first search from `start` towards `end`.
///
/// Same bookkeeping and early stop as [`bfs`](crate::bfs), with a LIFO
/// frontier. The path found depends only on neighbor order and stack
/// discipline; it is not the shortest in general.
pub(crate) fn explore(grid: &Grid, start: Position, end: Position, scratch: &mut Scratch) -> bool {
    let Some(si) = grid.index(start) else {
        return false;
    };
    scratch.seen[si] = true;

    let mut stack = vec![start];
    let mut nbrs = Neighbors::new();

    while let Some(cur) = stack.pop() {
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
            stack.push(np);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run_search;

    #[test]
    fn follows_the_last_pushed_branch() {
        let mut g = Grid::parse("S..\n...\n..E").unwrap();
        let result = run_search(&mut g, Algorithm::Dfs).unwrap();
        assert_eq!(
            result.path(),
            [
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 2),
                Position::new(2, 2),
            ]
        );
        assert_eq!(g.to_string(), "S**\noo*\n..E");
    }

    #[test]
    fn wanders_on_a_longer_route() {
        // The right-hand branch is pushed last, so DFS runs along the top
        // row and comes down the far side.
        let mut g = Grid::parse("S....\n.###.\nE....").unwrap();
        let result = run_search(&mut g, Algorithm::Dfs).unwrap();
        assert_eq!(result.moves(), 10);
        assert_eq!(g.to_string(), "S****\no###*\nE****");
    }

    #[test]
    fn enclosed_end_is_not_found() {
        let mut g = Grid::parse("S.#.\n..#E").unwrap();
        let result = Dfs.run(&mut g, Position::new(0, 0), Position::new(1, 3)).unwrap();
        assert!(!result.is_found());
        assert_eq!(g.to_string(), "So#.\noo#E");
    }

    #[test]
    fn never_steps_onto_a_wall_target() {
        let g = Grid::parse("S#\n..").unwrap();
        let mut scratch = Scratch::default();
        scratch.reset(g.len());
        assert!(!explore(&g, Position::new(0, 0), Position::new(0, 1), &mut scratch));
        assert_eq!(scratch.parent[1], None);
    }
}
