//! Helpers shared by every strategy: endpoint lookup, path reconstruction
//! and path painting. None of them carry any search policy.

use log::warn;

use gridpath_core::{Grid, NodeType, Position};

use crate::error::{Endpoint, SearchError};

/// Find the first `Start` and `End` cells in row-major order.
///
/// Either may be absent. When an endpoint appears more than once the first
/// occurrence wins, not the last; [`require_endpoints`] rejects duplicates
/// instead, and is what searches use.
pub fn locate_endpoints(grid: &Grid) -> (Option<Position>, Option<Position>) {
    let mut start = None;
    let mut end = None;
    for (pos, node) in grid.iter() {
        match node.kind {
            NodeType::Start if start.is_none() => start = Some(pos),
            NodeType::End if end.is_none() => end = Some(pos),
            _ => {}
        }
    }
    (start, end)
}

/// Find the unique `Start` and `End` cells.
///
/// Fails with [`SearchError::MissingEndpoint`] if either is absent and with
/// [`SearchError::DuplicateEndpoint`] if either appears more than once.
pub fn require_endpoints(grid: &Grid) -> Result<(Position, Position), SearchError> {
    let (start, end) = locate_endpoints(grid);
    let start = start.ok_or(SearchError::MissingEndpoint(Endpoint::Start))?;
    let end = end.ok_or(SearchError::MissingEndpoint(Endpoint::End))?;
    for (endpoint, kind) in [(Endpoint::Start, NodeType::Start), (Endpoint::End, NodeType::End)] {
        let count = grid.count(kind);
        if count > 1 {
            return Err(SearchError::DuplicateEndpoint { endpoint, count });
        }
    }
    Ok((start, end))
}

/// Walk parent links from `end` back to `start` and return the path in
/// start-to-end order, both included.
///
/// A chain that hits a cell without a parent, leaves the grid, or takes more
/// steps than the grid has cells yields
/// [`SearchError::MalformedParentChain`].
pub fn reconstruct_path(
    grid: &Grid,
    start: Position,
    end: Position,
) -> Result<Vec<Position>, SearchError> {
    let max_steps = grid.len();
    let mut path = vec![end];
    let mut cur = end;
    let mut steps = 0;
    while cur != start {
        let parent = grid.at(cur).and_then(|n| n.parent);
        let Some(parent) = parent.filter(|_| steps < max_steps) else {
            warn!("parent chain from {end} broke at {cur} after {steps} steps");
            return Err(SearchError::MalformedParentChain { end, steps });
        };
        path.push(parent);
        cur = parent;
        steps += 1;
    }
    path.reverse();
    Ok(path)
}

/// Mark every cell of `path` as `Path`, except endpoints and walls.
pub fn paint_path(grid: &mut Grid, path: &[Position]) {
    for &pos in path {
        match grid.kind(pos) {
            Some(kind) if !kind.is_endpoint() && kind != NodeType::Wall => {
                grid.set_type(pos, NodeType::Path)
            }
            _ => {}
        }
    }
}
