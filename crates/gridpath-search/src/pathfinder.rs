use gridpath_core::{Grid, NodeType, Position};
use log::debug;

use crate::algorithm::Algorithm;
use crate::config::{SearchConfig, StaleMarks};
use crate::error::{Endpoint, SearchError};
use crate::result::SearchResult;
use crate::scratch::Scratch;
use crate::traversal::{paint_path, reconstruct_path, require_endpoints};
use crate::{astar, bfs, dfs, dijkstra};

/// Runs searches over a grid, reusing its scratch tables between runs.
///
/// Each run goes `Idle → Running → Found | NotFound` synchronously: the grid
/// is borrowed for the call only, and nothing of it is retained afterwards
/// except the list of cells the run marked.
#[derive(Debug, Default)]
pub struct Pathfinder {
    config: SearchConfig,
    scratch: Scratch,
}

impl Pathfinder {
    /// Create a pathfinder with the given options.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            scratch: Scratch::default(),
        }
    }

    /// The options in use.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the options used by later runs.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Cells marked `Visited` by the last run, in the order they were
    /// marked. Hosts can replay this to animate the exploration.
    pub fn visited(&self) -> &[Position] {
        &self.scratch.visited
    }

    /// Locate the grid's `Start` and `End` cells and search between them.
    ///
    /// Endpoint errors are returned before the grid is modified.
    pub fn run(
        &mut self,
        grid: &mut Grid,
        algorithm: Algorithm,
    ) -> Result<SearchResult, SearchError> {
        let (start, end) = require_endpoints(grid)?;
        self.run_between(algorithm, grid, start, end)
    }

    /// Search between two explicit cells.
    ///
    /// Both must lie inside the grid; an outside position is reported as a
    /// missing endpoint. A wall at either position is rejected as well.
    pub fn run_between(
        &mut self,
        algorithm: Algorithm,
        grid: &mut Grid,
        start: Position,
        end: Position,
    ) -> Result<SearchResult, SearchError> {
        if !grid.contains(start) {
            return Err(SearchError::MissingEndpoint(Endpoint::Start));
        }
        if !grid.contains(end) {
            return Err(SearchError::MissingEndpoint(Endpoint::End));
        }
        for (endpoint, pos) in [(Endpoint::Start, start), (Endpoint::End, end)] {
            if grid.kind(pos) == Some(NodeType::Wall) {
                return Err(SearchError::WallEndpoint(endpoint));
            }
        }

        if self.config.stale_marks == StaleMarks::Clear {
            grid.clear_search_marks();
        }
        self.scratch.reset(grid.len());
        debug!("{algorithm}: searching {start} -> {end}");

        let found = start == end
            || match algorithm {
                Algorithm::Bfs => bfs::explore(grid, start, end, &mut self.scratch),
                Algorithm::Dfs => dfs::explore(grid, start, end, &mut self.scratch),
                Algorithm::Dijkstra => dijkstra::explore(grid, start, end, &mut self.scratch),
                Algorithm::AStar => astar::explore(grid, start, end, &mut self.scratch),
            };
        self.scratch.merge_into(grid);

        if !found {
            debug!(
                "{algorithm}: no path, {} cells visited",
                self.scratch.visited.len()
            );
            return Ok(SearchResult::NotFound);
        }

        let path = reconstruct_path(grid, start, end)?;
        if self.config.paint_path {
            paint_path(grid, &path);
        }
        debug!(
            "{algorithm}: found {} moves, {} cells visited",
            path.len() - 1,
            self.scratch.visited.len()
        );
        Ok(SearchResult::Found(path))
    }
}

/// Run `algorithm` once on `grid` with the default options.
pub fn run_search(grid: &mut Grid, algorithm: Algorithm) -> Result<SearchResult, SearchError> {
    Pathfinder::default().run(grid, algorithm)
}
