//! Graph search over gridpath grids.
//!
//! This crate runs one of four interchangeable strategies between the
//! `Start` and `End` cells of a [`Grid`](gridpath_core::Grid):
//!
//! - **BFS** — FIFO frontier, fewest moves ([`Algorithm::Bfs`])
//! - **DFS** — LIFO frontier, exploration-order demo ([`Algorithm::Dfs`])
//! - **Dijkstra** — uniform-cost relaxation with lazy deletion ([`Algorithm::Dijkstra`])
//! - **A\*** — Manhattan-guided, fewest moves ([`Algorithm::AStar`])
//!
//! A run marks the cells it explored as `Visited`, links each reached cell
//! to the cell that discovered it, and on success paints the path. Runs are
//! synchronous and single-threaded. Marks from an earlier run stay on the
//! grid until the host calls
//! [`Grid::clear_search_marks`](gridpath_core::Grid::clear_search_marks),
//! unless [`StaleMarks::Clear`] is configured.
//!
//! ```
//! use gridpath_core::Grid;
//! use gridpath_search::{Algorithm, run_search};
//!
//! let mut grid = Grid::parse("S.\n.E").unwrap();
//! let result = run_search(&mut grid, Algorithm::Bfs).unwrap();
//! assert_eq!(result.moves(), 2);
//! ```

mod algorithm;
mod astar;
mod bfs;
mod config;
mod dfs;
mod dijkstra;
mod error;
mod neighbors;
mod pathfinder;
mod result;
mod scratch;
mod traversal;

pub use algorithm::{Algorithm, ParseAlgorithmError, Strategy};
pub use astar::AStar;
pub use bfs::Bfs;
pub use config::{SearchConfig, StaleMarks};
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use error::{Endpoint, SearchError};
pub use neighbors::{Neighbors, neighbors};
pub use pathfinder::{Pathfinder, run_search};
pub use result::SearchResult;
pub use traversal::{locate_endpoints, paint_path, reconstruct_path, require_endpoints};
