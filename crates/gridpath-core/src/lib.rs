//! **gridpath-core** — grid model for the pathfinding visualizer.
//!
//! This crate provides the value types shared by the editor and the search
//! strategies: [`Position`], the per-cell [`Node`] state, the rectangular
//! [`Grid`] that owns them, and the editing [`Tool`] rules used to paint
//! walls and endpoints before a search runs.

pub mod edit;
pub mod geom;
pub mod grid;
pub mod node;

pub use edit::Tool;
pub use geom::{Position, manhattan};
pub use grid::{Grid, GridError};
pub use node::{Node, NodeType};
