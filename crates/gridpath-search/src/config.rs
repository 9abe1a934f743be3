//! Search configuration.

/// How a run treats `Visited`/`Path` marks left on the grid by an earlier
/// run.
///
/// The host owns the reset: by default nothing is cleared, and the editor is
/// expected to call [`Grid::clear_search_marks`](gridpath_core::Grid::clear_search_marks)
/// before searching again.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StaleMarks {
    /// Reset old marks and parent links before exploring, so a re-run
    /// behaves exactly like a run on a freshly edited grid.
    Clear,
    /// Keep old marks. BFS and DFS only enter `Empty` cells and so treat
    /// them as already expanded; Dijkstra and A* track expansion in their
    /// own cost tables and enter any non-wall cell.
    #[default]
    Expanded,
}

/// Options for a [`Pathfinder`](crate::Pathfinder).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub stale_marks: StaleMarks,
    /// Mark the interior of a found path as `Path`.
    pub paint_path: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            stale_marks: StaleMarks::Expanded,
            paint_path: true,
        }
    }
}
