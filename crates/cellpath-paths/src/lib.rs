//! Minimum-weight paths on weighted grids.
//!
//! A [`GridGraph`] is built once from per-cell weights: every cell is a node,
//! and a cell of positive weight `w` gets a directed edge of weight `w` to
//! each of its four cardinal neighbours. Zero-weight cells are walls: they
//! can be entered but never left.
//!
//! [`ShortestPath`] runs a single-source Dijkstra search over that graph and
//! reconstructs the route to a target:
//!
//! - **Linear scan** ([`Selection::LinearScan`], the default) picks the next
//!   node by scanning the whole cost table.
//! - **Binary heap** ([`Selection::BinaryHeap`]) keeps a min-heap frontier.
//!
//! Both process every reachable node before reconstruction and agree on path
//! costs.
//!
//! ```
//! use cellpath_core::{Grid, Point};
//! use cellpath_paths::{GridGraph, ShortestPath};
//!
//! let grid = Grid::from_rows(&[[1, 2], [3, 4]]).unwrap();
//! let graph = GridGraph::build(&grid);
//! let path = ShortestPath::new(&graph).search(Point::new(0, 0), Point::new(1, 1));
//! assert_eq!(path.cost(), Some(3));
//! ```

mod graph;
mod path;
mod search;
mod state;
mod traits;

pub use graph::{Edge, GridGraph, build};
pub use path::{Path, path_cost};
pub use search::{Selection, ShortestPath, shortest_path};
pub use state::{Cost, CostTable, SearchState, UNREACHABLE};
pub use traits::{CellWeights, FnWeights};
