//! # grid_astar
//!
//! A grid-based pathfinding system. Implements
//! [A* search](https://en.wikipedia.org/wiki/A*_search_algorithm) over
//! rectangular grids of per-cell step costs, using an indexed binary heap
//! frontier that decreases costs in place when a cheaper route to an open
//! position turns up. Every search reports the positions it expanded in
//! closing order next to the path itself, and an unreachable destination is
//! an answer rather than an error. Grids are built in code or loaded from
//! comma-delimited text files.

pub mod cost_grid;
pub mod error;
pub mod frontier;
pub mod loader;
pub mod node;
pub mod result;
pub mod search;

pub use crate::cost_grid::{CostGrid, OBSTACLE_COST};
pub use crate::error::{Result, SearchError};
pub use crate::frontier::Frontier;
pub use crate::loader::{load_grid, parse_grid};
pub use crate::node::SearchNode;
pub use crate::result::SearchResult;
pub use crate::search::{euclidean, PathFinder, SearchState};
