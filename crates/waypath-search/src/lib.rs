//! Shortest-path search for interactive applications.
//!
//! The crate is built around three pieces:
//!
//! - a [`WeightedGraph`] answering "who are the neighbors of L, and what does a
//!   step cost",
//! - a [`Frontier`] ordering the locations still to explore,
//! - the [`AStar`] engine that relaxes costs until the goal is popped.
//!
//! [`SquareGrid`] is the reference graph: a four-connected grid with walls and
//! forests. Any other topology (hex grids, waypoint graphs, navmeshes) plugs
//! into the same engine by implementing [`WeightedGraph`] for its own
//! location type.
//!
//! The engine owns and reuses its maps and frontier, so repeated queries do
//! not reallocate after warm-up.
//!
//! ```
//! use waypath_core::Point;
//! use waypath_search::{AStar, SearchOptions, SquareGrid, Status};
//!
//! let grid = SquareGrid::new(10, 10);
//! let mut astar = AStar::new(&grid);
//! let (start, goal) = (Point::new(0, 0), Point::new(9, 9));
//! let status = astar.search(&grid, start, goal, SearchOptions::default()).unwrap();
//! assert_eq!(status, Status::Reached);
//! assert_eq!(astar.cost_so_far(goal), Some(18.0));
//! assert_eq!(astar.path(start, goal).unwrap().len(), 19);
//! ```

mod astar;
mod distance;
mod error;
mod frontier;
mod grid;
mod options;
mod path;
mod traits;

pub use astar::AStar;
pub use distance::{Heuristic, Manhattan, Zero, manhattan};
pub use error::{GridError, PathError};
pub use frontier::{Frontier, HeapFrontier, ScanFrontier};
pub use grid::{FLOOR_COST, FOREST_COST, SquareGrid};
pub use options::{SearchOptions, Status};
pub use traits::{Location, WeightedGraph};
