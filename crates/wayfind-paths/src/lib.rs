//! A* shortest-path search over 2D occupancy grids.
//!
//! The search moves in all eight directions, charges the Euclidean length of
//! each step, and ranks candidates by `f = g + h` with a Euclidean
//! heuristic. Its pieces are usable on their own:
//!
//! - [`Frontier`], a binary min-heap keyed by `f` score
//! - [`Search`], the step-wise engine with its [`SearchState`] machine
//! - [`reconstruct`], which turns the arena's parent links into a [`Path`]
//!
//! Most callers only need [`astar_path`]:
//!
//! ```
//! use wayfind_core::{Grid, Point};
//! use wayfind_paths::astar_path;
//!
//! let grid = Grid::new(3, 3).unwrap();
//! let outcome = astar_path(&grid, Point::new(0, 0), Point::new(2, 2)).unwrap();
//! let path = outcome.path().unwrap();
//! assert_eq!(path.len(), 3);
//! assert!((path.cost() - 2.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
//! ```

mod distance;
mod error;
mod frontier;
mod neighbors;
mod node;
mod path;
mod search;
mod traits;

pub use distance::{chebyshev, euclidean};
pub use error::{Endpoint, InvalidReason, PathError};
pub use frontier::{Frontier, FrontierEntry};
pub use neighbors::Neighbors;
pub use node::{Node, NodeId};
pub use path::{Path, PathNode, reconstruct};
pub use search::{Search, SearchOutcome, SearchState, SearchStats, astar_path};
pub use traits::Pather;
