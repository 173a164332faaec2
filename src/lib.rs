//! # maze_walker
//!
//! Shortest-path search for an agent walking a square grid maze, and a tick-driven walker that
//! follows the result. Paths are computed with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) under the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry), with
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) and a
//! [right-hand wall follower](https://en.wikipedia.org/wiki/Maze-solving_algorithm#Wall_follower)
//! as alternatives. Note that this assumes a uniform-cost grid with 4-directional movement.
//!
//! The A* open list is a [PriorityQueue](heap::PriorityQueue) ordered by an injected
//! [Comparator](heap::Comparator). Mazes reach the solvers through the [MazeGrid](grid::MazeGrid)
//! trait; [TileGrid](grid::TileGrid) is the bundled implementation, which can also pre-compute
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) to answer
//! reachability questions without searching.
use std::time::Duration;

pub mod direction;
pub mod grid;
pub mod heap;
pub mod solver;
pub mod walker;

pub use direction::Direction;
pub use grid_util::point::Point;
pub use grid::{GridError, MazeGrid, MazeProvider, Tile, TileGrid};
pub use heap::{EmptyQueueError, PriorityQueue};
pub use solver::{is_valid_path, GridSolver, PathError, Strategy};
pub use walker::{PathWalker, WalkerConfig};

/// Time that has to pass between two steps of a walker unless configured otherwise.
pub const DEFAULT_MOVE_INTERVAL: Duration = Duration::from_millis(10);
/// Frame time of a host loop running at 30 frames per second.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(1000 / 30);
