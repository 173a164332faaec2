use grid_util::grid::{SimpleValueGrid, ValueGrid};
use grid_util::point::Point;
use itertools::Itertools;
use log::{debug, warn};
use thiserror::Error;

use crate::grid::MazeGrid;

pub mod astar;
pub mod bfs;
pub mod wall_follow;

use astar::AstarSolver;
use bfs::BfsSolver;
use wall_follow::WallFollowSolver;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum PathError {
    #[error("no path from {start} to {goal}")]
    NoPathFound { start: Point, goal: Point },
    #[error("start {0} is outside the grid or on a wall")]
    InvalidStart(Point),
}

pub trait GridSolver {
    /// Searches from `start` to the destination of `grid`. Fails with
    /// [InvalidStart](PathError::InvalidStart) if `start` is outside the grid or on a wall.
    fn search<G: MazeGrid>(&self, grid: &G, start: Point) -> Result<Vec<Point>, PathError>;

    /// Computes a path from `start` to the destination of `grid`, both ends included.
    fn get_path<G: MazeGrid>(&self, grid: &G, start: Point) -> Result<Vec<Point>, PathError> {
        if !grid.can_move_to(start) {
            return Err(PathError::InvalidStart(start));
        }
        match self.search(grid, start) {
            Ok(path) => {
                debug!(
                    "Found path of {} steps from {} to {}",
                    self.path_cost(&path),
                    start,
                    grid.destination()
                );
                Ok(path)
            }
            Err(err) => {
                warn!("{}", err);
                Err(err)
            }
        }
    }

    /// Every move costs 1, so the cost is the number of steps.
    fn path_cost(&self, path: &[Point]) -> usize {
        path.len().saturating_sub(1)
    }
}

/// Run-time choice of solver, e.g. for a [WalkerConfig](crate::walker::WalkerConfig).
#[derive(Clone, Debug)]
pub enum Strategy {
    Astar(AstarSolver),
    Bfs(BfsSolver),
    WallFollow(WallFollowSolver),
}

impl Default for Strategy {
    fn default() -> Strategy {
        Strategy::Astar(AstarSolver::new())
    }
}

impl GridSolver for Strategy {
    fn search<G: MazeGrid>(&self, grid: &G, start: Point) -> Result<Vec<Point>, PathError> {
        match self {
            Strategy::Astar(solver) => solver.search(grid, start),
            Strategy::Bfs(solver) => solver.search(grid, start),
            Strategy::WallFollow(solver) => solver.search(grid, start),
        }
    }
}

/// Walks the parent links back from `goal` to the parentless start and returns the cells in
/// start-to-goal order.
pub(crate) fn reconstruct_path(parents: &SimpleValueGrid<Option<Point>>, goal: Point) -> Vec<Point> {
    let mut path: Vec<Point> =
        std::iter::successors(Some(goal), |&p| parents.get_point(p)).collect();
    path.reverse();
    path
}

/// Checks that `path` runs from `start` to the destination over empty tiles in single
/// orthogonal steps.
pub fn is_valid_path<G: MazeGrid>(grid: &G, start: Point, path: &[Point]) -> bool {
    path.first() == Some(&start)
        && path.last() == Some(&grid.destination())
        && path.iter().all(|&p| grid.can_move_to(p))
        && path
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.manhattan_distance(b) == 1)
}
