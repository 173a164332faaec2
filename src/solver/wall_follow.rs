use grid_util::point::Point;
use log::debug;

use crate::direction::Direction;
use crate::grid::MazeGrid;
use crate::solver::{GridSolver, PathError};

/// Right-hand rule: keep a hand on the wall to the right and walk until the destination is
/// reached. The path is every cell stepped on, so it is generally not the shortest one, and it
/// only reaches the destination on simply connected (perfect) mazes.
#[derive(Clone, Debug)]
pub struct WallFollowSolver {
    pub initial_facing: Direction,
}

impl Default for WallFollowSolver {
    fn default() -> WallFollowSolver {
        WallFollowSolver {
            initial_facing: Direction::Up,
        }
    }
}

impl WallFollowSolver {
    pub fn new(initial_facing: Direction) -> WallFollowSolver {
        WallFollowSolver { initial_facing }
    }

    /// Follows the wall from `start` facing `facing` and also returns the final heading, so that
    /// a walker can carry it into its next run. Cells outside the grid count as walls.
    ///
    /// The walker's state is its cell plus its heading, so after `4 * cells` decisions without
    /// arriving a state has repeated and the walk is known to cycle forever; that is reported as
    /// [PathError::NoPathFound].
    pub fn follow<G: MazeGrid>(
        &self,
        grid: &G,
        start: Point,
        mut facing: Direction,
    ) -> Result<(Vec<Point>, Direction), PathError> {
        let goal = grid.destination();
        if !grid.can_move_to(start) {
            return Err(PathError::InvalidStart(start));
        }
        let mut pos = start;
        let mut path = vec![start];
        for _ in 0..4 * grid.cell_count() {
            if pos == goal {
                return Ok((path, facing));
            }
            let right = facing.turn_right();
            if grid.can_move_to(right.step(pos)) {
                facing = right;
                pos = facing.step(pos);
                path.push(pos);
            } else if grid.can_move_to(facing.step(pos)) {
                pos = facing.step(pos);
                path.push(pos);
            } else {
                facing = facing.turn_left();
            }
        }
        if pos == goal {
            return Ok((path, facing));
        }
        debug!("Wall following from {} is stuck in a cycle", start);
        Err(PathError::NoPathFound { start, goal })
    }
}

impl GridSolver for WallFollowSolver {
    fn search<G: MazeGrid>(&self, grid: &G, start: Point) -> Result<Vec<Point>, PathError> {
        self.follow(grid, start, self.initial_facing)
            .map(|(path, _)| path)
    }
}
