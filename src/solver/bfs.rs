use std::collections::VecDeque;

use grid_util::grid::{BoolGrid, SimpleValueGrid, ValueGrid};
use grid_util::point::Point;
use log::debug;

use crate::grid::MazeGrid;
use crate::solver::{reconstruct_path, GridSolver, PathError};

/// Breadth-first search. Every move costs 1, so the first time the destination is dequeued the
/// path to it is as short as the one [AstarSolver](super::astar::AstarSolver) finds.
#[derive(Clone, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn search<G: MazeGrid>(&self, grid: &G, start: Point) -> Result<Vec<Point>, PathError> {
        if !grid.can_move_to(start) {
            return Err(PathError::InvalidStart(start));
        }
        let side = grid.side_len();
        let goal = grid.destination();
        // Marked on enqueue so that no cell enters the queue twice.
        let mut found = BoolGrid::new(side, side, false);
        let mut parents: SimpleValueGrid<Option<Point>> = SimpleValueGrid::new(side, side, None);
        let mut queue = VecDeque::new();

        found.set_point(start, true);
        queue.push_back(start);
        let mut dequeued = 0;
        while let Some(pos) = queue.pop_front() {
            dequeued += 1;
            if pos == goal {
                debug!("BFS dequeued {} cells", dequeued);
                return Ok(reconstruct_path(&parents, goal));
            }
            for next in pos.neumann_neighborhood_smallvec() {
                if !grid.can_move_to(next) || found.get_point(next) {
                    continue;
                }
                found.set_point(next, true);
                parents.set_point(next, Some(pos));
                queue.push_back(next);
            }
        }
        debug!("BFS exhausted the queue after {} cells", dequeued);
        Err(PathError::NoPathFound { start, goal })
    }
}
