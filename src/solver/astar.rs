use std::cmp::Ordering;

use grid_util::grid::{BoolGrid, SimpleValueGrid, ValueGrid};
use grid_util::point::Point;
use log::debug;

use crate::grid::MazeGrid;
use crate::heap::{Comparator, PriorityQueue};
use crate::solver::{reconstruct_path, GridSolver, PathError};

/// Open-list entry: estimated total cost `f`, cost so far `g` and the cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub f: i32,
    pub g: i32,
    pub pos: Point,
}

/// Serves the [SearchNode] with the lowest `f` first. Equal `f` values are not tie-broken.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowestF;

impl Comparator<SearchNode> for LowestF {
    fn compare(&self, a: &SearchNode, b: &SearchNode) -> Ordering {
        b.f.cmp(&a.f)
    }
}

/// A* over the 4-neighbourhood with unit move cost.
#[derive(Clone, Debug, Default)]
pub struct AstarSolver;

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver
    }

    /// Manhattan distance; admissible and consistent only because moves are orthogonal with
    /// cost 1.
    pub fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        p1.manhattan_distance(p2)
    }
}

impl GridSolver for AstarSolver {
    fn search<G: MazeGrid>(&self, grid: &G, start: Point) -> Result<Vec<Point>, PathError> {
        if !grid.can_move_to(start) {
            return Err(PathError::InvalidStart(start));
        }
        let side = grid.side_len();
        let goal = grid.destination();
        let mut closed = BoolGrid::new(side, side, false);
        let mut best_f = SimpleValueGrid::new(side, side, i32::MAX);
        let mut parents: SimpleValueGrid<Option<Point>> = SimpleValueGrid::new(side, side, None);
        let mut open = PriorityQueue::new(LowestF);

        open.push(SearchNode {
            f: self.heuristic(&start, &goal),
            g: 0,
            pos: start,
        });
        let mut expanded = 0;
        while let Ok(node) = open.pop() {
            // A cell can be queued several times before it is closed; later entries are stale.
            if closed.get_point(node.pos) {
                continue;
            }
            closed.set_point(node.pos, true);
            expanded += 1;
            if node.pos == goal {
                debug!("A* closed {} cells", expanded);
                return Ok(reconstruct_path(&parents, goal));
            }
            for next in node.pos.neumann_neighborhood_smallvec() {
                // Bounds first: the scratch grids are only as large as the maze.
                if !grid.can_move_to(next) || closed.get_point(next) {
                    continue;
                }
                let g = node.g + 1;
                let f = g + self.heuristic(&next, &goal);
                if best_f.get_point(next) <= f {
                    continue;
                }
                best_f.set_point(next, f);
                open.push(SearchNode { f, g, pos: next });
                parents.set_point(next, Some(node.pos));
            }
        }
        debug!("A* exhausted the open list after closing {} cells", expanded);
        Err(PathError::NoPathFound { start, goal })
    }
}
