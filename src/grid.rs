//! The read-only maze view the solvers search over, a flat row-major implementation of it, and
//! the [MazeProvider] seam through which a [PathWalker](crate::walker::PathWalker) obtains fresh
//! mazes.
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use itertools::iproduct;
use log::info;
use petgraph::unionfind::UnionFind;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Wall,
    Empty,
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has {len} tiles but the grid is {side} wide")]
    NotSquare { row: usize, len: usize, side: usize },
    #[error("unknown tile {ch:?} at row {row}, column {col}")]
    UnknownTile { row: usize, col: usize, ch: char },
    #[error("grid has no destination tile")]
    MissingDestination,
    #[error("grid has more than one destination tile")]
    MultipleDestinations,
    #[error("destination {0} would be a wall")]
    DestinationBlocked(Point),
    #[error("{0} lies outside the grid")]
    OutOfBounds(Point),
}

/// Square maze of side [side_len](Self::side_len). Coordinates are [Point]s with `x` the column
/// and `y` the row. Implementors must keep [destination](Self::destination) on an
/// [Empty](Tile::Empty) tile.
pub trait MazeGrid {
    fn side_len(&self) -> usize;
    /// [None] for points outside the grid.
    fn tile(&self, pos: Point) -> Option<Tile>;
    fn destination(&self) -> Point;

    fn in_bounds(&self, pos: Point) -> bool {
        let side = self.side_len() as i32;
        pos.x >= 0 && pos.y >= 0 && pos.x < side && pos.y < side
    }
    /// True if `pos` is inside the grid and not a wall.
    fn can_move_to(&self, pos: Point) -> bool {
        self.in_bounds(pos) && self.tile(pos) == Some(Tile::Empty)
    }
    fn cell_count(&self) -> usize {
        self.side_len() * self.side_len()
    }
}

/// Supplies the maze a walker plans on. [regenerate](Self::regenerate) is called each time the
/// walker has finished its path; providers that keep a fixed maze can ignore it.
pub trait MazeProvider {
    type Grid: MazeGrid;
    fn grid(&self) -> &Self::Grid;
    fn regenerate(&mut self);
}

/// [TileGrid] stores the tiles of a square maze in a [BoolGrid] that is [true] for walls, together
/// with its destination. It also maintains connected components in a [UnionFind], which gives a
/// cheap reachability answer independent of any solver.
#[derive(Clone, Debug)]
pub struct TileGrid {
    walls: BoolGrid,
    destination: Point,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl TileGrid {
    /// A grid filled with `fill`, except for `destination` which is always [Tile::Empty].
    pub fn new(side: usize, fill: Tile, destination: Point) -> Result<TileGrid, GridError> {
        let mut walls = BoolGrid::new(side, side, fill == Tile::Wall);
        if !walls.point_in_bounds(destination) {
            return Err(GridError::OutOfBounds(destination));
        }
        walls.set_point(destination, false);
        Ok(TileGrid::with_walls(walls, destination))
    }

    fn with_walls(walls: BoolGrid, destination: Point) -> TileGrid {
        let mut grid = TileGrid {
            walls,
            destination,
            components: UnionFind::new(0),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    /// Builds a grid from a closure over every cell. The destination tile must come out
    /// [Tile::Empty].
    pub fn from_fn<F>(side: usize, destination: Point, mut tile: F) -> Result<TileGrid, GridError>
    where
        F: FnMut(Point) -> Tile,
    {
        let mut walls = BoolGrid::new(side, side, false);
        if !walls.point_in_bounds(destination) {
            return Err(GridError::OutOfBounds(destination));
        }
        for (y, x) in iproduct!(0..side as i32, 0..side as i32) {
            let pos = Point::new(x, y);
            walls.set_point(pos, tile(pos) == Tile::Wall);
        }
        if walls.get_point(destination) {
            return Err(GridError::DestinationBlocked(destination));
        }
        Ok(TileGrid::with_walls(walls, destination))
    }

    /// Parses a square block of text where `#` is a wall, `.` is empty and `G` is the (empty)
    /// destination. Surrounding whitespace and blank lines are ignored.
    pub fn parse(text: &str) -> Result<TileGrid, GridError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let side = rows.len();
        if side == 0 {
            return Err(GridError::Empty);
        }
        let mut walls = BoolGrid::new(side, side, false);
        let mut destination = None;
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != side {
                return Err(GridError::NotSquare { row, len, side });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Point::new(col as i32, row as i32);
                match ch {
                    '#' => walls.set_point(pos, true),
                    '.' => {}
                    'G' => {
                        if destination.is_some() {
                            return Err(GridError::MultipleDestinations);
                        }
                        destination = Some(pos);
                    }
                    ch => return Err(GridError::UnknownTile { row, col, ch }),
                }
            }
        }
        let destination = destination.ok_or(GridError::MissingDestination)?;
        Ok(TileGrid::with_walls(walls, destination))
    }

    /// Sets a single tile. Refuses to wall over the destination. Walling a tile may split a
    /// component, so components are flagged dirty in that case; opening a tile only joins
    /// components and is applied right away.
    pub fn set(&mut self, pos: Point, tile: Tile) -> Result<(), GridError> {
        if !self.walls.point_in_bounds(pos) {
            return Err(GridError::OutOfBounds(pos));
        }
        if tile == Tile::Wall && pos == self.destination {
            return Err(GridError::DestinationBlocked(pos));
        }
        let was_wall = self.walls.get_point(pos);
        let wall = tile == Tile::Wall;
        self.walls.set_point(pos, wall);
        if wall && !was_wall {
            self.components_dirty = true;
        } else if !wall && was_wall {
            self.join_neighbours(pos);
        }
        Ok(())
    }

    pub fn set_destination(&mut self, destination: Point) -> Result<(), GridError> {
        match self.tile(destination) {
            None => Err(GridError::OutOfBounds(destination)),
            Some(Tile::Wall) => Err(GridError::DestinationBlocked(destination)),
            Some(Tile::Empty) => {
                self.destination = destination;
                Ok(())
            }
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up orthogonally adjacent empty tiles.
    pub fn generate_components(&mut self) {
        let side = self.side_len();
        self.components = UnionFind::new(side * side);
        self.components_dirty = false;
        for (y, x) in iproduct!(0..side as i32, 0..side as i32) {
            let point = Point::new(x, y);
            if self.can_move_to(point) {
                let parent_ix = self.walls.get_ix_point(&point);
                // Right and down neighbours cover every edge exactly once.
                for n in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.can_move_to(n) {
                        self.components.union(parent_ix, self.walls.get_ix_point(&n));
                    }
                }
            }
        }
    }

    fn join_neighbours(&mut self, pos: Point) {
        let ix = self.walls.get_ix_point(&pos);
        for n in pos.neumann_neighborhood_smallvec() {
            if self.can_move_to(n) {
                self.components.union(ix, self.walls.get_ix_point(&n));
            }
        }
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> Option<usize> {
        if self.in_bounds(*point) {
            Some(self.components.find(self.walls.get_ix_point(point)))
        } else {
            None
        }
    }

    /// Checks whether start and goal are empty tiles on the same component. Only meaningful
    /// while the components are not dirty.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        self.can_move_to(*start)
            && self.can_move_to(*goal)
            && self.components.equiv(
                self.walls.get_ix_point(start),
                self.walls.get_ix_point(goal),
            )
    }
}

impl MazeGrid for TileGrid {
    fn side_len(&self) -> usize {
        self.walls.width()
    }
    fn tile(&self, pos: Point) -> Option<Tile> {
        if !self.walls.point_in_bounds(pos) {
            None
        } else if self.walls.get_point(pos) {
            Some(Tile::Wall)
        } else {
            Some(Tile::Empty)
        }
    }
    fn destination(&self) -> Point {
        self.destination
    }
}

/// A fixed maze: regenerating keeps the same grid.
impl MazeProvider for TileGrid {
    type Grid = TileGrid;
    fn grid(&self) -> &TileGrid {
        self
    }
    fn regenerate(&mut self) {}
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let side = self.side_len() as i32;
        for y in 0..side {
            let row: String = (0..side)
                .map(|x| {
                    let p = Point::new(x, y);
                    if p == self.destination {
                        'G'
                    } else if self.walls.get_point(p) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
