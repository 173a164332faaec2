use maze_walker::{MazeProvider, Point, Tile, TileGrid};
use rand::prelude::*;

/// Carves a perfect maze with the sidewinder algorithm. Cells sit on odd coordinates, everything
/// else starts out as wall, and the destination is the cell in the bottom right corner.
pub fn sidewinder<R: Rng>(side: usize, rng: &mut R) -> TileGrid {
    assert!(
        side >= 3 && side % 2 == 1,
        "Maze side must be odd and at least 3"
    );
    let mut tiles = vec![Tile::Wall; side * side];
    let ix = |x: usize, y: usize| y * side + x;
    for y in (1..side - 1).step_by(2) {
        let mut run_start = 1;
        for x in (1..side - 1).step_by(2) {
            tiles[ix(x, y)] = Tile::Empty;
            let east_edge = x + 2 >= side - 1;
            if y == 1 {
                // The top row is one long corridor.
                if !east_edge {
                    tiles[ix(x + 1, y)] = Tile::Empty;
                }
                continue;
            }
            if east_edge || rng.gen_bool(0.5) {
                let run_len = (x - run_start) / 2 + 1;
                let north = run_start + 2 * rng.gen_range(0..run_len);
                tiles[ix(north, y - 1)] = Tile::Empty;
                run_start = x + 2;
            } else {
                tiles[ix(x + 1, y)] = Tile::Empty;
            }
        }
    }
    let destination = Point::new(side as i32 - 2, side as i32 - 2);
    TileGrid::from_fn(side, destination, |p| tiles[ix(p.x as usize, p.y as usize)])
        .expect("Destination is always carved")
}

/// A walled-in grid whose inner tiles are walls with probability `wall_probability`. The origin
/// (1, 1) and the destination (side - 2, side - 2) are always empty, but need not be connected.
pub fn random_grid<R: Rng>(side: usize, wall_probability: f64, rng: &mut R) -> TileGrid {
    assert!(side >= 3, "Grid side must be at least 3");
    let last = side as i32 - 1;
    let origin = Point::new(1, 1);
    let destination = Point::new(last - 1, last - 1);
    TileGrid::from_fn(side, destination, |p| {
        let border = p.x == 0 || p.y == 0 || p.x == last || p.y == last;
        if border {
            Tile::Wall
        } else if p == origin || p == destination || !rng.gen_bool(wall_probability) {
            Tile::Empty
        } else {
            Tile::Wall
        }
    })
    .expect("Destination is always empty")
}

/// Serves a sidewinder maze and carves a new one every time it is asked to regenerate, the way
/// the host program re-randomizes the board whenever the agent has arrived.
#[derive(Clone, Debug)]
pub struct RandomMazeProvider {
    side: usize,
    rng: StdRng,
    grid: TileGrid,
}

impl RandomMazeProvider {
    pub fn new(side: usize, seed: u64) -> RandomMazeProvider {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = sidewinder(side, &mut rng);
        RandomMazeProvider { side, rng, grid }
    }
}

impl MazeProvider for RandomMazeProvider {
    type Grid = TileGrid;
    fn grid(&self) -> &TileGrid {
        &self.grid
    }
    fn regenerate(&mut self) {
        self.grid = sidewinder(self.side, &mut self.rng);
    }
}
