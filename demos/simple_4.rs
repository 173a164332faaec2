use maze_walker::solver::{astar::AstarSolver, bfs::BfsSolver, wall_follow::WallFollowSolver};
use maze_walker::{GridSolver, Point, Strategy, TileGrid};

// In this example a path is found on a 5x5 grid with shape
//  _____
// |#####|
// |#S..#|
// |#.#.#|
// |#..E#|
// |#####|
//  _____
// where
// - # marks a wall
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let grid = TileGrid::parse(
        "
        #####
        #...#
        #.#.#
        #..G#
        #####
        ",
    )
    .unwrap();
    println!("{}", grid);
    let start = Point::new(1, 1);
    for strategy in [
        Strategy::Astar(AstarSolver::new()),
        Strategy::Bfs(BfsSolver),
        Strategy::WallFollow(WallFollowSolver::default()),
    ] {
        let path = strategy.get_path(&grid, start).unwrap();
        println!("{:?}:", strategy);
        for p in path {
            println!("{:?}", p);
        }
    }
}
