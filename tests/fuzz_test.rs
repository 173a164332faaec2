/// Fuzzes the solvers on many random grids: a path is found exactly when the destination is on the
/// same connected component as the start, every path is a valid walk, A* and BFS agree on the
/// length, and the wall follower finds its way through perfect mazes.
use maze_walker::solver::{astar::AstarSolver, bfs::BfsSolver, wall_follow::WallFollowSolver};
use maze_walker::{is_valid_path, GridSolver, MazeGrid, PathError, Point, TileGrid};
use maze_walker_mazes::{random_grid, sidewinder};
use rand::prelude::*;

fn visualize_grid(grid: &TileGrid, start: &Point) {
    for (y, line) in grid.to_string().lines().enumerate() {
        let line: String = line
            .chars()
            .enumerate()
            .map(|(x, c)| {
                if *start == Point::new(x as i32, y as i32) {
                    'S'
                } else {
                    c
                }
            })
            .collect();
        println!("{}", line);
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 10000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(1, 1);
    let astar = AstarSolver::new();
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, 0.4, &mut rng);
        let reachable = grid.reachable(&start, &grid.destination());
        let astar_path = astar.get_path(&grid, start);
        let bfs_path = BfsSolver.get_path(&grid, start);
        // Show the grid if the result does not match the components
        if astar_path.is_ok() != reachable || bfs_path.is_ok() != reachable {
            visualize_grid(&grid, &start);
        }
        assert_eq!(astar_path.is_ok(), reachable);
        assert_eq!(bfs_path.is_ok(), reachable);
        if !reachable {
            assert_eq!(
                astar_path,
                Err(PathError::NoPathFound {
                    start,
                    goal: grid.destination()
                })
            );
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 12;
    const N_GRIDS: usize = 5000;
    let mut rng = StdRng::seed_from_u64(1);
    let start = Point::new(1, 1);
    let astar = AstarSolver::new();
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, 0.3, &mut rng);
        if let (Ok(astar_path), Ok(bfs_path)) =
            (astar.get_path(&grid, start), BfsSolver.get_path(&grid, start))
        {
            if astar_path.len() != bfs_path.len() {
                println!("A* path: {astar_path:?}\nBFS path: {bfs_path:?}\n");
                visualize_grid(&grid, &start);
            }
            assert!(is_valid_path(&grid, start, &astar_path));
            assert!(is_valid_path(&grid, start, &bfs_path));
            assert_eq!(astar_path.len(), bfs_path.len());
        }
    }
}

#[test]
fn fuzz_wall_follow() {
    const N_MAZES: usize = 500;
    let mut rng = StdRng::seed_from_u64(2);
    let start = Point::new(1, 1);
    let solver = WallFollowSolver::default();
    for side in [3, 5, 11, 21] {
        for _ in 0..N_MAZES {
            let maze = sidewinder(side, &mut rng);
            let path = solver.get_path(&maze, start).unwrap();
            let shortest = BfsSolver.get_path(&maze, start).unwrap();
            assert!(is_valid_path(&maze, start, &path));
            assert!(path.len() <= 2 * maze.cell_count());
            assert!(path.len() >= shortest.len());
        }
    }
}
