use criterion::{criterion_group, criterion_main, Criterion};
use maze_walker::solver::{astar::AstarSolver, bfs::BfsSolver, wall_follow::WallFollowSolver};
use maze_walker::{GridSolver, Point, Strategy, TileGrid};
use maze_walker_mazes::{random_grid, sidewinder};
use rand::prelude::*;
use std::hint::black_box;

fn strategies() -> [(&'static str, Strategy); 3] {
    [
        ("A*", Strategy::Astar(AstarSolver::new())),
        ("BFS", Strategy::Bfs(BfsSolver)),
        ("wall follow", Strategy::WallFollow(WallFollowSolver::default())),
    ]
}

fn bench_grids(c: &mut Criterion, name: &str, grids: &[TileGrid], strategies: &[(&str, Strategy)]) {
    let start = Point::new(1, 1);
    for (strategy_name, strategy) in strategies {
        c.bench_function(format!("{name}, {strategy_name}").as_str(), |b| {
            b.iter(|| {
                for grid in grids {
                    let _ = black_box(strategy.get_path(grid, start));
                }
            })
        });
    }
}

fn maze_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for side in [25, 101] {
        let mazes: Vec<TileGrid> = (0..20).map(|_| sidewinder(side, &mut rng)).collect();
        bench_grids(c, &format!("sidewinder {side}x{side}"), &mazes, &strategies());
    }
}

fn open_grid_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let grids: Vec<TileGrid> = (0..20).map(|_| random_grid(101, 0.2, &mut rng)).collect();
    // Off perfect mazes the wall follower mostly ends up circling until it gives up.
    let strategies = strategies();
    bench_grids(c, "random 101x101", &grids, &strategies[..2]);
}

criterion_group!(benches, maze_bench, open_grid_bench);
criterion_main!(benches);
