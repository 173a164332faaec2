use maze_walker::{PathWalker, Point, TileGrid, WalkerConfig, FRAME_INTERVAL};
use maze_walker_mazes::RandomMazeProvider;

// An agent walks from the top left corner of a 25x25 sidewinder maze to the bottom right one.
// Every time it arrives the maze is regenerated and a new path is planned. The maze is printed
// with the agent (@) and its planned path (*) each time a few frames have passed.

fn render(grid: &TileGrid, path: &[Point], agent: Point) -> String {
    let mut out = String::new();
    for (y, line) in grid.to_string().lines().enumerate() {
        for (x, c) in line.chars().enumerate() {
            let p = Point::new(x as i32, y as i32);
            out.push(if p == agent {
                '@'
            } else if c == '.' && path.contains(&p) {
                '*'
            } else {
                c
            });
        }
        out.push('\n');
    }
    out
}

fn main() {
    let provider = RandomMazeProvider::new(25, 42);
    let mut walker = match PathWalker::new(provider, WalkerConfig::default()) {
        Ok(walker) => walker,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    for frame in 0..300 {
        match walker.advance(FRAME_INTERVAL) {
            Ok(agent) if frame % 50 == 0 => {
                println!("Frame {frame}, agent at {agent:?}");
                println!("{}", render(walker.grid(), walker.path(), agent));
            }
            Ok(_) => {}
            Err(err) => eprintln!("Frame {frame}: {err}"),
        }
    }
    println!("Searches run: {}", walker.searches());
}
