//! Tick-driven agent that walks a planned path one cell at a time and plans a new one, on a
//! freshly regenerated maze, once the old path is used up.
use std::time::Duration;

use grid_util::point::Point;
use log::{info, trace, warn};

use crate::direction::Direction;
use crate::grid::{MazeGrid, MazeProvider};
use crate::solver::{GridSolver, PathError, Strategy};
use crate::DEFAULT_MOVE_INTERVAL;

#[derive(Clone, Debug)]
pub struct WalkerConfig {
    /// Time that has to accumulate before the agent takes its next step.
    pub move_interval: Duration,
    /// Every path is planned from here. Defaults to (1, 1), just inside a walled border.
    pub origin: Point,
    pub strategy: Strategy,
}

impl Default for WalkerConfig {
    fn default() -> WalkerConfig {
        WalkerConfig {
            move_interval: DEFAULT_MOVE_INTERVAL,
            origin: Point::new(1, 1),
            strategy: Strategy::default(),
        }
    }
}

impl WalkerConfig {
    pub fn with_move_interval(mut self, move_interval: Duration) -> WalkerConfig {
        self.move_interval = move_interval;
        self
    }
    pub fn with_origin(mut self, origin: Point) -> WalkerConfig {
        self.origin = origin;
        self
    }
    pub fn with_strategy(mut self, strategy: Strategy) -> WalkerConfig {
        self.strategy = strategy;
        self
    }
}

/// [PathWalker] is either following its path (the cursor is inside it) or due for a replan (the
/// cursor ran off the end, or the last plan failed). Hosts drive it with
/// [advance](Self::advance) and read [position](Self::position) to draw the agent.
#[derive(Debug)]
pub struct PathWalker<P: MazeProvider> {
    provider: P,
    config: WalkerConfig,
    position: Point,
    facing: Direction,
    path: Vec<Point>,
    cursor: usize,
    elapsed: Duration,
    searches: usize,
}

impl<P: MazeProvider> PathWalker<P> {
    /// Places the agent at the configured origin and plans a first path on the provider's
    /// current maze without regenerating it.
    pub fn new(provider: P, config: WalkerConfig) -> Result<PathWalker<P>, PathError> {
        let facing = match &config.strategy {
            Strategy::WallFollow(solver) => solver.initial_facing,
            _ => Direction::Up,
        };
        let mut walker = PathWalker {
            position: config.origin,
            provider,
            config,
            facing,
            path: Vec::new(),
            cursor: 0,
            elapsed: Duration::ZERO,
            searches: 0,
        };
        walker.plan()?;
        Ok(walker)
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Heading carried between wall-following runs.
    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Index of the path cell the next step moves to.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of searches run so far, the initial one included.
    pub fn searches(&self) -> usize {
        self.searches
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn grid(&self) -> &P::Grid {
        self.provider.grid()
    }

    pub fn needs_replan(&self) -> bool {
        self.cursor >= self.path.len()
    }

    /// Drops the current path, asks the provider for a new maze and plans from the origin to its
    /// destination. On failure the agent is left idle with an empty path, so the next
    /// [advance](Self::advance) tries again on another maze.
    pub fn replan(&mut self) -> Result<(), PathError> {
        self.path.clear();
        self.cursor = 0;
        self.provider.regenerate();
        info!("Regenerated maze, planning from {}", self.config.origin);
        self.plan()
    }

    fn plan(&mut self) -> Result<(), PathError> {
        self.searches += 1;
        self.position = self.config.origin;
        self.elapsed = Duration::ZERO;
        let grid = self.provider.grid();
        let result = match &self.config.strategy {
            Strategy::WallFollow(solver) => solver
                .follow(grid, self.config.origin, self.facing)
                .map(|(path, facing)| {
                    self.facing = facing;
                    path
                }),
            strategy => strategy.get_path(grid, self.config.origin),
        };
        match result {
            Ok(path) => {
                info!(
                    "Planned {} cells from {} to {}",
                    path.len(),
                    self.config.origin,
                    grid.destination()
                );
                self.path = path;
                Ok(())
            }
            Err(err) => {
                warn!("Agent stays idle: {}", err);
                Err(err)
            }
        }
    }

    /// Accumulates `dt`; once a full move interval has passed the agent steps onto the next
    /// cell of its path. An exhausted path is replaced before any time is accumulated. Returns
    /// the position after the update.
    pub fn advance(&mut self, dt: Duration) -> Result<Point, PathError> {
        if self.needs_replan() {
            self.replan()?;
        }
        self.elapsed += dt;
        if self.elapsed >= self.config.move_interval {
            self.elapsed = Duration::ZERO;
            if let Some(&next) = self.path.get(self.cursor) {
                trace!("Agent moves {} -> {}", self.position, next);
                self.position = next;
                self.cursor += 1;
            }
        }
        Ok(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::TileGrid;
    use crate::solver::bfs::BfsSolver;
    use crate::solver::tests::{ENCLOSED, PLUS};
    use crate::solver::wall_follow::WallFollowSolver;

    const CORRIDOR: &str = "
        #####
        #..G#
        #####
        #####
        #####
    ";

    /// Fixed maze that counts how often it was asked to regenerate.
    struct CountingProvider {
        grid: TileGrid,
        regenerations: usize,
    }

    impl MazeProvider for CountingProvider {
        type Grid = TileGrid;
        fn grid(&self) -> &TileGrid {
            &self.grid
        }
        fn regenerate(&mut self) {
            self.regenerations += 1;
        }
    }

    fn counting(text: &str) -> CountingProvider {
        CountingProvider {
            grid: TileGrid::parse(text).unwrap(),
            regenerations: 0,
        }
    }

    const TICK: Duration = Duration::from_millis(10);

    #[test]
    fn walks_one_cell_per_interval() {
        let config = WalkerConfig::default().with_move_interval(Duration::from_millis(30));
        let mut walker = PathWalker::new(counting(PLUS), config).unwrap();
        assert_eq!(walker.path().len(), 5);
        assert_eq!(walker.position(), Point::new(1, 1));
        assert_eq!(walker.advance(TICK), Ok(Point::new(1, 1)));
        assert_eq!(walker.cursor(), 0);
        walker.advance(TICK).unwrap();
        walker.advance(TICK).unwrap();
        // The first step lands on the start cell itself.
        assert_eq!(walker.cursor(), 1);
        assert_eq!(walker.position(), Point::new(1, 1));
        walker.advance(Duration::from_millis(45)).unwrap();
        assert_eq!(walker.cursor(), 2);
        assert_eq!(walker.position(), walker.path()[1]);
    }

    #[test]
    fn replans_once_after_exhausting_path() {
        let mut walker = PathWalker::new(counting(CORRIDOR), WalkerConfig::default()).unwrap();
        assert_eq!(walker.searches(), 1);
        assert_eq!(walker.path().len(), 3);
        for _ in 0..3 {
            walker.advance(TICK).unwrap();
        }
        assert_eq!(walker.position(), Point::new(3, 1));
        assert!(walker.needs_replan());
        assert_eq!(walker.provider().regenerations, 0);

        // Not enough time for a step: only the replan happens.
        walker.advance(Duration::from_millis(1)).unwrap();
        assert_eq!(walker.searches(), 2);
        assert_eq!(walker.provider().regenerations, 1);
        assert_eq!(walker.cursor(), 0);
        assert_eq!(walker.position(), Point::new(1, 1));
        assert!(!walker.needs_replan());

        for _ in 0..3 {
            walker.advance(TICK).unwrap();
        }
        // A full step right after the replan moves onto the new path's first cell.
        assert_eq!(walker.advance(TICK), Ok(Point::new(1, 1)));
        assert_eq!(walker.searches(), 3);
        assert_eq!(walker.cursor(), 1);
    }

    #[test]
    fn failed_plan_is_reported() {
        let result = PathWalker::new(counting(ENCLOSED), WalkerConfig::default());
        assert!(matches!(result, Err(PathError::NoPathFound { .. })));
    }

    #[test]
    fn idle_after_failed_replan() {
        let mut walker = PathWalker::new(counting(CORRIDOR), WalkerConfig::default()).unwrap();
        for _ in 0..3 {
            walker.advance(TICK).unwrap();
        }
        walker.provider.grid = TileGrid::parse(ENCLOSED).unwrap();
        assert!(walker.advance(TICK).is_err());
        assert!(walker.path().is_empty());
        assert!(walker.needs_replan());
        assert_eq!(walker.position(), Point::new(1, 1));

        walker.provider.grid = TileGrid::parse(PLUS).unwrap();
        assert_eq!(walker.advance(TICK), Ok(Point::new(1, 1)));
        assert_eq!(walker.path().len(), 5);
        assert_eq!(walker.provider().regenerations, 2);
    }

    #[test]
    fn other_strategies() {
        let config = WalkerConfig::default().with_strategy(Strategy::Bfs(BfsSolver));
        let walker = PathWalker::new(counting(PLUS), config).unwrap();
        assert_eq!(walker.path().len(), 5);

        let config = WalkerConfig::default()
            .with_strategy(Strategy::WallFollow(WallFollowSolver::new(Direction::Up)));
        let walker = PathWalker::new(counting(PLUS), config).unwrap();
        assert_eq!(walker.facing(), Direction::Down);
        assert_eq!(walker.path().last(), Some(&Point::new(3, 3)));
    }

    #[test]
    fn default_config() {
        let config = WalkerConfig::default();
        assert_eq!(config.origin, Point::new(1, 1));
        assert_eq!(config.move_interval, DEFAULT_MOVE_INTERVAL);
        assert!(matches!(config.strategy, Strategy::Astar(_)));
    }

    #[test]
    fn invalid_origin() {
        let config = WalkerConfig::default().with_origin(Point::new(2, 2));
        let result = PathWalker::new(counting(PLUS), config);
        assert!(matches!(result, Err(PathError::InvalidStart(_))));
    }
}
