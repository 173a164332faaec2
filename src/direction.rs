use grid_util::point::Point;

/// One of the four orthogonal headings. Rows grow downwards, so [Direction::Up] decreases `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Clockwise from [Direction::Up], the order the wall follower turns through.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn num(self) -> usize {
        self as usize
    }

    pub fn turn_right(self) -> Direction {
        Direction::ALL[(self.num() + 1) % 4]
    }

    pub fn turn_left(self) -> Direction {
        Direction::ALL[(self.num() + 3) % 4]
    }

    /// `(dx, dy)` of a single step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    pub fn step(self, point: Point) -> Point {
        let (dx, dy) = self.delta();
        Point::new(point.x + dx, point.y + dy)
    }
}
