use super::session_rng::SessionRng;

/// A grid-aligned position in board pixels. Both coordinates are
/// multiples of the unit size. Signed, so an out-of-bounds head is
/// representable at the moment a wall collision is detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    /// Per-tick displacement in board pixels. Y grows downwards.
    pub fn velocity(&self, unit: i32) -> (i32, i32) {
        match self {
            Direction::Left => (-unit, 0),
            Direction::Right => (unit, 0),
            Direction::Up => (0, -unit),
            Direction::Down => (0, unit),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
}

impl EndReason {
    pub fn label(&self) -> &'static str {
        match self {
            EndReason::WallCollision => "wall collision",
            EndReason::SelfCollision => "self collision",
        }
    }
}

/// Board bounds in pixels plus the unit size. Width and height are
/// multiples of the unit (enforced by settings validation).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    pub unit: i32,
}

impl Board {
    pub fn contains(&self, cell: &Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    pub fn columns(&self) -> i32 {
        self.width / self.unit
    }

    pub fn rows(&self) -> i32 {
        self.height / self.unit
    }

    /// Uniformly chosen on-grid cell. Not guaranteed to avoid the
    /// snake body.
    pub fn random_cell(&self, rng: &mut SessionRng) -> Cell {
        let x = rng.random_range(0..self.columns()) * self.unit;
        let y = rng.random_range(0..self.rows()) * self.unit;
        Cell::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Left.is_opposite(&Direction::Right));
        assert!(Direction::Up.is_opposite(&Direction::Down));
        assert!(!Direction::Left.is_opposite(&Direction::Up));
        assert!(!Direction::Left.is_opposite(&Direction::Left));
    }

    #[test]
    fn test_board_contains() {
        let board = Board {
            width: 100,
            height: 100,
            unit: 25,
        };
        assert!(board.contains(&Cell::new(0, 0)));
        assert!(board.contains(&Cell::new(75, 75)));
        assert!(!board.contains(&Cell::new(100, 0)));
        assert!(!board.contains(&Cell::new(0, -25)));
    }

    #[test]
    fn test_random_cell_is_on_grid_and_in_bounds() {
        let board = Board {
            width: 500,
            height: 250,
            unit: 25,
        };
        let mut rng = SessionRng::new(42);
        for _ in 0..1000 {
            let cell = board.random_cell(&mut rng);
            assert!(board.contains(&cell));
            assert_eq!(cell.x % board.unit, 0);
            assert_eq!(cell.y % board.unit, 0);
        }
    }
}
