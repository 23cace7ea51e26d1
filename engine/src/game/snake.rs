use std::collections::VecDeque;

use super::types::{Board, Cell, Direction};

pub const INITIAL_LENGTH: usize = 5;

/// Ordered body cells, head first.
#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Cell>,
    pub direction: Direction,
}

impl Snake {
    /// Five segments laid out on the top row, head at x = 4 units,
    /// moving right.
    pub fn new(board: &Board) -> Self {
        let body = (0..INITIAL_LENGTH)
            .rev()
            .map(|i| Cell::new(i as i32 * board.unit, 0))
            .collect();

        Self {
            body,
            direction: Direction::Right,
        }
    }

    pub fn head(&self) -> Cell {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// True when `cell` coincides with any non-head segment.
    pub fn hits_body(&self, cell: &Cell) -> bool {
        self.body.iter().skip(1).any(|segment| segment == cell)
    }
}
