use crate::log;

use super::session_rng::SessionRng;
use super::snake::Snake;
use super::types::{Board, Cell, Direction, EndReason};

/// State of one run: snake, food, score and the terminal flag. The
/// tick engine is `advance`; everything else is bookkeeping around it.
#[derive(Clone, Debug)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub board: Board,
    pub score: u32,
    pub end_reason: Option<EndReason>,
    pub tick: u64,
}

impl GameState {
    pub fn new(board: Board, rng: &mut SessionRng) -> Self {
        let food = board.random_cell(rng);
        log!("Food spawned at ({}, {})", food.x, food.y);

        Self {
            snake: Snake::new(&board),
            food,
            board,
            score: 0,
            end_reason: None,
            tick: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.end_reason.is_none()
    }

    /// Applies immediately; the next tick moves in this direction.
    /// A reversal of the current direction is rejected, everything
    /// else overrides whatever was set since the last tick.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.is_running() && !direction.is_opposite(&self.snake.direction) {
            self.snake.direction = direction;
        }
    }

    /// One simulation step: move the head, handle food, then check
    /// terminal conditions. No-op once the game has ended.
    pub fn advance(&mut self, rng: &mut SessionRng) {
        if !self.is_running() {
            return;
        }

        let head = self.snake.head();
        let (dx, dy) = self.snake.direction.velocity(self.board.unit);
        let next_head = Cell::new(head.x + dx, head.y + dy);

        self.snake.body.push_front(next_head);

        if next_head == self.food {
            self.score += 1;
            log!(
                "Ate food at ({}, {}). Score: {}",
                next_head.x,
                next_head.y,
                self.score
            );
            self.food = self.board.random_cell(rng);
            log!("Food spawned at ({}, {})", self.food.x, self.food.y);
        } else {
            self.snake
                .body
                .pop_back()
                .expect("Snake body should never be empty");
        }

        self.tick += 1;

        if !self.board.contains(&next_head) {
            self.end_reason = Some(EndReason::WallCollision);
        } else if self.snake.hits_body(&next_head) {
            self.end_reason = Some(EndReason::SelfCollision);
        }
    }
}
