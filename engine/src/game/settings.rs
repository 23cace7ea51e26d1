use std::time::Duration;

use super::snake;
use super::types::Board;

/// Board geometry and tick rate for one session. Defaults reproduce
/// the classic setup: 500x500 board, 25px unit, 75ms ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSettings {
    pub board_width: u32,
    pub board_height: u32,
    pub unit_size: u32,
    pub tick_interval: Duration,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            board_width: 500,
            board_height: 500,
            unit_size: 25,
            tick_interval: Duration::from_millis(75),
        }
    }
}

impl SnakeSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.unit_size < 5 || self.unit_size > 100 {
            return Err("unit_size must be between 5 and 100".to_string());
        }
        if self.board_width % self.unit_size != 0 || self.board_height % self.unit_size != 0 {
            return Err("board dimensions must be divisible by unit_size".to_string());
        }
        let min_units = snake::INITIAL_LENGTH as u32;
        if self.board_width < min_units * self.unit_size
            || self.board_height < min_units * self.unit_size
        {
            return Err(format!(
                "board must be at least {} units in each dimension",
                min_units
            ));
        }
        if self.board_width > 4000 || self.board_height > 4000 {
            return Err("board dimensions must not exceed 4000".to_string());
        }
        let tick_ms = self.tick_interval.as_millis();
        if !(20..=5000).contains(&tick_ms) {
            return Err("tick interval must be between 20ms and 5000ms".to_string());
        }
        Ok(())
    }

    pub fn board(&self) -> Board {
        Board {
            width: self.board_width as i32,
            height: self.board_height as i32,
            unit: self.unit_size as i32,
        }
    }
}
