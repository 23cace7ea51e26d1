mod session_rng;
mod settings;
mod snake;
mod state;
mod types;

pub use session_rng::SessionRng;
pub use settings::SnakeSettings;
pub use snake::Snake;
pub use state::GameState;
pub use types::{Board, Cell, Direction, EndReason};
