mod snake_session;

pub use snake_session::{
    build_snapshot, GameBroadcaster, GameSnapshot, SessionSummary, SnakeSession,
    SnakeSessionState,
};
