use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::game::{Board, Cell, EndReason, GameState, SessionRng, SnakeSettings};
use crate::log;
use crate::score::{record_high_score, HighScoreStore};

/// Immutable copy of the game state published after every tick.
#[derive(Clone, Debug)]
pub struct GameSnapshot {
    pub board: Board,
    pub body: Vec<Cell>,
    pub food: Cell,
    pub score: u32,
    pub running: bool,
    pub tick: u64,
}

/// Published once per run, after the final stopped tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: u32,
    pub end_reason: EndReason,
    pub ticks: u64,
    pub seed: u64,
    pub high_score: u32,
    pub high_score_beaten: bool,
}

pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, summary: SessionSummary) -> impl Future<Output = ()> + Send;
}

/// Shared handles for one run. Command handlers lock `game_state` to
/// steer the snake while the tick loop owns the schedule.
#[derive(Clone)]
pub struct SnakeSessionState {
    pub game_state: Arc<Mutex<GameState>>,
    pub rng: Arc<Mutex<SessionRng>>,
    pub tick_interval: Duration,
    pub seed: u64,
}

impl SnakeSessionState {
    pub fn create(settings: &SnakeSettings, seed: u64) -> Self {
        let mut rng = SessionRng::new(seed);
        let game_state = GameState::new(settings.board(), &mut rng);

        Self {
            game_state: Arc::new(Mutex::new(game_state)),
            rng: Arc::new(Mutex::new(rng)),
            tick_interval: settings.tick_interval,
            seed,
        }
    }
}

pub struct SnakeSession;

impl SnakeSession {
    /// Drives the tick loop until the game stops, then settles the
    /// high score and publishes the summary. Each tick is scheduled
    /// only after the previous one finished, so a slow broadcast
    /// delays the next tick instead of overlapping it. The stop flag
    /// is checked at the top of the next scheduled tick, which adds
    /// one timer delay between game over and the final notification.
    pub async fn run<B, S>(
        session_state: SnakeSessionState,
        broadcaster: B,
        store: S,
    ) -> SessionSummary
    where
        B: GameBroadcaster,
        S: HighScoreStore,
    {
        log!("Session started with seed {}", session_state.seed);

        let initial = build_snapshot(&*session_state.game_state.lock().await);
        broadcaster.broadcast_state(initial).await;

        loop {
            sleep(session_state.tick_interval).await;

            let mut game_state = session_state.game_state.lock().await;
            if !game_state.is_running() {
                break;
            }

            {
                let mut rng = session_state.rng.lock().await;
                game_state.advance(&mut rng);
            }

            let snapshot = build_snapshot(&game_state);
            drop(game_state);

            broadcaster.broadcast_state(snapshot).await;
        }

        let game_state = session_state.game_state.lock().await;
        let end_reason = game_state
            .end_reason
            .expect("Stopped session must have an end reason");

        let beaten = match record_high_score(&store, game_state.score) {
            Ok(beaten) => {
                if beaten {
                    log!("New high score: {}", game_state.score);
                }
                beaten
            }
            Err(e) => {
                log!("Failed to persist high score: {}", e);
                false
            }
        };

        let summary = SessionSummary {
            score: game_state.score,
            end_reason,
            ticks: game_state.tick,
            seed: session_state.seed,
            high_score: store.get().max(game_state.score),
            high_score_beaten: beaten,
        };
        drop(game_state);

        log!(
            "Game over ({}): score {}, {} ticks",
            summary.end_reason.label(),
            summary.score,
            summary.ticks
        );
        broadcaster.broadcast_game_over(summary).await;

        summary
    }
}

pub fn build_snapshot(state: &GameState) -> GameSnapshot {
    GameSnapshot {
        board: state.board,
        body: state.snake.body.iter().copied().collect(),
        food: state.food,
        score: state.score,
        running: state.is_running(),
        tick: state.tick,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex as StdMutex;
    use std::time::Duration;

    use super::*;
    use crate::game::Direction;
    use crate::score::InMemoryHighScoreStore;

    #[derive(Clone, Default)]
    struct CollectingBroadcaster {
        snapshots: Arc<StdMutex<Vec<GameSnapshot>>>,
        summary: Arc<StdMutex<Option<SessionSummary>>>,
    }

    impl GameBroadcaster for CollectingBroadcaster {
        async fn broadcast_state(&self, snapshot: GameSnapshot) {
            self.snapshots.lock().unwrap().push(snapshot);
        }

        async fn broadcast_game_over(&self, summary: SessionSummary) {
            *self.summary.lock().unwrap() = Some(summary);
        }
    }

    fn small_settings() -> SnakeSettings {
        SnakeSettings {
            board_width: 200,
            board_height: 200,
            unit_size: 25,
            tick_interval: Duration::from_millis(75),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_ends_at_right_wall() {
        let session_state = SnakeSessionState::create(&small_settings(), 42);
        let broadcaster = CollectingBroadcaster::default();
        let store = InMemoryHighScoreStore::new();

        let summary =
            SnakeSession::run(session_state, broadcaster.clone(), store).await;

        // Head starts at x=100 moving right on a 200px board: ticks
        // at 125, 150, 175 stay alive, the fourth crosses the wall.
        assert_eq!(summary.end_reason, EndReason::WallCollision);
        assert_eq!(summary.ticks, 4);
        assert_eq!(summary.seed, 42);

        let snapshots = broadcaster.snapshots.lock().unwrap();
        assert_eq!(snapshots.len(), 5);
        assert!(snapshots[0].running);
        assert_eq!(snapshots[0].tick, 0);
        assert!(!snapshots.last().unwrap().running);
    }

    #[tokio::test(start_paused = true)]
    async fn test_high_score_written_only_on_improvement() {
        let store = InMemoryHighScoreStore::new();
        store.set(50).unwrap();

        let session_state = SnakeSessionState::create(&small_settings(), 42);
        let summary = SnakeSession::run(
            session_state,
            CollectingBroadcaster::default(),
            store.clone(),
        )
        .await;

        assert!(!summary.high_score_beaten);
        assert_eq!(summary.high_score, 50);
        assert_eq!(store.get(), 50);
    }

    #[tokio::test(start_paused = true)]
    async fn test_turn_between_ticks_steers_next_move() {
        let session_state = SnakeSessionState::create(&small_settings(), 42);
        let broadcaster = CollectingBroadcaster::default();

        let handle = tokio::spawn(SnakeSession::run(
            session_state.clone(),
            broadcaster.clone(),
            InMemoryHighScoreStore::new(),
        ));

        session_state
            .game_state
            .lock()
            .await
            .set_direction(Direction::Down);

        let summary = handle.await.unwrap();

        // Heading down from the top row on an 8-row board: seven
        // moves stay inside, the eighth crosses the bottom wall.
        assert_eq!(summary.end_reason, EndReason::WallCollision);
        assert_eq!(summary.ticks, 8);
    }

    #[tokio::test(start_paused = true)]
    async fn test_summary_matches_game_over_broadcast() {
        let session_state = SnakeSessionState::create(&small_settings(), 7);
        let broadcaster = CollectingBroadcaster::default();

        let summary = SnakeSession::run(
            session_state,
            broadcaster.clone(),
            InMemoryHighScoreStore::new(),
        )
        .await;

        assert_eq!(*broadcaster.summary.lock().unwrap(), Some(summary));
    }
}
