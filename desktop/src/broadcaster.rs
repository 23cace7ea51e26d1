use snake_engine::session::{GameBroadcaster, GameSnapshot, SessionSummary};

use crate::state::{AppState, SharedState};

/// Feeds session broadcasts straight into the shared UI state.
#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, snapshot: GameSnapshot) {
        self.shared_state.update_snapshot(snapshot);
    }

    async fn broadcast_game_over(&self, summary: SessionSummary) {
        let last_snapshot = self.shared_state.last_snapshot();

        self.shared_state.set_high_score(summary.high_score);
        self.shared_state.push_result(summary);
        self.shared_state.set_state(AppState::GameOver {
            snapshot: last_snapshot,
            summary,
        });
    }
}

#[cfg(test)]
mod tests {
    use snake_engine::game::{GameState, SessionRng, SnakeSettings};
    use snake_engine::session::build_snapshot;

    use super::*;

    fn snapshot() -> GameSnapshot {
        let settings = SnakeSettings::default();
        let mut rng = SessionRng::new(1);
        build_snapshot(&GameState::new(settings.board(), &mut rng))
    }

    fn summary() -> SessionSummary {
        SessionSummary {
            score: 3,
            end_reason: snake_engine::game::EndReason::SelfCollision,
            ticks: 40,
            seed: 9,
            high_score: 5,
            high_score_beaten: false,
        }
    }

    #[tokio::test]
    async fn test_state_broadcast_updates_snapshot() {
        let shared_state = SharedState::new();
        let broadcaster = LocalBroadcaster::new(shared_state.clone());

        broadcaster.broadcast_state(snapshot()).await;

        assert!(shared_state.last_snapshot().is_some());
    }

    #[tokio::test]
    async fn test_game_over_broadcast_keeps_last_snapshot() {
        let shared_state = SharedState::new();
        let broadcaster = LocalBroadcaster::new(shared_state.clone());

        broadcaster.broadcast_state(snapshot()).await;
        broadcaster.broadcast_game_over(summary()).await;

        match shared_state.get_state() {
            AppState::GameOver { snapshot, summary } => {
                assert!(snapshot.is_some());
                assert_eq!(summary.score, 3);
            }
            AppState::InGame { .. } => panic!("expected game over state"),
        }
        assert_eq!(shared_state.get_high_score(), 5);
        assert_eq!(shared_state.recent_results().len(), 1);
    }
}
