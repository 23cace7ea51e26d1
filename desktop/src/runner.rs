use snake_engine::game::SnakeSettings;
use snake_engine::log;
use snake_engine::score::HighScoreStore;
use snake_engine::session::{SnakeSession, SnakeSessionState};
use tokio::sync::mpsc;

use crate::broadcaster::LocalBroadcaster;
use crate::state::{AppState, RunnerCommand, SharedState};

/// Owns the session lifecycle: starts a run, forwards turn commands
/// into it, and starts a fresh run on restart. A restart during a
/// running game aborts it; only finished runs produce a summary.
pub async fn run_snake_game<S>(
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<RunnerCommand>,
    settings: SnakeSettings,
    store: S,
) where
    S: HighScoreStore + Clone + 'static,
{
    loop {
        let seed: u64 = rand::random();
        let session_state = SnakeSessionState::create(&settings, seed);

        shared_state.set_high_score(store.get());
        shared_state.set_state(AppState::InGame { snapshot: None });

        let broadcaster = LocalBroadcaster::new(shared_state.clone());
        let mut game_handle = tokio::spawn(SnakeSession::run(
            session_state.clone(),
            broadcaster,
            store.clone(),
        ));
        let mut finished = false;

        loop {
            tokio::select! {
                result = &mut game_handle, if !finished => {
                    finished = true;
                    if let Err(e) = result {
                        log!("Session task failed: {}", e);
                    }
                }
                command = command_rx.recv() => match command {
                    Some(RunnerCommand::Turn(direction)) => {
                        session_state.game_state.lock().await.set_direction(direction);
                    }
                    Some(RunnerCommand::Restart) => {
                        if !finished {
                            log!("Restarting mid-session");
                            game_handle.abort();
                        }
                        break;
                    }
                    Some(RunnerCommand::Quit) | None => {
                        if !finished {
                            game_handle.abort();
                        }
                        log!("Runner stopping");
                        return;
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use snake_engine::score::InMemoryHighScoreStore;

    use super::*;

    fn small_settings() -> SnakeSettings {
        SnakeSettings {
            board_width: 200,
            board_height: 200,
            unit_size: 25,
            tick_interval: Duration::from_millis(75),
        }
    }

    async fn wait_for<F>(shared_state: &SharedState, predicate: F)
    where
        F: Fn(&AppState) -> bool,
    {
        loop {
            if predicate(&shared_state.get_state()) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_runner_restarts_after_game_over_and_quits() {
        let shared_state = SharedState::new();
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let store = InMemoryHighScoreStore::new();

        let handle = tokio::spawn(run_snake_game(
            shared_state.clone(),
            command_rx,
            small_settings(),
            store,
        ));

        // First session runs straight into the right wall.
        wait_for(&shared_state, |state| {
            matches!(state, AppState::GameOver { .. })
        })
        .await;
        assert_eq!(shared_state.recent_results().len(), 1);

        command_tx.send(RunnerCommand::Restart).unwrap();
        wait_for(&shared_state, |state| {
            matches!(state, AppState::InGame { .. })
        })
        .await;

        command_tx.send(RunnerCommand::Quit).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_runner_stops_when_ui_channel_closes() {
        let shared_state = SharedState::new();
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(run_snake_game(
            shared_state,
            command_rx,
            small_settings(),
            InMemoryHighScoreStore::new(),
        ));

        drop(command_tx);
        handle.await.unwrap();
    }
}
