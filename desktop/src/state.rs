use std::sync::{Arc, Mutex};

use ringbuffer::{AllocRingBuffer, RingBuffer};
use snake_engine::game::Direction;
use snake_engine::session::{GameSnapshot, SessionSummary};

pub const RECENT_RESULTS_SIZE: usize = 8;

#[derive(Debug, Clone, Copy)]
pub enum RunnerCommand {
    Turn(Direction),
    Restart,
    Quit,
}

#[derive(Debug, Clone)]
pub enum AppState {
    InGame {
        snapshot: Option<GameSnapshot>,
    },
    GameOver {
        snapshot: Option<GameSnapshot>,
        summary: SessionSummary,
    },
}

/// State shared between the runner task and the UI thread. The UI
/// reads it every frame; the runner mutates it from broadcasts.
pub struct SharedState {
    state: Arc<Mutex<AppState>>,
    high_score: Arc<Mutex<u32>>,
    recent_results: Arc<Mutex<AllocRingBuffer<SessionSummary>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState::InGame { snapshot: None })),
            high_score: Arc::new(Mutex::new(0)),
            recent_results: Arc::new(Mutex::new(AllocRingBuffer::new(RECENT_RESULTS_SIZE))),
        }
    }

    pub fn set_state(&self, state: AppState) {
        *self.state.lock().unwrap() = state;
    }

    pub fn get_state(&self) -> AppState {
        self.state.lock().unwrap().clone()
    }

    /// Replaces the painted snapshot while a game is in progress;
    /// ignored once the game-over screen is up.
    pub fn update_snapshot(&self, snapshot: GameSnapshot) {
        let mut state = self.state.lock().unwrap();
        if let AppState::InGame { snapshot: current } = &mut *state {
            *current = Some(snapshot);
        }
    }

    pub fn last_snapshot(&self) -> Option<GameSnapshot> {
        match &*self.state.lock().unwrap() {
            AppState::InGame { snapshot } => snapshot.clone(),
            AppState::GameOver { snapshot, .. } => snapshot.clone(),
        }
    }

    pub fn set_high_score(&self, value: u32) {
        *self.high_score.lock().unwrap() = value;
    }

    pub fn get_high_score(&self) -> u32 {
        *self.high_score.lock().unwrap()
    }

    pub fn push_result(&self, summary: SessionSummary) {
        self.recent_results.lock().unwrap().enqueue(summary);
    }

    /// Most recent first.
    pub fn recent_results(&self) -> Vec<SessionSummary> {
        let results = self.recent_results.lock().unwrap();
        results.iter().rev().copied().collect()
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            high_score: Arc::clone(&self.high_score),
            recent_results: Arc::clone(&self.recent_results),
        }
    }
}
