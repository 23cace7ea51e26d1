use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Single persisted integer surviving across runs. Absent or
/// malformed stored values read as 0.
pub trait HighScoreStore: Send + Sync {
    fn get(&self) -> u32;
    fn set(&self, value: u32) -> Result<(), String>;
}

/// Stores the high score as a decimal string in a local file.
#[derive(Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn get(&self) -> u32 {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| content.trim().parse().ok())
            .unwrap_or(0)
    }

    fn set(&self, value: u32) -> Result<(), String> {
        std::fs::write(&self.path, value.to_string())
            .map_err(|e| format!("Failed to write high score file: {}", e))
    }
}

/// Clones share the same slot; used by tests and available wherever
/// persistence is not wanted.
#[derive(Clone, Default)]
pub struct InMemoryHighScoreStore {
    value: Arc<Mutex<u32>>,
}

impl InMemoryHighScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HighScoreStore for InMemoryHighScoreStore {
    fn get(&self) -> u32 {
        *self.value.lock().unwrap()
    }

    fn set(&self, value: u32) -> Result<(), String> {
        *self.value.lock().unwrap() = value;
        Ok(())
    }
}

/// Persists `score` only when it beats the stored value. Returns
/// whether the store was updated.
pub fn record_high_score<S: HighScoreStore>(store: &S, score: u32) -> Result<bool, String> {
    if score > store.get() {
        store.set(score)?;
        return Ok(true);
    }
    Ok(false)
}
