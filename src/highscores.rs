//! Best-time record
//!
//! Only play mode keeps a record: the longest survival time. The core reads
//! and compares the value through [`HighScoreStore`]; storage format is the
//! store's business.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The persisted record
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HighScore {
    /// Best survival time in seconds
    pub time: f32,
}

/// Single-value store for the best time
pub trait HighScoreStore {
    /// Current best, 0.0 when nothing is stored
    fn get(&self) -> f32;
    fn set(&mut self, time: f32);
}

/// Store a play-mode time if it ties or beats the record. Returns whether it did.
pub fn record_play_time(store: &mut (impl HighScoreStore + ?Sized), time: f32) -> bool {
    let best = store.get();
    if time >= best {
        store.set(time);
        log::info!("New best time: {:.2}s (was {:.2}s)", time, best);
        true
    } else {
        false
    }
}

/// Keeps the record for the lifetime of the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: HighScore,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HighScoreStore for MemoryStore {
    fn get(&self) -> f32 {
        self.record.time
    }

    fn set(&mut self, time: f32) {
        self.record.time = time;
    }
}

/// JSON file on disk (native)
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> crate::Result<HighScore> {
        let json = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save(&self, record: &HighScore) -> crate::Result<()> {
        let json = serde_json::to_string(record)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl HighScoreStore for FileStore {
    fn get(&self) -> f32 {
        match self.load() {
            Ok(record) => record.time,
            Err(crate::ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => 0.0,
            Err(e) => {
                // Corrupt or unreadable record starts over
                log::warn!("Ignoring high score at {}: {}", self.path.display(), e);
                0.0
            }
        }
    }

    fn set(&mut self, time: f32) {
        let target = self.path.display().to_string();
        report_save(&target, self.save(&HighScore { time }));
    }
}

/// Log how a record write went. Returns whether it landed.
fn report_save<E: std::fmt::Display>(target: &str, result: std::result::Result<(), E>) -> bool {
    match result {
        Ok(()) => {
            log::info!("High score saved to {}", target);
            true
        }
        Err(e) => {
            log::warn!("Failed to save high score to {}: {}", target, e);
            false
        }
    }
}

/// LocalStorage-backed store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    const STORAGE_KEY: &'static str = "poke_highscore";

    fn storage() -> Option<web_sys::Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("LocalStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl HighScoreStore for LocalStorageStore {
    fn get(&self) -> f32 {
        let Some(storage) = Self::storage() else {
            return 0.0;
        };
        match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<HighScore>(&json) {
                Ok(record) => record.time,
                Err(e) => {
                    log::warn!("Ignoring stored high score: {}", e);
                    0.0
                }
            },
            Ok(None) => 0.0,
            Err(e) => {
                log::warn!("Failed to read high score: {:?}", e);
                0.0
            }
        }
    }

    fn set(&mut self, time: f32) {
        let result = match Self::storage() {
            Some(storage) => serde_json::to_string(&HighScore { time })
                .map_err(|e| e.to_string())
                .and_then(|json| {
                    storage
                        .set_item(Self::STORAGE_KEY, &json)
                        .map_err(|e| format!("{:?}", e))
                }),
            None => Err("no LocalStorage".to_string()),
        };
        report_save("LocalStorage", result);
    }
}
