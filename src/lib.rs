//! Poke - a reflex arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pokables, spawning, session flow)
//! - `tuning`: Data-driven game balance
//! - `renderer`: Draw contract handed to the host renderer
//! - `audio`: Cue events handed to the host audio backend
//! - `highscores`: Best-time record and its stores
//! - `results`: End-of-session summaries

pub mod audio;
pub mod error;
pub mod highscores;
pub mod renderer;
pub mod results;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, Result};
pub use highscores::{HighScore, HighScoreStore};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Frame step used by the native demo loop (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Playfield dimensions in world units
    pub const FIELD_WIDTH: f32 = 50.0;
    pub const FIELD_HEIGHT: f32 = 30.0;
    /// Height of the control band along the bottom edge (pause button lives here)
    pub const CONTROL_BAND_HEIGHT: f32 = 4.0;

    /// Pokable size range at spawn
    pub const MIN_RADIUS: f32 = 3.0;
    pub const MAX_RADIUS: f32 = 8.0;
    /// Tap area never drops below this while a pokable is active
    pub const MIN_HITTABLE_RADIUS: f32 = 3.0;
    pub const BORDER_THICKNESS: f32 = 0.5;

    /// Seconds a pokable takes to shrink away on its own
    pub const MIN_LIFETIME: f32 = 1.0;
    pub const MAX_LIFETIME: f32 = 4.0;

    /// Seconds between batches
    pub const MIN_SPAWN_INTERVAL: f32 = 0.5;
    pub const MAX_SPAWN_INTERVAL: f32 = 1.5;
    /// Pokables per batch
    pub const MIN_SPAWN_COUNT: u32 = 3;
    pub const MAX_SPAWN_COUNT: u32 = 10;
    /// Placement tries per pokable before the spawn is dropped
    pub const PLACEMENT_ATTEMPTS: u32 = 10;

    /// Hit animation: total pop time, share spent growing, and growth amount
    pub const POP_DURATION: f32 = 0.25;
    pub const EXPLODE_FRACTION: f32 = 1.0 / 3.0;
    pub const EXPLODE_FACTOR: f32 = 0.2;

    /// All pokables share saturation/lightness, only hue varies
    pub const HUE_SATURATION: f32 = 0.7;
    pub const HUE_LIGHTNESS: f32 = 0.7;
    /// Border color is the fill color minus this on each channel
    pub const BORDER_DARKEN: f32 = 0.3;

    /// Hit cue mapping
    pub const HIT_VOLUME: f32 = 1.0;
    pub const RADIUS_PERCENT_TO_PITCH: f32 = -2.0;
    pub const PITCH_ADJUSTMENT: f32 = 2.0;
    pub const MIN_PITCH: f32 = 0.5;
    pub const MAX_PITCH: f32 = 2.0;
    pub const HIT_PAN: f32 = 1.0;

    /// Game over: "tap to continue" arms after this many seconds
    pub const TAP_TO_END_DELAY: f32 = 1.0;
    /// Game over: session ends on its own after this many seconds
    pub const GAME_END_MAX_WAIT: f32 = 10.0;
}

/// Format seconds the way the HUD and results screens show them
#[inline]
pub fn format_seconds(secs: f32) -> String {
    format!("{:.2}s", secs)
}
