//! Error types for poke
//!
//! Only configuration can fail. Gameplay operations never return errors.

use thiserror::Error;

/// Configuration error, raised before a session is allowed to start
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Tuning value must be finite: {name} = {value}")]
    NonFinite { name: &'static str, value: f32 },

    #[error("Invalid radius range: min {min}, max {max}")]
    RadiusRange { min: f32, max: f32 },

    #[error("Minimum hittable radius must be non-negative, got {0}")]
    HittableRadius(f32),

    #[error("Border thickness must be non-negative, got {0}")]
    BorderThickness(f32),

    #[error("Invalid lifetime range: min {min}, max {max}")]
    LifetimeRange { min: f32, max: f32 },

    #[error("Invalid spawn interval range: min {min}, max {max}")]
    SpawnIntervalRange { min: f32, max: f32 },

    #[error("Invalid spawn count range: min {min}, max {max}")]
    SpawnCountRange { min: u32, max: u32 },

    #[error("Placement attempts must be at least 1")]
    PlacementAttempts,

    #[error("Field {width}x{height} (control band {band}) cannot fit a circle of radius {radius}")]
    FieldTooSmall {
        width: f32,
        height: f32,
        band: f32,
        radius: f32,
    },

    #[error("Invalid pop animation: duration {duration}, explode fraction {fraction}")]
    PopAnimation { duration: f32, fraction: f32 },

    #[error("Color component out of range [0, 1]: {name} = {value}")]
    ColorComponent { name: &'static str, value: f32 },

    #[error("Invalid game over timers: tap delay {tap_delay}, max wait {max_wait}")]
    GameOverTimers { tap_delay: f32, max_wait: f32 },

    #[error("Time limit must be positive, got {0}")]
    TimeLimit(f32),

    #[error("Radius must be positive, got {0}")]
    Radius(f32),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ConfigError>;
