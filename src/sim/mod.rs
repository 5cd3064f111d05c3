//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `dt` step per frame, driven by the host
//! - Seeded RNG only
//! - Stable iteration order (pokables in insertion order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod circle;
pub mod color;
pub mod input;
pub mod pokable;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use circle::Circle;
pub use color::Rgba;
pub use input::{TapOutcome, hit_cue, resolve_tap};
pub use pokable::{Pokable, PokableState};
pub use spawn::{SpawnBatch, SpawnScheduler};
pub use state::{GameMode, GamePhase, Session, SessionEnd, SessionStats};
pub use tick::{TickInput, tick};
