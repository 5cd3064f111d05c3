//! Render contract
//!
//! The game core does not draw. It hands the host renderer sprite instances
//! for the field and a HUD description for the text/UI layer.

pub mod hud;
pub mod sprite;

pub use hud::{Hud, Overlay};
pub use sprite::{PokableSprite, pokable_sprites};

use crate::sim::Session;

/// Sprites for the session's current field
pub fn session_sprites(session: &Session) -> Vec<PokableSprite> {
    pokable_sprites(session.pokables(), session.tuning().border_thickness)
}

/// Colors for the field around the pokables
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.15, 0.15, 0.15, 1.0];
    /// Drawn over the field whenever the game is not running
    pub const DIM_SCREEN: [f32; 4] = [0.0, 0.0, 0.0, 0.5];
    pub const HUD_TEXT: [f32; 4] = [1.0, 1.0, 1.0, 0.5];
    pub const GAME_OVER_TEXT: [f32; 4] = [1.0, 0.0, 0.0, 0.7];
}
