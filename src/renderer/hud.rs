//! HUD and overlay state for the host's text/UI layer

use crate::format_seconds;
use crate::settings::Settings;
use crate::sim::{GameMode, GamePhase, Session};

/// Overlay shown on top of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Instructions, waiting for the first tap
    Intro,
    /// Pause button only
    PauseButton,
    /// Pause title with resume/stop buttons
    PauseMenu,
    /// "Game Over", plus "tap to continue" once armed
    GameOver { tap_to_continue: bool },
}

/// Everything the HUD shows for the current frame
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    /// Elapsed time, e.g. "12.34s"
    pub time_text: Option<String>,
    /// Hit counter, e.g. "17p" (practice only)
    pub hits_text: Option<String>,
    /// Dim the field behind the overlay
    pub dim_field: bool,
    pub overlay: Overlay,
}

impl Hud {
    pub fn from_session(session: &Session, settings: &Settings) -> Self {
        let stats = session.stats();
        let overlay = match session.phase() {
            GamePhase::Intro => Overlay::Intro,
            GamePhase::Run => Overlay::PauseButton,
            GamePhase::Pause => Overlay::PauseMenu,
            GamePhase::Over => Overlay::GameOver {
                tap_to_continue: session.tap_to_end_armed(),
            },
        };

        let shows_time = matches!(session.mode(), GameMode::Play | GameMode::Practice);
        let time_text =
            (settings.show_timer && shows_time).then(|| format_seconds(stats.elapsed_time));
        let hits_text = (settings.show_hits && session.mode() == GameMode::Practice)
            .then(|| format!("{}p", stats.hit_count));

        Self {
            time_text,
            hits_text,
            dim_field: session.phase() != GamePhase::Run,
            overlay,
        }
    }
}
