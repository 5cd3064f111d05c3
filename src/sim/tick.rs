//! Per-frame driver
//!
//! Hosts that batch their input per frame fill a [`TickInput`] and call
//! [`tick`], which forwards events to the session in a fixed order and then
//! advances the clock.

use glam::Vec2;

use super::state::{GamePhase, Session};
use crate::audio::CueSink;

/// Input gathered during one frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Taps in world coordinates, in the order they happened
    pub taps: Vec<Vec2>,
    /// Pause button
    pub pause: bool,
    /// Resume button
    pub resume: bool,
    /// Stop button
    pub stop: bool,
    /// Foreground focus change (`Some(false)` = lost)
    pub focus: Option<bool>,
}

impl TickInput {
    pub fn tap(point: Vec2) -> Self {
        Self {
            taps: vec![point],
            ..Default::default()
        }
    }
}

/// Apply a frame's input, then advance the session by `dt`
pub fn tick(session: &mut Session, input: &TickInput, dt: f32, cues: &mut impl CueSink) {
    match input.focus {
        Some(false) => session.on_focus_lost(),
        Some(true) => session.on_focus_gained(),
        None => {}
    }

    if input.pause {
        session.on_pause_requested(cues);
    }
    if input.resume {
        session.on_resume_requested(cues);
    }
    if input.stop {
        session.on_stop_requested(cues);
    }

    // The tap that leaves the intro is consumed; the rest of the frame's taps go with it
    let starting = session.phase() == GamePhase::Intro;
    for &point in &input.taps {
        session.on_tap(point, cues);
        if starting {
            break;
        }
    }

    session.on_tick(dt);
}
