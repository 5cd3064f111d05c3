//! Idle/demo player
//!
//! Taps the smallest tappable pokable, at most once per reaction delay.
//! Used for attract mode and the native headless run.

use glam::Vec2;

use super::state::{GamePhase, Session};

/// Simulated player with a fixed reaction time
#[derive(Debug, Clone)]
pub struct Autopilot {
    reaction_time: f32,
    cooldown: f32,
}

impl Autopilot {
    pub fn new(reaction_time: f32) -> Self {
        Self {
            reaction_time: reaction_time.max(0.0),
            cooldown: reaction_time.max(0.0),
        }
    }

    /// Decide whether to tap this frame, and where
    pub fn next_tap(&mut self, session: &Session, dt: f32) -> Option<Vec2> {
        match session.phase() {
            GamePhase::Intro => Some(field_center(session)),
            GamePhase::Run => {
                self.cooldown -= dt;
                if self.cooldown > 0.0 {
                    return None;
                }

                // Most urgent target: the one closest to vanishing
                let target = session
                    .pokables()
                    .iter()
                    .filter(|p| p.is_tappable())
                    .min_by(|a, b| a.visual_radius().total_cmp(&b.visual_radius()))?;

                self.cooldown = self.reaction_time;
                Some(target.position())
            }
            GamePhase::Over if session.tap_to_end_armed() => Some(field_center(session)),
            GamePhase::Over | GamePhase::Pause => None,
        }
    }
}

fn field_center(session: &Session) -> Vec2 {
    let tuning = session.tuning();
    Vec2::new(tuning.field_width, tuning.field_height) * 0.5
}
