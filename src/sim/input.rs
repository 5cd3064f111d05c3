//! Tap resolution against live pokables

use glam::Vec2;

use super::pokable::Pokable;
use crate::audio::AudioCue;
use crate::consts::{
    HIT_PAN, HIT_VOLUME, MAX_PITCH, MIN_PITCH, PITCH_ADJUSTMENT, RADIUS_PERCENT_TO_PITCH,
};

/// What a tap did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TapOutcome {
    /// The pokable with this id was hit
    Hit { id: u32, cue: AudioCue },
    Miss,
}

impl TapOutcome {
    pub fn cue(&self) -> AudioCue {
        match self {
            TapOutcome::Hit { cue, .. } => *cue,
            TapOutcome::Miss => AudioCue::Miss,
        }
    }
}

/// Test a tap against every pokable's hittable circle, in insertion order.
/// Only the first match is hit.
pub fn resolve_tap(pokables: &mut [Pokable], point: Vec2, max_radius: f32) -> TapOutcome {
    let Some(pokable) = pokables
        .iter_mut()
        .find(|p| p.is_tappable() && p.hittable_circle().contains(point))
    else {
        return TapOutcome::Miss;
    };

    // Read the size before the pop animation starts changing it
    let cue = hit_cue(pokable.visual_radius(), max_radius);
    pokable.hit();
    TapOutcome::Hit {
        id: pokable.id,
        cue,
    }
}

/// Hit cue for a target of the given visual size
pub fn hit_cue(visual_radius: f32, max_radius: f32) -> AudioCue {
    let radius_percent = if max_radius > 0.0 {
        visual_radius / max_radius
    } else {
        0.0
    };
    let pitch = (RADIUS_PERCENT_TO_PITCH * radius_percent + PITCH_ADJUSTMENT)
        .clamp(MIN_PITCH, MAX_PITCH);

    AudioCue::Hit {
        volume: HIT_VOLUME,
        pitch,
        pan: HIT_PAN,
    }
}
