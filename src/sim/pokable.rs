//! Pokable entity: a shrinking target and its lifecycle
//!
//! States only move forward: `Active` either expires or gets hit, a hit
//! pokable pops and ends up in `Destruct`. Both end states wait to be reaped.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::circle::Circle;
use super::color::Rgba;
use crate::consts::BORDER_DARKEN;
use crate::error::{ConfigError, Result};
use crate::tuning::Tuning;

/// Radii at or below this count as gone (absorbs float drift from summed dt)
pub const RADIUS_EPSILON: f32 = 1e-4;

/// Lifecycle state of a pokable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PokableState {
    /// Shrinking and tappable
    Active { elapsed: f32 },
    /// Playing the pop animation
    Hit { since_hit: f32 },
    /// Pop finished (terminal)
    Destruct,
    /// Shrank to nothing without being hit (terminal)
    Expired,
}

impl PokableState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PokableState::Destruct | PokableState::Expired)
    }
}

/// A single tappable target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokable {
    pub id: u32,
    position: Vec2,
    initial_radius: f32,
    visual_radius: f32,
    hittable_radius: f32,
    min_hittable_radius: f32,
    color: Rgba,
    time_limit: f32,
    state: PokableState,
    /// Radius lost per second while active (fixed at spawn)
    decay_rate: f32,
    /// Radius gained per second during the explode phase
    explode_speed: f32,
    /// Radius lost per second during the implode phase
    implode_speed: f32,
    explode_time: f32,
}

impl Pokable {
    /// Create an active pokable. `time_limit` is the time it takes to shrink away.
    pub fn new(
        id: u32,
        circle: Circle,
        color: Rgba,
        time_limit: f32,
        tuning: &Tuning,
    ) -> Result<Self> {
        if !(time_limit > 0.0) {
            return Err(ConfigError::TimeLimit(time_limit));
        }
        if !(circle.radius > 0.0) {
            return Err(ConfigError::Radius(circle.radius));
        }

        let explode_time = tuning.explode_time();
        let initial_radius = circle.radius;

        Ok(Self {
            id,
            position: circle.center,
            initial_radius,
            visual_radius: initial_radius,
            hittable_radius: initial_radius.max(tuning.min_hittable_radius),
            min_hittable_radius: tuning.min_hittable_radius,
            color,
            time_limit,
            state: PokableState::Active { elapsed: 0.0 },
            decay_rate: initial_radius / time_limit,
            explode_speed: initial_radius * tuning.explode_factor / explode_time,
            implode_speed: initial_radius / tuning.implode_time(),
            explode_time,
        })
    }

    /// Advance by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.state = match self.state {
            PokableState::Active { elapsed } => self.update_active(elapsed + dt),
            PokableState::Hit { since_hit } => self.update_hit(since_hit + dt, dt),
            terminal => terminal,
        };
    }

    fn update_active(&mut self, elapsed: f32) -> PokableState {
        let radius = self.initial_radius - self.decay_rate * elapsed;
        if radius <= RADIUS_EPSILON {
            self.visual_radius = 0.0;
            self.hittable_radius = 0.0;
            return PokableState::Expired;
        }

        self.visual_radius = radius.min(self.visual_radius);
        self.hittable_radius = self.visual_radius.max(self.min_hittable_radius);
        PokableState::Active { elapsed }
    }

    fn update_hit(&mut self, since_hit: f32, dt: f32) -> PokableState {
        let speed = if since_hit < self.explode_time {
            self.explode_speed
        } else {
            -self.implode_speed
        };

        let radius = self.visual_radius + speed * dt;
        if radius <= RADIUS_EPSILON {
            self.visual_radius = 0.0;
            return PokableState::Destruct;
        }

        self.visual_radius = radius;
        PokableState::Hit { since_hit }
    }

    /// Register a tap. Only an active pokable can be hit; returns whether it was.
    pub fn hit(&mut self) -> bool {
        if !self.is_tappable() {
            return false;
        }
        self.state = PokableState::Hit { since_hit: 0.0 };
        self.hittable_radius = 0.0;
        true
    }

    pub fn state(&self) -> PokableState {
        self.state
    }

    pub fn is_tappable(&self) -> bool {
        matches!(self.state, PokableState::Active { .. })
    }

    /// Only active and popping pokables are drawn
    pub fn is_visible(&self) -> bool {
        matches!(
            self.state,
            PokableState::Active { .. } | PokableState::Hit { .. }
        )
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn initial_radius(&self) -> f32 {
        self.initial_radius
    }

    pub fn visual_radius(&self) -> f32 {
        self.visual_radius
    }

    pub fn hittable_radius(&self) -> f32 {
        self.hittable_radius
    }

    pub fn time_limit(&self) -> f32 {
        self.time_limit
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn border_color(&self) -> Rgba {
        self.color.darken(BORDER_DARKEN)
    }

    /// Circle used for overlap checks at spawn time
    pub fn visual_circle(&self) -> Circle {
        Circle {
            center: self.position,
            radius: self.visual_radius,
        }
    }

    /// Circle used for tap tests
    pub fn hittable_circle(&self) -> Circle {
        Circle {
            center: self.position,
            radius: self.hittable_radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pokable(radius: f32, time_limit: f32) -> Pokable {
        let tuning = Tuning::default();
        Pokable::new(
            1,
            Circle::new(10.0, 10.0, radius),
            Rgba::from_hsl(0.5, 0.7, 0.7),
            time_limit,
            &tuning,
        )
        .unwrap()
    }

    #[test]
    fn test_linear_decay_halfway_and_expiry() {
        let mut p = pokable(8.0, 2.0);
        for _ in 0..4 {
            p.update(0.25);
        }
        assert!((p.visual_radius() - 4.0).abs() < 1e-4);
        assert!(p.is_tappable());

        for _ in 0..4 {
            p.update(0.25);
        }
        assert_eq!(p.state(), PokableState::Expired);
        assert_eq!(p.visual_radius(), 0.0);
        assert_eq!(p.hittable_radius(), 0.0);
    }

    #[test]
    fn test_expiry_with_inexact_steps() {
        let mut p = pokable(8.0, 2.0);
        for _ in 0..20 {
            p.update(0.1);
        }
        assert_eq!(p.state(), PokableState::Expired);
    }

    #[test]
    fn test_hittable_radius_floor() {
        let mut p = pokable(4.0, 1.0);
        p.update(0.9);
        assert!(p.visual_radius() < 1.0);
        assert_eq!(p.hittable_radius(), crate::consts::MIN_HITTABLE_RADIUS);
    }

    #[test]
    fn test_hit_zeroes_hittable_and_blocks_second_hit() {
        let mut p = pokable(6.0, 3.0);
        assert!(p.hit());
        assert_eq!(p.hittable_radius(), 0.0);
        assert!(matches!(p.state(), PokableState::Hit { .. }));
        assert!(!p.hit());
    }

    #[test]
    fn test_hit_animation_pops_then_destructs() {
        let mut p = pokable(8.0, 4.0);
        p.hit();

        let mut peak = p.visual_radius();
        let mut t = 0.0;
        while !p.state().is_terminal() && t < 1.0 {
            p.update(0.01);
            peak = peak.max(p.visual_radius());
            assert_eq!(p.hittable_radius(), 0.0);
            t += 0.01;
        }

        assert_eq!(p.state(), PokableState::Destruct);
        assert_eq!(p.visual_radius(), 0.0);
        assert!(peak > 8.0, "explode phase should grow the circle");
        assert!(t < 0.35, "pop took {t}s");
    }

    #[test]
    fn test_hit_cannot_expire() {
        let mut p = pokable(8.0, 1.0);
        p.hit();
        for _ in 0..100 {
            p.update(0.05);
        }
        assert_eq!(p.state(), PokableState::Destruct);
    }

    #[test]
    fn test_terminal_states_are_inert() {
        let mut p = pokable(3.0, 1.0);
        p.update(2.0);
        assert_eq!(p.state(), PokableState::Expired);
        p.update(1.0);
        assert!(!p.hit());
        assert_eq!(p.state(), PokableState::Expired);
        assert!(!p.is_visible());
    }

    #[test]
    fn test_invalid_construction_rejected() {
        let tuning = Tuning::default();
        let color = Rgba::new(1.0, 1.0, 1.0, 1.0);
        assert!(matches!(
            Pokable::new(1, Circle::new(0.0, 0.0, 4.0), color, 0.0, &tuning),
            Err(ConfigError::TimeLimit(_))
        ));
        assert!(matches!(
            Pokable::new(1, Circle::new(0.0, 0.0, 0.0), color, 1.0, &tuning),
            Err(ConfigError::Radius(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_active_radius_non_increasing(
            radius in 3.0f32..8.0,
            time_limit in 1.0f32..4.0,
            steps in prop::collection::vec(0.001f32..0.2, 1..200)
        ) {
            let mut p = pokable(radius, time_limit);
            let mut last = p.visual_radius();
            for dt in steps {
                let was_active = p.is_tappable();
                p.update(dt);
                if was_active {
                    prop_assert!(p.visual_radius() <= last);
                }
                prop_assert!(p.visual_radius() >= 0.0);
                if p.hittable_radius() > 0.0 {
                    prop_assert!(p.is_tappable());
                }
                if p.state() == PokableState::Expired {
                    prop_assert_eq!(p.visual_radius(), 0.0);
                }
                last = p.visual_radius();
            }
        }

        #[test]
        fn prop_hit_pokables_never_hittable(
            pre in prop::collection::vec(0.001f32..0.1, 0..10),
            post in prop::collection::vec(0.001f32..0.1, 0..50)
        ) {
            let mut p = pokable(6.0, 4.0);
            for dt in pre {
                p.update(dt);
            }
            if p.hit() {
                for dt in post {
                    p.update(dt);
                    prop_assert_eq!(p.hittable_radius(), 0.0);
                }
            }
        }
    }
}
