//! Data-driven game balance
//!
//! Every range the simulation draws from lives here. Defaults come from
//! [`crate::consts`]; a host can override them with JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, Result};

/// Tunable gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,
    /// Reserved strip along the bottom edge where nothing spawns
    pub control_band_height: f32,

    // === Pokables ===
    pub min_radius: f32,
    pub max_radius: f32,
    pub min_hittable_radius: f32,
    pub border_thickness: f32,
    pub min_lifetime: f32,
    pub max_lifetime: f32,
    pub saturation: f32,
    pub lightness: f32,

    // === Hit animation ===
    pub pop_duration: f32,
    /// Share of `pop_duration` spent growing before the collapse
    pub explode_fraction: f32,
    /// Growth speed, as a fraction of the initial radius per explode phase
    pub explode_factor: f32,

    // === Spawning ===
    pub min_spawn_interval: f32,
    pub max_spawn_interval: f32,
    pub min_spawn_count: u32,
    pub max_spawn_count: u32,
    pub placement_attempts: u32,

    // === Game over ===
    pub tap_to_end_delay: f32,
    pub game_end_max_wait: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            control_band_height: CONTROL_BAND_HEIGHT,

            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            min_hittable_radius: MIN_HITTABLE_RADIUS,
            border_thickness: BORDER_THICKNESS,
            min_lifetime: MIN_LIFETIME,
            max_lifetime: MAX_LIFETIME,
            saturation: HUE_SATURATION,
            lightness: HUE_LIGHTNESS,

            pop_duration: POP_DURATION,
            explode_fraction: EXPLODE_FRACTION,
            explode_factor: EXPLODE_FACTOR,

            min_spawn_interval: MIN_SPAWN_INTERVAL,
            max_spawn_interval: MAX_SPAWN_INTERVAL,
            min_spawn_count: MIN_SPAWN_COUNT,
            max_spawn_count: MAX_SPAWN_COUNT,
            placement_attempts: PLACEMENT_ATTEMPTS,

            tap_to_end_delay: TAP_TO_END_DELAY,
            game_end_max_wait: GAME_END_MAX_WAIT,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON (missing fields fall back to defaults) and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Seconds spent growing at the start of the hit animation
    pub fn explode_time(&self) -> f32 {
        self.pop_duration * self.explode_fraction
    }

    /// Seconds spent collapsing after the growth phase
    pub fn implode_time(&self) -> f32 {
        self.pop_duration * (1.0 - self.explode_fraction)
    }

    fn float_fields(&self) -> [(&'static str, f32); 18] {
        [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("control_band_height", self.control_band_height),
            ("min_radius", self.min_radius),
            ("max_radius", self.max_radius),
            ("min_hittable_radius", self.min_hittable_radius),
            ("border_thickness", self.border_thickness),
            ("min_lifetime", self.min_lifetime),
            ("max_lifetime", self.max_lifetime),
            ("saturation", self.saturation),
            ("lightness", self.lightness),
            ("pop_duration", self.pop_duration),
            ("explode_fraction", self.explode_fraction),
            ("explode_factor", self.explode_factor),
            ("min_spawn_interval", self.min_spawn_interval),
            ("max_spawn_interval", self.max_spawn_interval),
            ("tap_to_end_delay", self.tap_to_end_delay),
            ("game_end_max_wait", self.game_end_max_wait),
        ]
    }

    /// Reject ranges a session could never satisfy
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.float_fields() {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }

        if !(self.min_radius > 0.0) || self.min_radius > self.max_radius {
            return Err(ConfigError::RadiusRange {
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        if !(self.min_hittable_radius >= 0.0) {
            return Err(ConfigError::HittableRadius(self.min_hittable_radius));
        }
        if !(self.border_thickness >= 0.0) {
            return Err(ConfigError::BorderThickness(self.border_thickness));
        }
        if !(self.min_lifetime > 0.0) || self.min_lifetime > self.max_lifetime {
            return Err(ConfigError::LifetimeRange {
                min: self.min_lifetime,
                max: self.max_lifetime,
            });
        }
        if !(self.min_spawn_interval >= 0.0) || self.min_spawn_interval > self.max_spawn_interval
        {
            return Err(ConfigError::SpawnIntervalRange {
                min: self.min_spawn_interval,
                max: self.max_spawn_interval,
            });
        }
        if self.min_spawn_count > self.max_spawn_count {
            return Err(ConfigError::SpawnCountRange {
                min: self.min_spawn_count,
                max: self.max_spawn_count,
            });
        }
        if self.placement_attempts == 0 {
            return Err(ConfigError::PlacementAttempts);
        }

        // The largest circle must fit once the bounds are inset by its radius
        let usable_height = self.field_height - self.control_band_height;
        let diameter = self.max_radius * 2.0;
        if !(self.control_band_height >= 0.0)
            || self.field_width < diameter
            || usable_height < diameter
        {
            return Err(ConfigError::FieldTooSmall {
                width: self.field_width,
                height: self.field_height,
                band: self.control_band_height,
                radius: self.max_radius,
            });
        }

        if !(self.pop_duration > 0.0)
            || !(self.explode_fraction > 0.0 && self.explode_fraction < 1.0)
            || !(self.explode_factor >= 0.0)
        {
            return Err(ConfigError::PopAnimation {
                duration: self.pop_duration,
                fraction: self.explode_fraction,
            });
        }
        for (name, value) in [("saturation", self.saturation), ("lightness", self.lightness)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ColorComponent { name, value });
            }
        }
        if !(self.tap_to_end_delay >= 0.0) || !(self.game_end_max_wait > self.tap_to_end_delay) {
            return Err(ConfigError::GameOverTimers {
                tap_delay: self.tap_to_end_delay,
                max_wait: self.game_end_max_wait,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_radius_range_rejected() {
        let tuning = Tuning {
            min_radius: 9.0,
            max_radius: 8.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::RadiusRange { .. })
        ));
    }

    #[test]
    fn test_non_positive_lifetime_rejected() {
        let tuning = Tuning {
            min_lifetime: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::LifetimeRange { .. })
        ));
    }

    #[test]
    fn test_field_must_fit_largest_circle() {
        let tuning = Tuning {
            field_height: 18.0,
            control_band_height: 4.0,
            max_radius: 8.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::FieldTooSmall { .. })
        ));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let tuning = Tuning {
            max_radius: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::NonFinite {
                name: "max_radius",
                ..
            })
        ));

        let tuning = Tuning {
            max_lifetime: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::NonFinite {
                name: "max_lifetime",
                ..
            })
        ));

        for tuning in [
            Tuning {
                field_width: f32::NAN,
                ..Default::default()
            },
            Tuning {
                field_height: f32::INFINITY,
                ..Default::default()
            },
            Tuning {
                max_spawn_interval: f32::NAN,
                ..Default::default()
            },
        ] {
            assert!(matches!(
                tuning.validate(),
                Err(ConfigError::NonFinite { .. })
            ));
        }
    }

    #[test]
    fn test_degenerate_ranges_are_allowed() {
        let tuning = Tuning {
            min_radius: 5.0,
            max_radius: 5.0,
            min_spawn_count: 4,
            max_spawn_count: 4,
            min_lifetime: 2.0,
            max_lifetime: 2.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_override() {
        let tuning = Tuning::from_json(r#"{ "max_spawn_count": 5 }"#).unwrap();
        assert_eq!(tuning.max_spawn_count, 5);
        assert_eq!(tuning.min_radius, MIN_RADIUS);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(Tuning::from_json(r#"{ "min_spawn_count": 11 }"#).is_err());
        assert!(matches!(
            Tuning::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_pop_phase_split() {
        let tuning = Tuning::default();
        assert!((tuning.explode_time() + tuning.implode_time() - POP_DURATION).abs() < 1e-6);
        assert!(tuning.explode_time() < tuning.implode_time());
    }
}
