//! Overridable tuning for the expression engine and particle field.
//!
//! Defaults come from `constants.rs`. Hosts may tweak individual fields
//! (e.g. particle density from a DOM attribute) and must call
//! [`SceneConfig::validate`] before handing the config to a subsystem.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite and positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} range is inverted: {min} > {max}")]
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
    #[error("{field} must lie in [0, 1], got {value}")]
    NotUnit { field: &'static str, value: f32 },
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn unit(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::NotUnit { field, value })
    }
}

fn range(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvertedRange { field, min, max })
    }
}

/// Tuning for the avatar expression engine.
#[derive(Clone, Debug)]
pub struct ExpressionConfig {
    pub falloff_px: f32,
    pub pupil_range: f32,
    pub follow_speed: f32,
    pub eyebrow_raise_px: f32,
    pub blink_cooldown_ms: f64,
    pub blink_mean_extra_ms: f64,
    pub wide_smile_cooldown_ms: f64,
    pub wide_smile_mean_extra_ms: f64,
    pub wide_smile_duration_ms: f64,
}

impl Default for ExpressionConfig {
    fn default() -> Self {
        Self {
            falloff_px: INTENSITY_FALLOFF_PX,
            pupil_range: PUPIL_MOVEMENT_RANGE,
            follow_speed: EYE_FOLLOW_SPEED,
            eyebrow_raise_px: EYEBROW_RAISE_PX,
            blink_cooldown_ms: BLINK_COOLDOWN_MS,
            blink_mean_extra_ms: BLINK_MEAN_EXTRA_MS,
            wide_smile_cooldown_ms: WIDE_SMILE_COOLDOWN_MS,
            wide_smile_mean_extra_ms: WIDE_SMILE_MEAN_EXTRA_MS,
            wide_smile_duration_ms: WIDE_SMILE_DURATION_MS,
        }
    }
}

impl ExpressionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("falloff_px", self.falloff_px)?;
        positive("pupil_range", self.pupil_range)?;
        // a follow speed of 1 would teleport the eyes
        if !(self.follow_speed > 0.0 && self.follow_speed < 1.0) {
            return Err(ConfigError::NotUnit {
                field: "follow_speed",
                value: self.follow_speed,
            });
        }
        positive("eyebrow_raise_px", self.eyebrow_raise_px)?;
        positive("blink_cooldown_ms", self.blink_cooldown_ms as f32)?;
        positive("wide_smile_cooldown_ms", self.wide_smile_cooldown_ms as f32)?;
        positive("wide_smile_duration_ms", self.wide_smile_duration_ms as f32)?;
        if self.blink_mean_extra_ms < 0.0 || self.wide_smile_mean_extra_ms < 0.0 {
            return Err(ConfigError::NotPositive {
                field: "mean_extra_ms",
                value: self.blink_mean_extra_ms.min(self.wide_smile_mean_extra_ms) as f32,
            });
        }
        Ok(())
    }
}

/// Tuning for the background particle field.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    /// Viewport area (px²) allotted to each particle.
    pub density_area: f32,
    pub speed_max: f32,
    pub size_min: f32,
    pub size_max: f32,
    pub opacity_min: f32,
    pub opacity_max: f32,
    pub link_distance: f32,
    pub link_opacity: f32,
    /// Above this many particles the proximity graph is built with a grid.
    pub grid_threshold: usize,
    /// Regenerate the particle set when the theme flips, not just recolor it.
    pub reseed_on_theme_change: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            density_area: PARTICLE_DENSITY_AREA,
            speed_max: PARTICLE_SPEED_MAX,
            size_min: PARTICLE_SIZE_MIN,
            size_max: PARTICLE_SIZE_MAX,
            opacity_min: PARTICLE_OPACITY_MIN,
            opacity_max: PARTICLE_OPACITY_MAX,
            link_distance: LINK_DISTANCE,
            link_opacity: LINK_OPACITY_MAX,
            grid_threshold: SPATIAL_GRID_MIN_PARTICLES,
            reseed_on_theme_change: false,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("density_area", self.density_area)?;
        if !self.speed_max.is_finite() || self.speed_max < 0.0 {
            return Err(ConfigError::NotPositive {
                field: "speed_max",
                value: self.speed_max,
            });
        }
        positive("size_min", self.size_min)?;
        range("size", self.size_min, self.size_max)?;
        unit("opacity_min", self.opacity_min)?;
        unit("opacity_max", self.opacity_max)?;
        range("opacity", self.opacity_min, self.opacity_max)?;
        positive("link_distance", self.link_distance)?;
        unit("link_opacity", self.link_opacity)?;
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct SceneConfig {
    pub expression: ExpressionConfig,
    pub field: FieldConfig,
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.expression.validate()?;
        self.field.validate()
    }
}
