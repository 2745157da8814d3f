//! Timing and geometry of the loading cycle.

use crate::shape::Shape;
use enum_map::{enum_map, EnumMap};
use std::time::Duration;
use thiserror::Error;

/// Distance the shape falls, in device-independent pixels.
pub const FALL_DISTANCE_DP: f32 = 80.0;

/// Duration of each phase (falling, rising, rotating).
pub const PHASE_DURATION: Duration = Duration::from_millis(500);

/// Horizontal scale of the shadow while the shape is at the top of its bounce.
pub const SHADOW_MAX_SCALE: f32 = 1.0;

/// Horizontal scale of the shadow while the shape is at the bottom of its fall.
pub const SHADOW_MIN_SCALE: f32 = 0.3;

/// Converts a length in device-independent pixels to device pixels at the given `density`.
///
/// Fractional pixels are truncated toward zero.
pub fn dp_to_px(dp: f32, density: f32) -> f32 {
    (dp * density).trunc()
}

/// Rotation applied while rising, keyed by the shape that is rising.
///
/// Circles and squares turn half a revolution. A triangle only needs a third of a revolution to
/// look the same again, so it turns `-120°` instead.
pub fn default_rotation_targets() -> EnumMap<Shape, f32> {
    enum_map! {
        Shape::Circle => 180.0,
        Shape::Square => 180.0,
        Shape::Triangle => -120.0,
    }
}

/// Error produced by [`CycleConfiguration::build`] when a setting is unusable.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("screen density must be positive, got {0}")]
    NonPositiveDensity(f32),
    #[error("phase duration must be a positive, finite number of seconds, got {0}")]
    InvalidDuration(f32),
    #[error("shadow scale range {min}..={max} is not within 0.0..=1.0 or is reversed")]
    ShadowScaleOutOfRange { min: f32, max: f32 },
}

/// Resolved settings for an [`AnimationCycleController`](crate::cycle::AnimationCycleController).
///
/// Created with the [`CycleConfiguration`] builder. The [`Default`] is the standard cycle at a
/// density of `1.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct CycleConfig {
    fall_distance: f32,
    phase_duration: Duration,
    rotation_targets: EnumMap<Shape, f32>,
    shadow_min_scale: f32,
    shadow_max_scale: f32,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            fall_distance: dp_to_px(FALL_DISTANCE_DP, 1.0),
            phase_duration: PHASE_DURATION,
            rotation_targets: default_rotation_targets(),
            shadow_min_scale: SHADOW_MIN_SCALE,
            shadow_max_scale: SHADOW_MAX_SCALE,
        }
    }
}

impl CycleConfig {
    /// Distance the shape falls, in device pixels.
    pub fn fall_distance(&self) -> f32 {
        self.fall_distance
    }

    /// Duration of each phase.
    pub fn phase_duration(&self) -> Duration {
        self.phase_duration
    }

    /// Final rotation, in degrees, for a rise that starts while `shape` is showing.
    pub fn rotation_target(&self, shape: Shape) -> f32 {
        self.rotation_targets[shape]
    }

    /// Shadow scale at the bottom of the fall.
    pub fn shadow_min_scale(&self) -> f32 {
        self.shadow_min_scale
    }

    /// Shadow scale at the top of the bounce.
    pub fn shadow_max_scale(&self) -> f32 {
        self.shadow_max_scale
    }
}

/// Fluent builder for a [`CycleConfig`].
#[derive(Clone, Debug)]
pub struct CycleConfiguration {
    density: f32,
    duration_seconds: f32,
    fall_distance_dp: f32,
    shadow_min_scale: f32,
    shadow_max_scale: f32,
}

impl Default for CycleConfiguration {
    fn default() -> Self {
        Self {
            density: 1.0,
            duration_seconds: PHASE_DURATION.as_secs_f32(),
            fall_distance_dp: FALL_DISTANCE_DP,
            shadow_min_scale: SHADOW_MIN_SCALE,
            shadow_max_scale: SHADOW_MAX_SCALE,
        }
    }
}

impl CycleConfiguration {
    /// Creates a builder with the standard settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the screen density, i.e. device pixels per device-independent pixel.
    pub fn density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    /// Configures the duration of each phase, in seconds.
    pub fn duration_seconds(mut self, duration_seconds: f32) -> Self {
        self.duration_seconds = duration_seconds;
        self
    }

    /// Configures how far the shape falls, in device-independent pixels.
    pub fn fall_distance_dp(mut self, fall_distance_dp: f32) -> Self {
        self.fall_distance_dp = fall_distance_dp;
        self
    }

    /// Configures the shadow scale at the bottom (`min`) and top (`max`) of the bounce.
    pub fn shadow_scale(mut self, min: f32, max: f32) -> Self {
        self.shadow_min_scale = min;
        self.shadow_max_scale = max;
        self
    }

    /// Validates the settings and builds the [`CycleConfig`], consuming self.
    pub fn build(self) -> Result<CycleConfig, ConfigError> {
        if !(self.density > 0.0) {
            return Err(ConfigError::NonPositiveDensity(self.density));
        }
        let phase_duration = match Duration::try_from_secs_f32(self.duration_seconds) {
            Ok(duration) if !duration.is_zero() => duration,
            _ => return Err(ConfigError::InvalidDuration(self.duration_seconds)),
        };
        let (min, max) = (self.shadow_min_scale, self.shadow_max_scale);
        if !(0.0..=1.0).contains(&min) || !(0.0..=1.0).contains(&max) || min > max {
            return Err(ConfigError::ShadowScaleOutOfRange { min, max });
        }
        Ok(CycleConfig {
            fall_distance: dp_to_px(self.fall_distance_dp, self.density),
            phase_duration,
            rotation_targets: default_rotation_targets(),
            shadow_min_scale: min,
            shadow_max_scale: max,
        })
    }
}
