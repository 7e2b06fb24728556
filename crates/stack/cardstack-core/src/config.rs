#![allow(dead_code)]
//! Engine configuration (the layout parameters of a stack session).
//!
//! Validation happens at the configuration boundary: `Engine::new` and
//! `Engine::set_config` reject out-of-range values with [`ConfigError`], so
//! the transform-compute path never has to.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::math::{Size, Vec2};

/// Which way successive cards fan out behind the front card.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Placement {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Placement {
    /// Sign applied to the per-index rotation step.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Placement::Clockwise => 1.0,
            Placement::CounterClockwise => -1.0,
        }
    }
}

/// Constant drop-shadow parameters attached to every card.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ShadowParams {
    pub opacity: f32,
    pub offset: Vec2,
    pub radius: f32,
}

impl Default for ShadowParams {
    fn default() -> Self {
        Self {
            opacity: 0.25,
            offset: Vec2 { x: 0.0, y: 2.0 },
            radius: 5.0,
        }
    }
}

/// Depth-cue presets applied per stack level. These are visual presets, not
/// physically derived quantities; hosts may tune them freely.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct EffectPreset {
    /// Blur radius added per level of depth.
    pub blur_per_level: f32,
    /// Opacity of the front card before clamping.
    pub base_opacity: f32,
    /// Opacity lost per level of depth.
    pub opacity_falloff: f32,
    pub shadow: ShadowParams,
}

impl Default for EffectPreset {
    fn default() -> Self {
        Self {
            blur_per_level: 3.0,
            base_opacity: 1.5,
            opacity_falloff: 0.45,
            shadow: ShadowParams::default(),
        }
    }
}

/// Immutable-per-session layout parameters. Replacing the config on a live
/// engine zeroes the drag state and triggers an immediate full re-layout.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StackConfig {
    pub card_size: Size,
    /// Rotation step between adjacent cards, in degrees.
    pub rotation_angle_unit: f32,
    pub placement: Placement,
    /// Drag distance (per axis) past which a gesture end commits a reorder.
    pub drag_threshold: f32,
    /// Corner radius as a ratio of the card's smaller side.
    pub corner_radius_ratio: f32,
    /// Cap on how many cards receive transforms per layout pass; None = all.
    #[serde(default)]
    pub visible_limit: Option<usize>,
    #[serde(default)]
    pub effects: EffectPreset,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            card_size: Size::new(200.0, 300.0),
            rotation_angle_unit: 10.0,
            placement: Placement::Clockwise,
            drag_threshold: 50.0,
            corner_radius_ratio: 0.1,
            visible_limit: None,
            effects: EffectPreset::default(),
        }
    }
}

/// Errors produced while validating a stack configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("card size must be finite and positive, got {width}x{height}")]
    InvalidCardSize { width: f32, height: f32 },
    #[error("drag threshold must be finite and positive, got {0}")]
    InvalidDragThreshold(f32),
    #[error("rotation angle unit must be finite, got {0}")]
    InvalidRotationUnit(f32),
    #[error("corner radius ratio must be within [0, 0.5], got {0}")]
    InvalidCornerRadiusRatio(f32),
    #[error("effect preset values must be finite")]
    InvalidEffectPreset,
}

impl StackConfig {
    /// Validate boundary invariants (finite, positive sizes; sane ratios).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Size { width, height } = self.card_size;
        if !self.card_size.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::InvalidCardSize { width, height });
        }
        if !self.drag_threshold.is_finite() || self.drag_threshold <= 0.0 {
            return Err(ConfigError::InvalidDragThreshold(self.drag_threshold));
        }
        if !self.rotation_angle_unit.is_finite() {
            return Err(ConfigError::InvalidRotationUnit(self.rotation_angle_unit));
        }
        if !self.corner_radius_ratio.is_finite()
            || !(0.0..=0.5).contains(&self.corner_radius_ratio)
        {
            return Err(ConfigError::InvalidCornerRadiusRatio(
                self.corner_radius_ratio,
            ));
        }
        let fx = &self.effects;
        if !fx.blur_per_level.is_finite()
            || !fx.base_opacity.is_finite()
            || !fx.opacity_falloff.is_finite()
            || !fx.shadow.opacity.is_finite()
            || !fx.shadow.offset.is_finite()
            || !fx.shadow.radius.is_finite()
        {
            return Err(ConfigError::InvalidEffectPreset);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(StackConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_nonpositive_size_and_threshold() {
        let mut cfg = StackConfig::default();
        cfg.card_size = Size::new(-10.0, 300.0);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidCardSize { .. })
        ));

        let mut cfg = StackConfig::default();
        cfg.drag_threshold = 0.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidDragThreshold(_))
        ));
    }

    #[test]
    fn rejects_non_finite_rotation_unit() {
        let mut cfg = StackConfig::default();
        cfg.rotation_angle_unit = f32::NAN;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidRotationUnit(_))
        ));
    }
}
