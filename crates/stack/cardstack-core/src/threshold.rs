#![allow(dead_code)]
//! Threshold mapping from raw drag translations to clamped offsets/rotations.
//!
//! Model:
//! - Below `threshold * headroom` the mapping is the identity (linear region).
//! - Beyond it, movement is elastically compressed: the translation's unit
//!   vector is rescaled to `max_t + (d - max_t) * OVERFLOW_DAMPING`, so drags
//!   advance at 10% of their true rate past the knee and the on-screen offset
//!   is softly bounded.
//! - Rotation derives from the (possibly compressed) x component, scaled so
//!   that `x == threshold * ROTATION_HEADROOM` yields the maximum angle.
//!
//! Pure and stateless; identical inputs always map to identical outputs.

use crate::math::Vec2;

/// Headroom past the drag threshold where offsets still track 1:1.
pub const OFFSET_HEADROOM: f32 = 1.15;
/// Headroom used when deriving rotation from the x component.
pub const ROTATION_HEADROOM: f32 = 1.1;
/// Fraction of true movement that survives past the elastic knee.
pub const OVERFLOW_DAMPING: f32 = 0.1;
/// Hard bound on drag-derived rotation, in degrees.
pub const MAX_ROTATION_DEG: f32 = 15.0;

/// Rescale `translation` onto the elastic curve with knee at `max_t`.
fn soft_clamp(translation: Vec2, max_t: f32) -> Vec2 {
    let d = translation.length();
    if d <= max_t {
        return translation;
    }
    let scale = max_t + (d - max_t) * OVERFLOW_DAMPING;
    translation.scaled(scale / d)
}

/// Map a raw drag translation to the offset applied to the front card.
pub fn map_offset(translation: Vec2, threshold: f32) -> Vec2 {
    soft_clamp(translation, threshold * OFFSET_HEADROOM)
}

/// Map a raw drag translation to the front card's drag rotation, in degrees.
/// Bounded to ±[`MAX_ROTATION_DEG`] for every input.
pub fn map_rotation(translation: Vec2, threshold: f32) -> f32 {
    let max_t = threshold * ROTATION_HEADROOM;
    let x = soft_clamp(translation, max_t).x;
    (x * MAX_ROTATION_DEG / max_t).clamp(-MAX_ROTATION_DEG, MAX_ROTATION_DEG)
}
