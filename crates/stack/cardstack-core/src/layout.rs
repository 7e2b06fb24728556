#![allow(dead_code)]
//! Layout solver: per-card transforms and depth-cue effects.
//!
//! Model:
//! - Card `i` rotates by `i * placement.sign() * rotation_angle_unit`
//!   degrees, plus the drag rotation for the front card.
//! - Rotation pivots on the card corner on the placement side (clockwise →
//!   `(w, h)`, counter-clockwise → `(0, h)`), producing a fanned deck rather
//!   than cards spinning in place. The output expresses this as a rotation
//!   about the card center plus a net translation that folds in the pivot
//!   compensation `T(p) · R · T(-p) · T(offset)`.
//! - `z_order = -index`; relative order is what matters, the compositing
//!   convention belongs to the renderer.
//!
//! Pure function of (order, drag, config); nothing here is cached.

use serde::{Deserialize, Serialize};

use crate::config::{EffectPreset, Placement, ShadowParams, StackConfig};
use crate::drag::DragState;
use crate::ids::CardId;
use crate::math::Vec2;
use crate::stack::StackOrder;

/// Depth-cue visual effects for one card.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct CardEffects {
    pub blur_radius: f32,
    /// Clamped to [0, 1]; the renderer receives a valid opacity.
    pub opacity: f32,
    pub shadow: ShadowParams,
}

/// One card's computed transform for a layout pass. Derived, never persisted.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct CardTransform {
    pub card: CardId,
    pub index: usize,
    /// Rotation about the card center, in degrees.
    pub rotation_degrees: f32,
    /// Net translation; together with the rotation this reproduces the
    /// pivot-corner fan and, for the front card, the drag offset.
    pub translation: Vec2,
    pub z_order: i32,
    /// Corner radius derived from `corner_radius_ratio * min(w, h)`.
    pub corner_radius: f32,
    pub effects: CardEffects,
}

/// Depth-cue effects for a given stack level.
pub fn effects_for(index: usize, preset: &EffectPreset) -> CardEffects {
    let level = index as f32;
    CardEffects {
        blur_radius: preset.blur_per_level * level,
        opacity: (preset.base_opacity - preset.opacity_falloff * level).clamp(0.0, 1.0),
        shadow: preset.shadow,
    }
}

/// Compute transforms for every visible card (capped by `visible_limit`).
/// Empty order yields an empty vec.
pub fn compute_transforms(
    order: &StackOrder,
    drag: &DragState,
    config: &StackConfig,
) -> Vec<CardTransform> {
    compute_transforms_cutoff(order, drag, config, usize::MAX)
}

/// Like [`compute_transforms`] but restricted to the first `cutoff` cards.
/// Drag updates use `cutoff = 1`: only the front card re-animates per frame.
pub fn compute_transforms_cutoff(
    order: &StackOrder,
    drag: &DragState,
    config: &StackConfig,
    cutoff: usize,
) -> Vec<CardTransform> {
    let visible = order
        .len()
        .min(config.visible_limit.unwrap_or(usize::MAX))
        .min(cutoff);

    let w = config.card_size.width;
    let h = config.card_size.height;
    let pivot_x = match config.placement {
        Placement::Clockwise => w,
        Placement::CounterClockwise => 0.0,
    };
    let pivot_y = h;
    // Pivot relative to the card center.
    let p = Vec2::new(pivot_x - w * 0.5, pivot_y - h * 0.5);
    let corner_radius = config.corner_radius_ratio * config.card_size.min_side();

    let mut out = Vec::with_capacity(visible);
    for index in 0..visible {
        let card = match order.get(index) {
            Some(c) => c,
            None => break,
        };
        let is_front = index == 0;
        let drag_rotation = if is_front { drag.rotation_degrees } else { 0.0 };
        let angle = index as f32 * config.placement.sign() * config.rotation_angle_unit
            + drag_rotation;
        let (sin, cos) = angle.to_radians().sin_cos();

        let offset = if is_front { drag.offset } else { Vec2::ZERO };
        // Net translation of T(p) · R(angle) · T(-p) · T(offset).
        let rel = Vec2::new(offset.x - p.x, offset.y - p.y);
        let translation = Vec2::new(
            p.x + cos * rel.x - sin * rel.y,
            p.y + sin * rel.x + cos * rel.y,
        );

        out.push(CardTransform {
            card,
            index,
            rotation_degrees: angle,
            translation,
            z_order: -(index as i32),
            corner_radius,
            effects: effects_for(index, &config.effects),
        });
    }
    out
}
