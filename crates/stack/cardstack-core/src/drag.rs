#![allow(dead_code)]
//! Drag state and gesture phase.

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// Phase of the gesture state machine. `SettlingBack` and `Reordering` are
/// transient: they resolve back to `Idle` within the event that produced
/// them, after one full layout pass.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
    SettlingBack,
    Reordering,
}

/// Continuous drag state. Populated every update while a drag is active,
/// reset to zero/inactive at gesture end. Only the front card (index 0) is
/// affected by it.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DragState {
    pub active: bool,
    /// Raw translation as delivered by the host, unmapped.
    pub raw_translation: Vec2,
    /// Threshold-mapped offset applied to the front card.
    pub offset: Vec2,
    /// Threshold-mapped rotation applied to the front card, in degrees.
    pub rotation_degrees: f32,
}

impl DragState {
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
