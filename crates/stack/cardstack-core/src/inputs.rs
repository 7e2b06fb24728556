#![allow(dead_code)]
//! Input contracts for the core engine.
//!
//! The host's gesture recognizers translate into these events and deliver
//! them in temporal order; the engine never reorders or coalesces. A drag
//! cancel is handled exactly like an end below threshold.

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// One gesture event from the host toolkit.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub enum InputEvent {
    DragBegin,
    DragUpdate { translation: Vec2 },
    DragEnd { translation: Vec2 },
    DragCancel,
    /// Tap on the card currently at `index`; distinct from a drag, never
    /// affects order or drag state.
    Tap { index: usize },
}

/// A batch of events applied in order by `Engine::apply_batch`.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    #[serde(default)]
    pub events: Vec<InputEvent>,
}
