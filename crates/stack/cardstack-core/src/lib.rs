#![allow(dead_code)]
//! Cardstack Core (renderer-agnostic)
//!
//! An interaction engine for a fanned stack of cards driven by a continuous
//! drag input. The host toolkit delivers gesture events; the engine maps raw
//! translations through an elastic threshold, updates its drag/phase state,
//! and emits per-card transforms plus semantic events. Applying transforms to
//! an actual view/layer tree is the host's job — the engine never owns pixel
//! data and never blocks.
//!
//! Data flow: `InputEvent` → threshold mapping → state machine → layout pass
//! → `Outputs` (transforms + events).

pub mod config;
pub mod drag;
pub mod engine;
pub mod feedback;
pub mod ids;
pub mod inputs;
pub mod layout;
pub mod math;
pub mod outputs;
pub mod stack;
pub mod threshold;

// Re-exports for consumers (adapters)
pub use config::{ConfigError, EffectPreset, Placement, ShadowParams, StackConfig};
pub use drag::{DragState, Phase};
pub use engine::Engine;
pub use feedback::FeedbackSink;
pub use ids::{CardId, IdAllocator};
pub use inputs::{InputEvent, Inputs};
pub use layout::{compute_transforms, CardEffects, CardTransform};
pub use math::{Size, Vec2};
pub use outputs::{Outputs, StackEvent};
pub use stack::StackOrder;
pub use threshold::{map_offset, map_rotation};
