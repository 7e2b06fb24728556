#![allow(dead_code)]
//! Output contracts from the core engine.
//!
//! Outputs carry the transforms of the latest layout pass plus a separate
//! list of semantic events. Adapters apply transforms to the host view/layer
//! tree and transport events (haptic cues, tap callbacks) to the host.

use serde::{Deserialize, Serialize};

use crate::ids::CardId;
use crate::layout::CardTransform;

/// Discrete semantic signals emitted while applying events.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[non_exhaustive]
pub enum StackEvent {
    /// The front card was committed to the back of the stack.
    CardReordered { new_order: Vec<CardId> },
    /// A reorder committed; the host may play a haptic/sound cue.
    CommitFeedbackRequested,
    CardTapped { card: CardId, index: usize },
}

/// Outputs returned by `Engine::apply` / `Engine::apply_batch`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    /// Transforms of the latest layout pass (cutoff passes carry only the
    /// front card).
    #[serde(default)]
    pub transforms: Vec<CardTransform>,
    #[serde(default)]
    pub events: Vec<StackEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.transforms.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: StackEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn set_transforms(&mut self, transforms: Vec<CardTransform>) {
        self.transforms = transforms;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty() && self.events.is_empty()
    }
}
