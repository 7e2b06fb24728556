#![allow(dead_code)]
//! Engine: data ownership and the gesture state machine.
//!
//! Methods:
//! - new, add_card, set_cards, set_config, set_feedback_sink,
//!   apply (one event), apply_batch, relayout, read accessors.
//!
//! Single-threaded and synchronous: every transition is instantaneous given
//! an event, and outputs feed directly into rendering state on the host's UI
//! thread. Events delivered while no drag is active are ignored, not errors.

use crate::config::{ConfigError, StackConfig};
use crate::drag::{DragState, Phase};
use crate::feedback::FeedbackSink;
use crate::ids::{CardId, IdAllocator};
use crate::inputs::{InputEvent, Inputs};
use crate::layout;
use crate::math::Vec2;
use crate::outputs::{Outputs, StackEvent};
use crate::stack::StackOrder;
use crate::threshold;

/// The stacked-card interaction engine. Exclusively owns the stack order and
/// drag state; hosts feed it input events and read back transforms/events.
pub struct Engine {
    // Owned data
    cfg: StackConfig,
    ids: IdAllocator,
    order: StackOrder,
    drag: DragState,
    phase: Phase,

    // Injected capability
    feedback: Option<Box<dyn FeedbackSink>>,

    // Per-call outputs
    outputs: Outputs,
}

impl Engine {
    /// Create a new engine. The configuration is validated here, not at
    /// transform-compute time.
    pub fn new(cfg: StackConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            ids: IdAllocator::new(),
            order: StackOrder::new(),
            drag: DragState::default(),
            phase: Phase::Idle,
            feedback: None,
            outputs: Outputs::default(),
        })
    }

    /// Install a host feedback sink for commit cues.
    pub fn set_feedback_sink(&mut self, sink: Box<dyn FeedbackSink>) {
        self.feedback = Some(sink);
    }

    /// Register one card at the back of the stack, returning its identity.
    /// The display asset it stands for stays host-owned.
    pub fn add_card(&mut self) -> CardId {
        let id = self.ids.alloc_card();
        self.order.push_back(id);
        id
    }

    /// Replace the stack with `count` freshly identified cards.
    /// Any in-flight drag is dropped.
    pub fn set_cards(&mut self, count: usize) -> Vec<CardId> {
        self.order.clear();
        self.drag.reset();
        self.phase = Phase::Idle;
        (0..count).map(|_| self.add_card()).collect()
    }

    /// Replace the configuration. Zeroes the drag state and emits an
    /// immediate full re-layout using the current stack order.
    pub fn set_config(&mut self, cfg: StackConfig) -> Result<&Outputs, ConfigError> {
        cfg.validate()?;
        self.cfg = cfg;
        self.drag.reset();
        self.phase = Phase::Idle;
        self.outputs.clear();
        self.full_layout();
        Ok(&self.outputs)
    }

    /// Recompute a full layout on demand (e.g. after adding cards).
    pub fn relayout(&mut self) -> &Outputs {
        self.outputs.clear();
        self.full_layout();
        &self.outputs
    }

    pub fn config(&self) -> &StackConfig {
        &self.cfg
    }

    pub fn order(&self) -> &StackOrder {
        &self.order
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Apply one gesture event, producing transforms/events for it.
    pub fn apply(&mut self, event: InputEvent) -> &Outputs {
        self.outputs.clear();
        self.dispatch(event);
        &self.outputs
    }

    /// Apply a batch of events in order. Semantic events accumulate across
    /// the batch; transforms reflect the latest layout pass in it.
    pub fn apply_batch(&mut self, inputs: Inputs) -> &Outputs {
        self.outputs.clear();
        for event in inputs.events {
            self.dispatch(event);
        }
        &self.outputs
    }

    fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::DragBegin => self.begin_drag(),
            InputEvent::DragUpdate { translation } => self.update_drag(translation),
            InputEvent::DragEnd { translation } => self.end_drag(translation),
            // Cancel restores the pre-drag layout: identical to an end below
            // threshold.
            InputEvent::DragCancel => self.end_drag(Vec2::ZERO),
            InputEvent::Tap { index } => self.tap(index),
        }
    }

    fn begin_drag(&mut self) {
        if self.order.is_empty() {
            log::debug!("drag begin ignored; stack is empty");
            return;
        }
        // Idempotent while already dragging.
        if self.phase == Phase::Idle {
            self.phase = Phase::Dragging;
            self.drag.active = true;
        }
    }

    fn update_drag(&mut self, translation: Vec2) {
        if self.phase != Phase::Dragging {
            log::debug!("drag update ignored while idle");
            return;
        }
        self.drag.raw_translation = translation;
        self.drag.offset = threshold::map_offset(translation, self.cfg.drag_threshold);
        self.drag.rotation_degrees =
            threshold::map_rotation(translation, self.cfg.drag_threshold);
        // Only the front card re-animates per drag frame.
        self.outputs.set_transforms(layout::compute_transforms_cutoff(
            &self.order,
            &self.drag,
            &self.cfg,
            1,
        ));
    }

    fn end_drag(&mut self, translation: Vec2) {
        if self.phase != Phase::Dragging {
            log::debug!("drag end ignored while idle");
            return;
        }
        let commit = translation.x.abs() > self.cfg.drag_threshold
            || translation.y.abs() > self.cfg.drag_threshold;
        if commit {
            self.phase = Phase::Reordering;
            self.commit_reorder();
        } else {
            self.phase = Phase::SettlingBack;
        }
        self.drag.reset();
        self.full_layout();
        // Transient phases resolve after one layout pass.
        self.phase = Phase::Idle;
    }

    fn commit_reorder(&mut self) {
        if !self.order.rotate_front_to_back() {
            log::info!("reorder commit ignored; stack is empty");
            return;
        }
        self.outputs.push_event(StackEvent::CardReordered {
            new_order: self.order.as_slice().to_vec(),
        });
        self.outputs.push_event(StackEvent::CommitFeedbackRequested);
        if let Some(sink) = self.feedback.as_mut() {
            sink.commit();
        }
    }

    fn tap(&mut self, index: usize) {
        match self.order.get(index) {
            Some(card) => self.outputs.push_event(StackEvent::CardTapped { card, index }),
            None => log::debug!("tap ignored; index {index} out of range"),
        }
    }

    fn full_layout(&mut self) {
        self.outputs
            .set_transforms(layout::compute_transforms(&self.order, &self.drag, &self.cfg));
    }
}
