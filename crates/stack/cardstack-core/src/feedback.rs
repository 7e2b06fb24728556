#![allow(dead_code)]
//! Injected feedback capability.

/// Host-provided sink for commit cues (haptics, sound). The engine calls it
/// when a reorder commits, in addition to emitting
/// `StackEvent::CommitFeedbackRequested` — never through global state, so
/// tests can count cues deterministically without hardware.
pub trait FeedbackSink {
    fn commit(&mut self);
}
