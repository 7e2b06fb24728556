#![allow(dead_code)]
//! Identifiers and a simple allocator for cards.

use serde::{Deserialize, Serialize};

/// Opaque, stable card identity. The display asset a card stands for is
/// owned by the host; the engine only tracks ordering.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

/// Monotonic allocator for CardId.
/// Dense indices improve cache locality; IDs are opaque externally.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_card: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_card(&mut self) -> CardId {
        let id = CardId(self.next_card);
        self.next_card = self.next_card.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
