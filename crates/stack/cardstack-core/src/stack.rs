#![allow(dead_code)]
//! Ordered card sequence owned by the engine.

use serde::{Deserialize, Serialize};

use crate::ids::CardId;

/// The stack order; front of the stack is index 0. No external writer may
/// mutate this directly — the engine rotates it in response to gesture ends,
/// and the only permitted reorder is front-to-back.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StackOrder {
    cards: Vec<CardId>,
}

impl StackOrder {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[inline]
    pub fn front(&self) -> Option<CardId> {
        self.cards.first().copied()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<CardId> {
        self.cards.get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[CardId] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().copied()
    }

    /// Append a card at the back. Duplicate identities are rejected.
    pub(crate) fn push_back(&mut self, card: CardId) -> bool {
        if self.cards.contains(&card) {
            return false;
        }
        self.cards.push(card);
        true
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }

    /// Rotate the front card to the back. Returns false on an empty stack.
    pub(crate) fn rotate_front_to_back(&mut self) -> bool {
        if self.cards.is_empty() {
            return false;
        }
        self.cards.rotate_left(1);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_moves_front_to_back() {
        let mut order = StackOrder::new();
        for i in 0..4 {
            assert!(order.push_back(CardId(i)));
        }
        assert!(order.rotate_front_to_back());
        let ids: Vec<u32> = order.iter().map(|c| c.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 0]);
    }

    #[test]
    fn rotate_on_empty_is_noop() {
        let mut order = StackOrder::new();
        assert!(!order.rotate_front_to_back());
        assert!(order.is_empty());
    }

    #[test]
    fn rejects_duplicates() {
        let mut order = StackOrder::new();
        assert!(order.push_back(CardId(7)));
        assert!(!order.push_back(CardId(7)));
        assert_eq!(order.len(), 1);
    }
}
