//! Player decks.
//!
//! A `Deck` is backed by `im::Vector`, so cloning a deck into a session
//! snapshot is O(1). The top of the deck is the front of the vector.

use std::collections::BTreeMap;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::definition::{Card, CardId};
use crate::core::GameRng;

/// Ordered remaining cards of one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when no cards are left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Uniformly permute the deck.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.cards.iter().cloned().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Iterate from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Multiset of identifiers in this deck.
    #[must_use]
    pub fn identifier_counts(&self) -> BTreeMap<CardId, u32> {
        let mut counts = BTreeMap::new();
        for card in &self.cards {
            *counts.entry(card.identifier.clone()).or_insert(0) += 1;
        }
        counts
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
