//! Game configuration types.
//!
//! Callers configure a game by providing a `DeckConfig`: how many copies
//! of each catalog card go into each player's deck. Both players receive
//! the same multiset of cards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Requested copies per card identifier.
///
/// Ordered by identifier so seeded deck builds are reproducible regardless
/// of the order the caller listed the cards in.
///
/// ## Example
///
/// ```
/// use circle_of_life::core::DeckConfig;
///
/// let config = DeckConfig::new()
///     .with_count("ladybug4", 2)
///     .with_count("monarch1", 1);
///
/// assert_eq!(config.total_cards(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckConfig {
    counts: BTreeMap<CardId, u32>,
}

impl DeckConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Set the copy count for a card (builder pattern).
    #[must_use]
    pub fn with_count(mut self, id: impl Into<CardId>, count: u32) -> Self {
        self.set_count(id, count);
        self
    }

    /// Set the copy count for a card.
    pub fn set_count(&mut self, id: impl Into<CardId>, count: u32) {
        self.counts.insert(id.into(), count);
    }

    /// Copy count for a card, zero if unlisted.
    #[must_use]
    pub fn count(&self, id: &CardId) -> u32 {
        self.counts.get(id).copied().unwrap_or(0)
    }

    /// Every listed entry, including zero counts.
    pub fn entries(&self) -> impl Iterator<Item = (&CardId, u32)> {
        self.counts.iter().map(|(id, &count)| (id, count))
    }

    /// Entries that contribute at least one card.
    pub fn positive_entries(&self) -> impl Iterator<Item = (&CardId, u32)> {
        self.entries().filter(|&(_, count)| count > 0)
    }

    /// Number of cards each player's deck will hold, saturating at
    /// `usize::MAX`.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.counts
            .values()
            .try_fold(0usize, |total, &c| total.checked_add(c as usize))
            .unwrap_or(usize::MAX)
    }

    /// True when no card would be dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_cards() == 0
    }
}

impl Default for DeckConfig {
    /// One copy of each of the eight standard cards.
    fn default() -> Self {
        crate::cards::CardCatalog::standard()
            .iter()
            .fold(Self::new(), |config, card| config.with_count(card.identifier.clone(), 1))
    }
}

impl<K: Into<CardId>> FromIterator<(K, u32)> for DeckConfig {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        let mut config = Self::new();
        for (id, count) in iter {
            config.set_count(id, count);
        }
        config
    }
}
