//! Card catalog for identifier lookup.
//!
//! The `CardCatalog` stores every card the game knows about. The standard
//! catalog is built once per process and never mutated afterwards.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use super::definition::{Card, CardId, InsectKind, Stage};
use crate::core::{EngineResult, GameError};

/// Catalog of card definitions.
///
/// ## Example
///
/// ```
/// use circle_of_life::cards::{CardCatalog, CardId, InsectKind};
///
/// let catalog = CardCatalog::standard();
///
/// let card = catalog.lookup(&CardId::from("monarch3")).unwrap();
/// assert_eq!(card.insect_kind, InsectKind::Monarch);
/// assert_eq!(card.stage.value(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<Card>,
    index: FxHashMap<CardId, usize>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide catalog: ladybug and monarch at each of the four stages.
    pub fn standard() -> &'static CardCatalog {
        static STANDARD: OnceLock<CardCatalog> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let mut catalog = CardCatalog::new();
            for (kind, prefix) in [(InsectKind::Ladybug, "ladybug"), (InsectKind::Monarch, "monarch")] {
                for stage in Stage::ALL {
                    let id = format!("{prefix}{}", stage.value());
                    let image = format!("/{id}.png");
                    catalog.register(Card::new(id, kind, stage, image));
                }
            }
            catalog
        })
    }

    /// Register a card.
    ///
    /// Panics if a card with the same identifier already exists.
    pub fn register(&mut self, card: Card) {
        if self.index.contains_key(&card.identifier) {
            panic!("Card {} already registered", card.identifier);
        }
        self.index.insert(card.identifier.clone(), self.cards.len());
        self.cards.push(card);
    }

    /// Get a card by identifier.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    /// Get a card by identifier, failing with `UnknownCard`.
    pub fn lookup(&self, id: &CardId) -> EngineResult<Card> {
        self.get(id)
            .cloned()
            .ok_or_else(|| GameError::UnknownCard(id.to_string()))
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Cards depicting one insect, lowest stage first.
    pub fn find_by_kind(&self, kind: InsectKind) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.insect_kind == kind)
    }
}
