//! Card system: values, catalog, decks and deck building.
//!
//! ## Key Types
//!
//! - `Card`: Immutable card value (insect, stage, image)
//! - `CardPayload`: Unvalidated card as sent by callers
//! - `CardCatalog`: Fixed identifier lookup table
//! - `Deck`: One player's remaining cards
//! - `DeckBuilder`: Builds both decks from a `DeckConfig`

pub mod builder;
pub mod deck;
pub mod definition;
pub mod registry;

pub use builder::{DeckBuilder, MAX_DECK_CARDS};
pub use deck::Deck;
pub use definition::{Card, CardId, CardPayload, InsectKind, Stage};
pub use registry::CardCatalog;
