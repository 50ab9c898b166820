//! # circle-of-life
//!
//! Round-resolution and scoring engine for Circle of Life, a two-player
//! "war" card game over insect life-cycle cards.
//!
//! ## Design Principles
//!
//! 1. **Stateless Service**: The engine stores no sessions. Callers hold a
//!    `SessionSnapshot` and pass it back with each request.
//!
//! 2. **Deterministic When Seeded**: All randomness is the deck shuffle,
//!    driven by `GameRng` (ChaCha8). A seed reproduces both decks.
//!
//! 3. **Persistent Data Structures**: Decks are `im::Vector`s, so session
//!    snapshots clone in O(1).
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, deck configuration, errors
//! - `cards`: Card values, the catalog, decks and deck building
//! - `rules`: Round resolution, scoring and the final verdict
//! - `games`: The war game session and its snapshots
//! - `api`: Request/response operations over snapshots
//! - `server`: HTTP routes and server configuration

pub mod api;
pub mod cards;
pub mod core;
pub mod games;
pub mod rules;
pub mod server;

// Re-export commonly used types
pub use crate::core::{DeckConfig, EngineResult, GameError, GameRng, Seat, SeatMap};

pub use crate::cards::{Card, CardCatalog, CardId, CardPayload, Deck, DeckBuilder, InsectKind, Stage};

pub use crate::rules::{resolve, RoundOutcome, RoundWinner, Scoreboard, Verdict};

pub use crate::games::war::{GameSession, Phase, SessionBuilder, SessionSnapshot};

pub use crate::api::GameService;
