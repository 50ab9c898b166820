//! Circle of Life: a two-player "war" game over insect life-cycle cards.
//!
//! - Both players receive the same multiset of cards, shuffled separately
//! - Each round, the top card of each deck is flipped and compared by stage
//! - The more advanced stage scores a point; equal stages score nothing
//! - When both decks are empty (or the game is ended early) the higher
//!   score wins

mod session;
mod snapshot;

pub use session::{GameSession, Phase, SessionBuilder};
pub use snapshot::SessionSnapshot;
