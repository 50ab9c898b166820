//! Core engine types: seats, RNG, configuration and errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::DeckConfig;
pub use error::{EngineResult, GameError};
pub use player::{Seat, SeatMap};
pub use rng::GameRng;
