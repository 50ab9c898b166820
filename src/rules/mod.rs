//! Game rules: round resolution and scoring.
//!
//! - `resolve` judges exactly two cards by stage
//! - `Scoreboard` accumulates round wins and derives the `Verdict`

pub mod engine;
pub mod resolver;

pub use engine::{Scoreboard, Verdict};
pub use resolver::{resolve, resolve_payloads, RoundOutcome, RoundWinner};
