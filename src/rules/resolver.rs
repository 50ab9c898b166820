//! Round resolution: judge exactly two cards.
//!
//! The resolver never sees deck state. A tie is a `Draw`; nothing here
//! draws extra cards.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardPayload};
use crate::core::EngineResult;

/// Winner of one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundWinner {
    A,
    B,
    Draw,
}

impl RoundWinner {
    /// The same result seen from the other side of the table.
    #[must_use]
    pub const fn swapped(self) -> Self {
        match self {
            RoundWinner::A => RoundWinner::B,
            RoundWinner::B => RoundWinner::A,
            RoundWinner::Draw => RoundWinner::Draw,
        }
    }
}

/// Result of comparing two cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundOutcome {
    pub card_a: Card,
    pub card_b: Card,
    pub winner: RoundWinner,
    /// Human-readable summary, determined by the cards and the winner.
    pub narrative: String,
}

/// Compare two cards by stage.
///
/// ```
/// use circle_of_life::cards::CardCatalog;
/// use circle_of_life::rules::{resolve, RoundWinner};
///
/// let catalog = CardCatalog::standard();
/// let a = catalog.lookup(&"ladybug3".into()).unwrap();
/// let b = catalog.lookup(&"monarch2".into()).unwrap();
///
/// let outcome = resolve(&a, &b);
/// assert_eq!(outcome.winner, RoundWinner::A);
/// assert_eq!(outcome.narrative, "Ladybug stage 3 (pupa) beats Monarch stage 2 (larva): Player A wins the round");
/// ```
#[must_use]
pub fn resolve(card_a: &Card, card_b: &Card) -> RoundOutcome {
    let winner = match card_a.stage.cmp(&card_b.stage) {
        Ordering::Greater => RoundWinner::A,
        Ordering::Less => RoundWinner::B,
        Ordering::Equal => RoundWinner::Draw,
    };

    RoundOutcome {
        card_a: card_a.clone(),
        card_b: card_b.clone(),
        winner,
        narrative: narrate(card_a, card_b, winner),
    }
}

/// Validate two caller-supplied cards, then compare them.
pub fn resolve_payloads(card_a: CardPayload, card_b: CardPayload) -> EngineResult<RoundOutcome> {
    let card_a = card_a.into_card()?;
    let card_b = card_b.into_card()?;
    Ok(resolve(&card_a, &card_b))
}

fn narrate(card_a: &Card, card_b: &Card, winner: RoundWinner) -> String {
    match winner {
        RoundWinner::A => format!("{card_a} beats {card_b}: Player A wins the round"),
        RoundWinner::B => format!("{card_b} beats {card_a}: Player B wins the round"),
        RoundWinner::Draw => format!("{card_a} ties {card_b}: the round is a draw"),
    }
}
