//! Scoring and final verdicts.
//!
//! Scores count round wins per seat. The verdict is a pure function of the
//! two scores; remaining cards never influence it.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::resolver::{RoundOutcome, RoundWinner};
use crate::core::Seat;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Player A has the higher score.
    #[serde(rename = "Player A wins")]
    PlayerA,
    /// Player B has the higher score.
    #[serde(rename = "Player B wins")]
    PlayerB,
    /// Equal scores.
    #[serde(rename = "Draw")]
    Draw,
}

impl Verdict {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        matches!(
            (self, seat),
            (Verdict::PlayerA, Seat::A) | (Verdict::PlayerB, Seat::B)
        )
    }

    /// The verdict as shown to players.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Verdict::PlayerA => "Player A wins",
            Verdict::PlayerB => "Player B wins",
            Verdict::Draw => "Draw",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round wins per seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoreboard {
    pub score_a: u32,
    pub score_b: u32,
}

impl Scoreboard {
    #[must_use]
    pub const fn new(score_a: u32, score_b: u32) -> Self {
        Self { score_a, score_b }
    }

    /// Count the winners in a round log.
    ///
    /// ```
    /// use circle_of_life::cards::CardCatalog;
    /// use circle_of_life::rules::{resolve, Scoreboard, Verdict};
    ///
    /// let catalog = CardCatalog::standard();
    /// let high = catalog.lookup(&"monarch4".into()).unwrap();
    /// let low = catalog.lookup(&"ladybug1".into()).unwrap();
    ///
    /// let log = vec![resolve(&high, &low), resolve(&low, &low)];
    /// let board = Scoreboard::tally(&log);
    ///
    /// assert_eq!(board.scoreline(), "1-0");
    /// assert_eq!(board.verdict(), Verdict::PlayerA);
    /// ```
    #[must_use]
    pub fn tally<'a>(rounds: impl IntoIterator<Item = &'a RoundOutcome>) -> Self {
        rounds.into_iter().fold(Self::default(), |mut board, round| {
            board.record(round.winner);
            board
        })
    }

    /// Credit one round.
    pub fn record(&mut self, winner: RoundWinner) {
        match winner {
            RoundWinner::A => self.score_a += 1,
            RoundWinner::B => self.score_b += 1,
            RoundWinner::Draw => {}
        }
    }

    /// Verdict implied by the current scores.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        match self.score_a.cmp(&self.score_b) {
            Ordering::Greater => Verdict::PlayerA,
            Ordering::Less => Verdict::PlayerB,
            Ordering::Equal => Verdict::Draw,
        }
    }

    /// `"<scoreA>-<scoreB>"`.
    #[must_use]
    pub fn scoreline(&self) -> String {
        format!("{}-{}", self.score_a, self.score_b)
    }
}
