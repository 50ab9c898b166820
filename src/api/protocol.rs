//! Request and response payloads.
//!
//! Field names are camelCase on the wire. Sessions travel as
//! `SessionSnapshot`s inside these messages.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardPayload, Deck};
use crate::core::{DeckConfig, GameError};
use crate::games::war::SessionSnapshot;
use crate::rules::{RoundOutcome, RoundWinner, Scoreboard, Verdict};

/// Start a new game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameRequest {
    /// Cards per player; the standard eight when omitted.
    #[serde(default, alias = "common_deck")]
    pub configuration: Option<DeckConfig>,
    /// Shuffle seed; drawn from entropy when omitted.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Compare two caller-supplied cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    #[serde(alias = "card_a")]
    pub card_a: CardPayload,
    #[serde(alias = "card_b")]
    pub card_b: CardPayload,
}

/// Result of one `play_round` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayRoundResponse {
    pub updated_deck_a: Deck,
    pub updated_deck_b: Deck,
    pub round_outcome: RoundOutcome,
    pub used_card_a: Card,
    pub used_card_b: Card,
    pub all_cards_used: bool,
    /// Full session after the round, to send back with the next request.
    pub session: SessionSnapshot,
}

/// Round entry for `calculate_final`; only the winner is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub winner: RoundWinner,
}

impl From<&RoundOutcome> for RoundRecord {
    fn from(outcome: &RoundOutcome) -> Self {
        Self {
            winner: outcome.winner,
        }
    }
}

/// Tally a round log without a session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateFinalRequest {
    #[serde(alias = "rounds")]
    pub round_log: Vec<RoundRecord>,
}

/// Final result of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalResult {
    pub final_verdict: Verdict,
    pub score_a: u32,
    pub score_b: u32,
    /// `"<scoreA>-<scoreB>"`
    pub scoreline: String,
}

impl FinalResult {
    #[must_use]
    pub fn new(verdict: Verdict, scores: Scoreboard) -> Self {
        Self {
            final_verdict: verdict,
            score_a: scores.score_a,
            score_b: scores.score_b,
            scoreline: scores.scoreline(),
        }
    }
}

/// Error body returned to callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable kind, e.g. `"no_cards_remaining"`.
    pub error: String,
    pub message: String,
}

impl From<&GameError> for ErrorBody {
    fn from(err: &GameError) -> Self {
        Self {
            error: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}
