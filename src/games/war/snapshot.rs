//! Session snapshots.
//!
//! The engine keeps no sessions of its own: callers hold a
//! `SessionSnapshot` and send it back with every request. Restoring a
//! snapshot checks the session invariants, since the caller may have
//! edited it.

use serde::{Deserialize, Serialize};

use super::session::GameSession;
use crate::cards::Deck;
use crate::core::{EngineResult, GameError, SeatMap};
use crate::rules::{resolve, RoundOutcome, Scoreboard, Verdict};

/// Plain-data copy of a `GameSession`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub deck_a: Deck,
    pub deck_b: Deck,
    #[serde(default)]
    pub score_a: u32,
    #[serde(default)]
    pub score_b: u32,
    #[serde(default)]
    pub round_log: Vec<RoundOutcome>,
    #[serde(default)]
    pub is_over: bool,
    #[serde(default)]
    pub final_verdict: Option<Verdict>,
    /// Seed the decks were shuffled with.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SessionSnapshot {
    /// Compact binary encoding.
    pub fn to_bytes(&self) -> EngineResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| GameError::InvalidSnapshot(e.to_string()))
    }

    /// Decode the binary encoding produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> EngineResult<Self> {
        bincode::deserialize(bytes).map_err(|e| GameError::InvalidSnapshot(e.to_string()))
    }
}

impl TryFrom<SessionSnapshot> for GameSession {
    type Error = GameError;

    fn try_from(snapshot: SessionSnapshot) -> Result<Self, Self::Error> {
        for (i, round) in snapshot.round_log.iter().enumerate() {
            let expected = resolve(&round.card_a, &round.card_b).winner;
            if round.winner != expected {
                return Err(GameError::InvalidSnapshot(format!(
                    "round {} records winner {:?} but {} vs {} gives {:?}",
                    i + 1,
                    round.winner,
                    round.card_a,
                    round.card_b,
                    expected
                )));
            }
        }

        let scores = Scoreboard::new(snapshot.score_a, snapshot.score_b);
        let tallied = Scoreboard::tally(&snapshot.round_log);
        if scores != tallied {
            return Err(GameError::InvalidSnapshot(format!(
                "scores {} do not match round log {}",
                scores.scoreline(),
                tallied.scoreline()
            )));
        }

        let session = GameSession::restore(
            SeatMap::new(snapshot.deck_a, snapshot.deck_b),
            snapshot.round_log,
            snapshot.seed,
            snapshot.is_over,
        );

        match (snapshot.final_verdict, session.final_verdict()) {
            (Some(claimed), Ok(actual)) if claimed != actual => {
                Err(GameError::InvalidSnapshot(format!(
                    "verdict \"{claimed}\" does not match scores {}",
                    scores.scoreline()
                )))
            }
            (Some(claimed), Err(_)) => Err(GameError::InvalidSnapshot(format!(
                "verdict \"{claimed}\" on a game still in progress"
            ))),
            _ => Ok(session),
        }
    }
}

impl From<&GameSession> for SessionSnapshot {
    fn from(session: &GameSession) -> Self {
        session.snapshot()
    }
}
