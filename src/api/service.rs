//! Request/response operations over session snapshots.
//!
//! `GameService` is stateless: every call takes the caller's snapshot,
//! rebuilds the session, applies one operation and hands back a new
//! snapshot. Any transport can sit in front of it.

use tracing::{info, instrument};

use super::protocol::{
    CalculateFinalRequest, CompareRequest, FinalResult, NewGameRequest, PlayRoundResponse,
};
use crate::cards::{Card, CardCatalog, DeckBuilder};
use crate::core::{EngineResult, GameRng, Seat};
use crate::games::war::{GameSession, SessionBuilder, SessionSnapshot};
use crate::rules::{resolve_payloads, RoundOutcome, Scoreboard};

/// Entry point for callers of the engine.
#[derive(Clone, Copy, Debug)]
pub struct GameService {
    catalog: &'static CardCatalog,
}

impl Default for GameService {
    fn default() -> Self {
        Self::new(CardCatalog::standard())
    }
}

impl GameService {
    pub fn new(catalog: &'static CardCatalog) -> Self {
        Self { catalog }
    }

    /// Every card a configuration may reference.
    #[must_use]
    pub fn list_cards(&self) -> Vec<Card> {
        self.catalog.iter().cloned().collect()
    }

    /// Deal two decks and return the opening snapshot.
    #[instrument(skip(self, req), fields(seed = ?req.seed))]
    pub fn new_game(&self, req: NewGameRequest) -> EngineResult<SessionSnapshot> {
        let mut rng = match req.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let session = SessionBuilder::new()
            .config(req.configuration.unwrap_or_default())
            .build_with(&DeckBuilder::new(self.catalog), &mut rng)?;
        Ok(session.snapshot())
    }

    /// Stateless comparison of two cards.
    pub fn compare_cards(&self, req: CompareRequest) -> EngineResult<RoundOutcome> {
        resolve_payloads(req.card_a, req.card_b)
    }

    /// Play one round of the session carried by `snapshot`.
    #[instrument(skip_all, fields(round = snapshot.round_log.len() + 1))]
    pub fn play_round(&self, snapshot: SessionSnapshot) -> EngineResult<PlayRoundResponse> {
        let mut session = GameSession::try_from(snapshot)?;
        let outcome = session.play_round()?;

        Ok(PlayRoundResponse {
            updated_deck_a: session.deck(Seat::A).clone(),
            updated_deck_b: session.deck(Seat::B).clone(),
            used_card_a: outcome.card_a.clone(),
            used_card_b: outcome.card_b.clone(),
            all_cards_used: session.all_cards_used(),
            round_outcome: outcome,
            session: session.snapshot(),
        })
    }

    /// Finish the session (early if cards remain) and report the verdict.
    #[instrument(skip_all)]
    pub fn end_game(&self, snapshot: SessionSnapshot) -> EngineResult<FinalResult> {
        let mut session = GameSession::try_from(snapshot)?;
        let verdict = session.end_early();
        if session.ended_early() {
            info!(
                remaining_a = session.deck(Seat::A).len(),
                remaining_b = session.deck(Seat::B).len(),
                "Game ended before all cards were played"
            );
        }
        Ok(FinalResult::new(verdict, session.scores()))
    }

    /// Verdict from a bare round log.
    #[must_use]
    pub fn calculate_final(&self, req: CalculateFinalRequest) -> FinalResult {
        let mut scores = Scoreboard::default();
        for round in &req.round_log {
            scores.record(round.winner);
        }
        FinalResult::new(scores.verdict(), scores)
    }
}
