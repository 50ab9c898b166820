//! Game session: two decks, scores and the round log.

use tracing::{debug, info, instrument};

use super::snapshot::SessionSnapshot;
use crate::cards::{Card, Deck, DeckBuilder};
use crate::core::{DeckConfig, EngineResult, GameError, GameRng, Seat, SeatMap};
use crate::rules::{resolve, RoundOutcome, Scoreboard, Verdict};

/// Session lifecycle.
///
/// Configuration happens in `SessionBuilder`; a built session starts
/// `InProgress`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Rounds may still be played.
    InProgress,
    /// Terminal: the verdict is fixed.
    Finished,
}

/// Builder for a `GameSession` (the configuring phase).
#[derive(Clone, Debug, Default)]
pub struct SessionBuilder {
    config: DeckConfig,
    seed: Option<u64>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards to deal to each player.
    pub fn config(mut self, config: DeckConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed for reproducible decks. Without one, decks are seeded from entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build decks from the standard catalog and start the game.
    pub fn build(self) -> EngineResult<GameSession> {
        let mut rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        self.build_with(&DeckBuilder::default(), &mut rng)
    }

    /// Build with an explicit deck builder and RNG.
    pub fn build_with(self, builder: &DeckBuilder<'_>, rng: &mut GameRng) -> EngineResult<GameSession> {
        let decks = builder.build(&self.config, rng)?;
        let mut session = GameSession::from_decks(decks);
        session.seed = Some(rng.seed());

        info!(
            seed = rng.seed(),
            cards_per_player = session.decks[Seat::A].len(),
            "Game session started"
        );
        Ok(session)
    }
}

/// One game between seats A and B.
///
/// Invariants:
/// - `scores` always equals the tally of `round_log`
/// - `Finished` iff both decks are empty or the game was ended early
/// - the verdict is fixed once, on entering `Finished`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSession {
    decks: SeatMap<Deck>,
    scores: Scoreboard,
    round_log: Vec<RoundOutcome>,
    phase: Phase,
    verdict: Option<Verdict>,
    seed: Option<u64>,
}

impl GameSession {
    /// Start a game from already-built decks.
    #[must_use]
    pub fn from_decks(decks: SeatMap<Deck>) -> Self {
        let mut session = Self {
            decks,
            scores: Scoreboard::default(),
            round_log: Vec::new(),
            phase: Phase::InProgress,
            verdict: None,
            seed: None,
        };
        if session.all_cards_used() {
            session.finish();
        }
        session
    }

    /// Reassemble a session from snapshot parts. Scores must already match
    /// the round log.
    pub(super) fn restore(
        decks: SeatMap<Deck>,
        round_log: Vec<RoundOutcome>,
        seed: Option<u64>,
        finished: bool,
    ) -> Self {
        let scores = Scoreboard::tally(&round_log);
        let mut session = Self {
            decks,
            scores,
            round_log,
            phase: Phase::InProgress,
            verdict: None,
            seed,
        };
        if finished || session.all_cards_used() {
            session.phase = Phase::Finished;
            session.verdict = Some(scores.verdict());
        }
        session
    }

    /// Remaining cards of one seat.
    #[must_use]
    pub fn deck(&self, seat: Seat) -> &Deck {
        &self.decks[seat]
    }

    #[must_use]
    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    #[must_use]
    pub fn round_log(&self) -> &[RoundOutcome] {
        &self.round_log
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seed the decks were shuffled with, if known.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Both decks are empty.
    #[must_use]
    pub fn all_cards_used(&self) -> bool {
        self.decks[Seat::A].is_empty() && self.decks[Seat::B].is_empty()
    }

    /// Finished with cards still in at least one deck.
    #[must_use]
    pub fn ended_early(&self) -> bool {
        self.is_over() && !self.all_cards_used()
    }

    /// Cards one seat has already played, oldest first.
    pub fn played_cards(&self, seat: Seat) -> impl Iterator<Item = &Card> {
        self.round_log.iter().map(move |round| match seat {
            Seat::A => &round.card_a,
            Seat::B => &round.card_b,
        })
    }

    /// Draw the top card of each deck and resolve the round.
    ///
    /// Fails with `NoCardsRemaining` once the game is over or when either
    /// deck is empty; no card is removed in that case.
    #[instrument(skip(self), fields(round = self.round_log.len() + 1))]
    pub fn play_round(&mut self) -> EngineResult<RoundOutcome> {
        if self.is_over() || self.decks[Seat::A].is_empty() || self.decks[Seat::B].is_empty() {
            return Err(GameError::NoCardsRemaining);
        }

        let card_a = self.decks[Seat::A].draw().ok_or(GameError::NoCardsRemaining)?;
        let card_b = self.decks[Seat::B].draw().ok_or(GameError::NoCardsRemaining)?;

        let outcome = resolve(&card_a, &card_b);
        self.scores.record(outcome.winner);
        self.round_log.push(outcome.clone());

        debug!(
            winner = ?outcome.winner,
            scoreline = %self.scores.scoreline(),
            "{}",
            outcome.narrative
        );

        if self.all_cards_used() {
            self.finish();
        }

        Ok(outcome)
    }

    /// Stop the game now. Remaining cards are forfeited, not resolved.
    ///
    /// Calling this on a finished game returns the existing verdict.
    pub fn end_early(&mut self) -> Verdict {
        self.finish()
    }

    /// Verdict of a finished game.
    pub fn final_verdict(&self) -> EngineResult<Verdict> {
        match (self.phase, self.verdict) {
            (Phase::Finished, Some(verdict)) => Ok(verdict),
            _ => Err(GameError::GameNotFinished),
        }
    }

    /// Serializable copy of this session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            deck_a: self.decks[Seat::A].clone(),
            deck_b: self.decks[Seat::B].clone(),
            score_a: self.scores.score_a,
            score_b: self.scores.score_b,
            round_log: self.round_log.clone(),
            is_over: self.is_over(),
            final_verdict: self.verdict,
            seed: self.seed,
        }
    }

    fn finish(&mut self) -> Verdict {
        if let Some(verdict) = self.verdict {
            return verdict;
        }

        let verdict = self.scores.verdict();
        self.phase = Phase::Finished;
        self.verdict = Some(verdict);

        info!(
            verdict = %verdict,
            scoreline = %self.scores.scoreline(),
            forfeited = self.decks[Seat::A].len() + self.decks[Seat::B].len(),
            "Game finished"
        );
        verdict
    }
}
