//! Engine error taxonomy.
//!
//! Every failure is a local validation failure returned to the caller.
//! Nothing here is retried or fatal.

/// Errors produced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Identifier is not in the card catalog.
    #[error("Unknown card: {0}")]
    UnknownCard(String),

    /// Configuration yields no cards.
    #[error("Deck configuration contains no cards")]
    EmptyConfiguration,

    /// Configuration asks for more cards per player than a deck may hold.
    #[error("Deck configuration requests {requested} cards per player, limit is {limit}")]
    ConfigurationTooLarge { requested: usize, limit: usize },

    /// Card payload is malformed (missing or out-of-range stage).
    #[error("Invalid card: {0}")]
    InvalidCard(String),

    /// A round was requested but a deck is empty or the game is over.
    #[error("No cards remaining to play a round")]
    NoCardsRemaining,

    /// Verdict requested while the game is still in progress.
    #[error("Game is not finished")]
    GameNotFinished,

    /// Snapshot cannot be decoded or breaks a session invariant.
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Request body cannot be decoded.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl GameError {
    /// Stable machine-readable name for this error kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GameError::UnknownCard(_) => "unknown_card",
            GameError::EmptyConfiguration => "empty_configuration",
            GameError::ConfigurationTooLarge { .. } => "configuration_too_large",
            GameError::InvalidCard(_) => "invalid_card",
            GameError::NoCardsRemaining => "no_cards_remaining",
            GameError::GameNotFinished => "game_not_finished",
            GameError::InvalidSnapshot(_) => "invalid_snapshot",
            GameError::InvalidRequest(_) => "invalid_request",
        }
    }
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, GameError>;
