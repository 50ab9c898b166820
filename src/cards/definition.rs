//! Card definitions - immutable card values.
//!
//! A `Card` is a value object: two cards with equal fields are the same
//! card. Decks may hold several equal cards.
//!
//! `CardPayload` is the loosely-typed form a caller may send for a
//! stateless comparison; it is validated into a `Card` before use.

use serde::{Deserialize, Serialize};

use crate::core::{EngineResult, GameError};

/// Catalog identifier of a card, e.g. `"ladybug3"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Insect depicted on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsectKind {
    Ladybug,
    Monarch,
}

impl std::fmt::Display for InsectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsectKind::Ladybug => f.write_str("Ladybug"),
            InsectKind::Monarch => f.write_str("Monarch"),
        }
    }
}

/// Life-cycle stage, the sole comparison key.
///
/// Always in `1..=4`: egg, larva, pupa, adult. Serialized as the bare integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Stage(u8);

impl Stage {
    /// Lowest stage.
    pub const EGG: Stage = Stage(1);
    /// Second stage.
    pub const LARVA: Stage = Stage(2);
    /// Third stage.
    pub const PUPA: Stage = Stage(3);
    /// Final stage.
    pub const ADULT: Stage = Stage(4);

    /// All stages, lowest first.
    pub const ALL: [Stage; 4] = [Stage::EGG, Stage::LARVA, Stage::PUPA, Stage::ADULT];

    /// Create a stage, `None` outside `1..=4`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        match value {
            1..=4 => Some(Self(value)),
            _ => None,
        }
    }

    /// Numeric rank.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Life-cycle name of this stage.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self.0 {
            1 => "egg",
            2 => "larva",
            3 => "pupa",
            _ => "adult",
        }
    }
}

impl TryFrom<i64> for Stage {
    type Error = GameError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Stage::new)
            .ok_or_else(|| GameError::InvalidCard(format!("stage {value} is outside 1..=4")))
    }
}

impl From<Stage> for i64 {
    fn from(stage: Stage) -> Self {
        i64::from(stage.0)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stage {} ({})", self.0, self.name())
    }
}

/// Immutable card value.
///
/// ## Example
///
/// ```
/// use circle_of_life::cards::{Card, InsectKind, Stage};
///
/// let card = Card::new("ladybug3", InsectKind::Ladybug, Stage::PUPA, "/ladybug3.png");
/// assert_eq!(card.stage.value(), 3);
/// assert_eq!(card.to_string(), "Ladybug stage 3 (pupa)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Catalog identifier.
    pub identifier: CardId,

    /// Insect depicted.
    pub insect_kind: InsectKind,

    /// Comparison key.
    pub stage: Stage,

    /// Image reference for renderers.
    pub image_ref: String,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(
        identifier: impl Into<CardId>,
        insect_kind: InsectKind,
        stage: Stage,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            insect_kind,
            stage,
            image_ref: image_ref.into(),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.insect_kind, self.stage)
    }
}

/// Unvalidated card as sent by a caller.
///
/// Every field is optional on the wire; only `stage` and `insectKind` are
/// required to form a `Card`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPayload {
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub insect_kind: Option<InsectKind>,
    #[serde(default)]
    pub stage: Option<i64>,
    #[serde(default)]
    pub image_ref: Option<String>,
}

impl CardPayload {
    /// Validate into a `Card`.
    pub fn into_card(self) -> EngineResult<Card> {
        let label = self.identifier.clone().unwrap_or_else(|| "<unnamed>".to_string());

        let stage = self
            .stage
            .ok_or_else(|| GameError::InvalidCard(format!("{label}: missing stage")))?;
        let stage = Stage::try_from(stage)
            .map_err(|_| GameError::InvalidCard(format!("{label}: stage {stage} is outside 1..=4")))?;
        let insect_kind = self
            .insect_kind
            .ok_or_else(|| GameError::InvalidCard(format!("{label}: missing insectKind")))?;

        Ok(Card {
            identifier: CardId::new(self.identifier.unwrap_or_default()),
            insect_kind,
            stage,
            image_ref: self.image_ref.unwrap_or_default(),
        })
    }
}

impl From<Card> for CardPayload {
    fn from(card: Card) -> Self {
        Self {
            identifier: Some(card.identifier.0),
            insect_kind: Some(card.insect_kind),
            stage: Some(i64::from(card.stage.value())),
            image_ref: Some(card.image_ref),
        }
    }
}
