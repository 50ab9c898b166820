//! Deck construction from a `DeckConfig`.
//!
//! Both players get the same multiset of cards; each deck is then shuffled
//! with its own forked RNG stream.

use tracing::debug;

use super::deck::Deck;
use super::registry::CardCatalog;
use crate::core::{DeckConfig, EngineResult, GameError, GameRng, Seat, SeatMap};

/// Most cards a single deck may hold.
pub const MAX_DECK_CARDS: usize = 1024;

/// Builds the two player decks for a new game.
#[derive(Clone, Copy, Debug)]
pub struct DeckBuilder<'a> {
    catalog: &'a CardCatalog,
}

impl Default for DeckBuilder<'static> {
    fn default() -> Self {
        Self::new(CardCatalog::standard())
    }
}

impl<'a> DeckBuilder<'a> {
    pub fn new(catalog: &'a CardCatalog) -> Self {
        Self { catalog }
    }

    /// Build and shuffle one deck per seat.
    ///
    /// Every identifier in `config` must exist in the catalog, even those
    /// with a zero count. Fails with `EmptyConfiguration` if no card would
    /// be dealt and with `ConfigurationTooLarge` above `MAX_DECK_CARDS`.
    pub fn build(&self, config: &DeckConfig, rng: &mut GameRng) -> EngineResult<SeatMap<Deck>> {
        let cards = config
            .entries()
            .map(|(id, count)| Ok((self.catalog.lookup(id)?, count)))
            .collect::<EngineResult<Vec<_>>>()?;

        let total = config.total_cards();
        if total == 0 {
            return Err(GameError::EmptyConfiguration);
        }
        if total > MAX_DECK_CARDS {
            return Err(GameError::ConfigurationTooLarge {
                requested: total,
                limit: MAX_DECK_CARDS,
            });
        }

        let mut common = Vec::with_capacity(total);
        for (card, count) in cards {
            common.extend(std::iter::repeat(card).take(count as usize));
        }

        let decks = SeatMap::from_fn(|seat| {
            let mut deck_rng = rng.fork();
            let mut deck: Deck = common.iter().cloned().collect();
            deck.shuffle(&mut deck_rng);
            debug!(seat = %seat, cards = deck.len(), "Deck built");
            deck
        });

        Ok(decks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    #[test]
    fn test_build_default_config() {
        let decks = DeckBuilder::default()
            .build(&DeckConfig::default(), &mut GameRng::new(42))
            .unwrap();

        for seat in Seat::ALL {
            assert_eq!(decks[seat].len(), 8);
            assert!(decks[seat].identifier_counts().values().all(|&c| c == 1));
        }
    }

    #[test]
    fn test_multiplicities() {
        let config = DeckConfig::new()
            .with_count("ladybug2", 3)
            .with_count("monarch4", 1)
            .with_count("monarch1", 0);

        let decks = DeckBuilder::default().build(&config, &mut GameRng::new(1)).unwrap();

        for seat in Seat::ALL {
            let counts = decks[seat].identifier_counts();
            assert_eq!(counts.len(), 2);
            assert_eq!(counts[&CardId::from("ladybug2")], 3);
            assert_eq!(counts[&CardId::from("monarch4")], 1);
        }
    }

    #[test]
    fn test_empty_configuration() {
        let builder = DeckBuilder::default();
        let mut rng = GameRng::new(0);

        assert_eq!(
            builder.build(&DeckConfig::new(), &mut rng),
            Err(GameError::EmptyConfiguration)
        );
        assert_eq!(
            builder.build(&DeckConfig::new().with_count("ladybug1", 0), &mut rng),
            Err(GameError::EmptyConfiguration)
        );
    }

    #[test]
    fn test_unknown_card() {
        let config = DeckConfig::new()
            .with_count("ladybug1", 1)
            .with_count("beetle9", 2);

        assert_eq!(
            DeckBuilder::default().build(&config, &mut GameRng::new(0)),
            Err(GameError::UnknownCard("beetle9".to_string()))
        );
    }

    #[test]
    fn test_huge_counts_rejected() {
        let builder = DeckBuilder::default();
        let mut rng = GameRng::new(0);

        let config = DeckConfig::new()
            .with_count("ladybug1", u32::MAX)
            .with_count("monarch4", u32::MAX);
        assert_eq!(
            builder.build(&config, &mut rng),
            Err(GameError::ConfigurationTooLarge {
                requested: 2 * u32::MAX as usize,
                limit: MAX_DECK_CARDS,
            })
        );

        let config = config.with_count("beetle9", u32::MAX);
        assert_eq!(
            builder.build(&config, &mut rng),
            Err(GameError::UnknownCard("beetle9".to_string()))
        );
    }

    #[test]
    fn test_limit_is_inclusive() {
        let at_limit = DeckConfig::new().with_count("ladybug2", MAX_DECK_CARDS as u32);
        let decks = DeckBuilder::default().build(&at_limit, &mut GameRng::new(4)).unwrap();
        assert_eq!(decks[Seat::B].len(), MAX_DECK_CARDS);

        let over = at_limit.with_count("monarch2", 1);
        assert!(matches!(
            DeckBuilder::default().build(&over, &mut GameRng::new(4)),
            Err(GameError::ConfigurationTooLarge { requested: 1025, .. })
        ));
    }

    #[test]
    fn test_seeded_builds_repeat() {
        let config = DeckConfig::default();
        let first = DeckBuilder::default().build(&config, &mut GameRng::new(99)).unwrap();
        let second = DeckBuilder::default().build(&config, &mut GameRng::new(99)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_decks_shuffled_independently() {
        let config = DeckConfig::new()
            .with_count("ladybug1", 4)
            .with_count("ladybug3", 4)
            .with_count("monarch2", 4)
            .with_count("monarch4", 4);

        let decks = DeckBuilder::default().build(&config, &mut GameRng::new(5)).unwrap();
        assert_ne!(decks[Seat::A], decks[Seat::B]);
    }

    #[test]
    fn test_config_not_mutated() {
        let config = DeckConfig::default();
        let before = config.clone();
        let _ = DeckBuilder::default().build(&config, &mut GameRng::new(3));
        assert_eq!(config, before);
    }
}
