//! The 52-card deck: construction, validation, shuffle and deal.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::{GameRng, Result, WarError};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// A full deck of unique cards.
///
/// Index 0 is dealt first. The deck is only read after `deal()`.
/// Serialized as a plain card list; deserializing validates like `from_cards`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The standard 52-card deck, rank-major: `2S 2C 2D 2H 3S ...`.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Rank::ALL
            .iter()
            .flat_map(|&rank| Suit::ALL.iter().map(move |&suit| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// Build a deck from caller-supplied cards.
    ///
    /// Fails unless the cards are exactly the 52 distinct cards.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        if cards.len() != DECK_SIZE {
            return Err(WarError::MalformedDeck {
                expected: DECK_SIZE,
                actual: cards.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for &card in &cards {
            if !seen.insert(card) {
                return Err(WarError::DuplicateCard(card));
            }
        }

        Ok(Self { cards })
    }

    /// Randomly permute the cards. Membership never changes.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
        tracing::trace!(top = ?self.cards.first(), "deck shuffled");
    }

    /// Split the deck in half.
    ///
    /// The first half goes to the human, the second to the computer.
    /// Concatenating the halves gives back the current order.
    #[must_use]
    pub fn deal(&self) -> (Vec<Card>, Vec<Card>) {
        let half = self.cards.len() / 2;
        (self.cards[..half].to_vec(), self.cards[half..].to_vec())
    }

    /// Cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<Card>> for Deck {
    type Error = WarError;

    fn try_from(cards: Vec<Card>) -> Result<Self> {
        Self::from_cards(cards)
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}

/// 0-based index of a card's rank within the fixed rank ordering.
#[must_use]
pub fn rank_index(card: &Card) -> usize {
    card.rank_index()
}
