//! Cards on the board during a round.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Cards removed from both hands and not yet owned by anyone.
///
/// Grows by two on every reveal and by six on every war, then is either
/// taken whole by the round's winner or abandoned.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    cards: Vec<Card>,
}

impl Pot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in the order they hit the board.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Remove every card, leaving the pot empty.
    pub fn drain(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}

impl From<Vec<Card>> for Pot {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
