//! A named participant and the hand they own.

use serde::{Deserialize, Serialize};

use super::hand::{Hand, Revealed};
use super::pot::Pot;
use crate::cards::Card;

/// One side of the game: a display name and a hand nobody else touches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    hand: Hand,
}

impl Participant {
    pub fn new(name: impl Into<String>, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(cards),
        }
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn enough_cards(&self, is_war: bool) -> bool {
        self.hand.enough_cards(is_war)
    }

    /// Reveal one card, or three during a war. `None` takes nothing.
    pub fn reveal(&mut self, is_war: bool) -> Option<Revealed> {
        self.hand.reveal(is_war)
    }

    /// Win the pot. Returns the number of cards gained.
    pub fn take(&mut self, pot: &mut Pot) -> usize {
        self.hand.take(pot)
    }
}
