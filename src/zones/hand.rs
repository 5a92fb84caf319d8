//! A participant's hand of face-down cards.
//!
//! Order is bottom-to-top: index 0 is the bottom, the last card is the top
//! and is revealed next. Won cards are slid under the bottom.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::pot::Pot;
use crate::cards::Card;

/// Cards each side commits when a war is declared.
pub const WAR_SIZE: usize = 3;

/// The cards one side commits to a war, topmost first.
pub type WarCards = SmallVec<[Card; WAR_SIZE]>;

/// Result of a reveal: one card normally, three during a war.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Revealed {
    Single(Card),
    War(WarCards),
}

impl Revealed {
    /// The topmost revealed card. A war reveal always holds `WAR_SIZE`.
    #[must_use]
    pub fn top(&self) -> Card {
        self.cards()[0]
    }

    /// Revealed cards, topmost first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match self {
            Revealed::Single(card) => std::slice::from_ref(card),
            Revealed::War(cards) => cards,
        }
    }
}

/// An ordered stack of cards owned by one participant.
///
/// Backed by `im::Vector` so cards go under the bottom in O(log n) and
/// snapshots are O(1) clones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    cards: Vector<Card>,
}

impl Hand {
    /// Create a hand from cards listed bottom-to-top.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card that would be revealed next.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// Cards bottom-to-top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Copy of the cards, bottom-to-top.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }

    /// Whether the hand can cover a normal reveal (1 card) or a war (3).
    #[must_use]
    pub fn enough_cards(&self, is_war: bool) -> bool {
        if is_war {
            self.len() >= WAR_SIZE
        } else {
            !self.is_empty()
        }
    }

    /// Remove and return the top card.
    pub fn reveal_top(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Remove and return the top three cards, topmost first.
    ///
    /// Takes nothing and returns `None` when fewer than three are held.
    pub fn reveal_war(&mut self) -> Option<WarCards> {
        if !self.enough_cards(true) {
            return None;
        }
        let mut cards = WarCards::new();
        for _ in 0..WAR_SIZE {
            cards.extend(self.cards.pop_back());
        }
        Some(cards)
    }

    /// Reveal one card, or three when `is_war` is set.
    pub fn reveal(&mut self, is_war: bool) -> Option<Revealed> {
        if is_war {
            self.reveal_war().map(Revealed::War)
        } else {
            self.reveal_top().map(Revealed::Single)
        }
    }

    /// Slide every pot card under the bottom, keeping pot order, and empty
    /// the pot. Returns how many cards were taken.
    pub fn take(&mut self, pot: &mut Pot) -> usize {
        let won = pot.drain();
        let count = won.len();
        for card in won.into_iter().rev() {
            self.cards.push_front(card);
        }
        count
    }
}
