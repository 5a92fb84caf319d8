//! Cards and the deck.
//!
//! ## Key Types
//!
//! - `Rank`, `Suit`: card faces; only the rank matters in play
//! - `Card`: an immutable (rank, suit) pair
//! - `Deck`: the 52 unique cards, shuffled and dealt once per game

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::{rank_index, Deck, DECK_SIZE};
