//! # war-game
//!
//! The card game War: a human against the computer ("HAL").
//!
//! ## Rules
//!
//! 1. A shuffled 52-card deck is split 26/26.
//! 2. Each round both sides reveal their top card. The higher rank takes
//!    both cards and slides them under the bottom of its hand. Suits never
//!    matter.
//! 3. A tie declares **war**: each side adds three more cards to the pot and
//!    reveals again. Wars chain until a reveal is won.
//! 4. A side that cannot cover a reveal (1 card) or a war (3 cards) ends the
//!    game. A pot interrupted this way is abandoned.
//! 5. Whoever holds more cards wins.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, configuration, errors
//! - `cards`: cards and the deck
//! - `zones`: hands, participants, the pot
//! - `rules`: the battle engine and the game loop
//! - `events`: structured events and observers
//! - `ui`: plain-text rendering for the `war` binary
//!
//! ## Example
//!
//! ```
//! use war_game::events::EventLog;
//! use war_game::rules::WarGameBuilder;
//!
//! let mut game = WarGameBuilder::new()
//!     .player_name("ada")
//!     .seed(42)
//!     .max_rounds(2_000)
//!     .build()
//!     .unwrap();
//!
//! let mut log = EventLog::new();
//! let summary = game.run(&mut log);
//!
//! assert_eq!(game.card_total(), 52);
//! assert!(summary.rounds >= 1);
//! ```

pub mod cards;
pub mod core;
pub mod events;
pub mod rules;
pub mod ui;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, Seat, SeatMap, WarConfig, WarError};

pub use crate::cards::{Card, Deck, Rank, Suit, DECK_SIZE};

pub use crate::zones::{Hand, Participant, Pot, Revealed, WarCards, WAR_SIZE};

pub use crate::rules::{
    BattleEngine, GameResult, GameSnapshot, GameSummary, Resolution, RoundOutcome, Shortfall,
    WarGame, WarGameBuilder,
};

pub use crate::events::{EventLog, GameEvent, GameObserver, NullObserver};
