//! Rules of War.
//!
//! - `BattleEngine` plays a single round: reveal, compare, chained wars,
//!   award or abandon the pot
//! - `WarGame` repeats rounds until one signals stop and reports the result
//!
//! Neither prints anything. Presentation hooks in through
//! `events::GameObserver`.

pub mod engine;
pub mod game;

pub use engine::{BattleEngine, GameResult, Resolution, RoundOutcome, Shortfall};
pub use game::{GameSnapshot, GameSummary, WarGame, WarGameBuilder};
