//! Core types: seats, RNG, configuration, errors.
//!
//! Nothing in here knows about cards or rounds; the game modules build on
//! these pieces.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{WarConfig, DEFAULT_COMPUTER_NAME};
pub use error::{Result, WarError};
pub use player::{Seat, SeatMap};
pub use rng::{GameRng, GameRngState};
