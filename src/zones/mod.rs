//! Where cards live during play.
//!
//! ## Key Types
//!
//! - `Hand`: a participant's ordered stack (top revealed, bottom receives)
//! - `Participant`: a name and the hand it owns
//! - `Pot`: cards on the board for the current round

pub mod hand;
pub mod participant;
pub mod pot;

pub use hand::{Hand, Revealed, WarCards, WAR_SIZE};
pub use participant::Participant;
pub use pot::Pot;
