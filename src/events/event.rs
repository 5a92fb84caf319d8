//! Structured events emitted while a game is played.
//!
//! The engine never prints. Everything a front-end might show is carried
//! here as data, and observers decide how (or whether) to render it.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{Seat, SeatMap};
use crate::rules::{GameResult, Shortfall};
use crate::zones::WarCards;

/// Something that happened during play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The deck was dealt and play is about to begin.
    GameStarted {
        names: SeatMap<String>,
        seed: u64,
    },

    /// A new round begins.
    RoundStarted {
        round: u32,
        counts: SeatMap<usize>,
    },

    /// Both sides turned over their top card.
    CardsRevealed {
        cards: SeatMap<Card>,
        pot_size: usize,
    },

    /// The revealed cards tied.
    WarDeclared { counts: SeatMap<usize> },

    /// Both sides put three cards into the pot.
    WarCardsCommitted {
        committed: SeatMap<WarCards>,
        pot_size: usize,
    },

    /// A comparison was won and the pot awarded.
    BattleWon { winner: Seat, cards_gained: usize },

    /// A side could not cover a reveal or a war; the pot is abandoned.
    RoundAborted {
        shortfall: Shortfall,
        abandoned: usize,
    },

    /// Both hands are back to the state they had after `first_seen`
    /// rounds, so play stops.
    CycleDetected { round: u32, first_seen: u32 },

    /// The game is over.
    GameOver { result: GameResult, rounds: u32 },
}

impl GameEvent {
    /// Short machine-friendly name, used as a log field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::GameStarted { .. } => "game_started",
            GameEvent::RoundStarted { .. } => "round_started",
            GameEvent::CardsRevealed { .. } => "cards_revealed",
            GameEvent::WarDeclared { .. } => "war_declared",
            GameEvent::WarCardsCommitted { .. } => "war_cards_committed",
            GameEvent::BattleWon { .. } => "battle_won",
            GameEvent::RoundAborted { .. } => "round_aborted",
            GameEvent::CycleDetected { .. } => "cycle_detected",
            GameEvent::GameOver { .. } => "game_over",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serde() {
        let event = GameEvent::CardsRevealed {
            cards: SeatMap::new("3S".parse().unwrap(), "4C".parse().unwrap()),
            pot_size: 2,
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event, back);
        assert_eq!(back.kind(), "cards_revealed");
    }
}
