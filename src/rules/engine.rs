//! Battle engine: one round of War.
//!
//! A round is a small state machine:
//!
//! ```text
//! Reveal ──▶ Compare ──▶ RoundWon
//!   ▲           │
//!   │           ▼ (tie)
//!   └──────── War ──▶ RoundAborted (a side is short)
//! ```
//!
//! The pot is threaded through every war of the round and is either taken
//! whole by the winner or abandoned.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::cmp::Ordering;

use crate::cards::Card;
use crate::core::{Seat, SeatMap};
use crate::events::{GameEvent, GameObserver};
use crate::zones::{Hand, Participant, Pot, Revealed, WarCards, WAR_SIZE};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Seat),
    /// Both sides hold the same number of cards.
    Draw,
}

impl GameResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        matches!(self, GameResult::Winner(s) if *s == seat)
    }
}

/// Which sides could not cover a reveal, and how many cards it needed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    pub seats: SmallVec<[Seat; 2]>,
    pub needed: usize,
}

impl Shortfall {
    #[must_use]
    pub fn includes(&self, seat: Seat) -> bool {
        self.seats.contains(&seat)
    }

    /// True when the shortfall happened while continuing a war.
    #[must_use]
    pub fn during_war(&self) -> bool {
        self.needed == WAR_SIZE
    }
}

/// Outcome of comparing one pair of revealed cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// A side won and took the pot.
    Settled { winner: Seat, cards_gained: usize },
    /// Tie: both sides committed war cards; reveal again with this pot.
    Continuing(Pot),
    /// Tie, but a side could not commit war cards.
    Aborted { shortfall: Shortfall, abandoned: Pot },
}

/// Outcome of a whole round, including any chained wars.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    Won {
        winner: Seat,
        cards_gained: usize,
        wars: u32,
    },
    Aborted {
        shortfall: Shortfall,
        abandoned: Pot,
        wars: u32,
    },
}

impl RoundOutcome {
    /// Whether the game loop should play another round.
    #[must_use]
    pub fn should_continue(&self) -> bool {
        matches!(self, RoundOutcome::Won { .. })
    }

    /// Wars fought during the round.
    #[must_use]
    pub fn wars(&self) -> u32 {
        match self {
            RoundOutcome::Won { wars, .. } | RoundOutcome::Aborted { wars, .. } => *wars,
        }
    }
}

/// Owns both participants and plays rounds between them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleEngine {
    participants: SeatMap<Participant>,
}

impl BattleEngine {
    #[must_use]
    pub fn new(human: Participant, computer: Participant) -> Self {
        Self {
            participants: SeatMap::new(human, computer),
        }
    }

    #[must_use]
    pub fn participant(&self, seat: Seat) -> &Participant {
        &self.participants[seat]
    }

    #[must_use]
    pub fn name(&self, seat: Seat) -> &str {
        &self.participants[seat].name
    }

    #[must_use]
    pub fn card_counts(&self) -> SeatMap<usize> {
        self.participants.map(Participant::card_count)
    }

    /// Whether a seat can cover a reveal (1 card) or a war (3 cards).
    #[must_use]
    pub fn enough_cards(&self, seat: Seat, is_war: bool) -> bool {
        self.participants[seat].enough_cards(is_war)
    }

    fn cards_needed(is_war: bool) -> usize {
        if is_war {
            WAR_SIZE
        } else {
            1
        }
    }

    fn ensure_enough(&self, is_war: bool) -> Result<(), Shortfall> {
        let seats: SmallVec<[Seat; 2]> = Seat::ALL
            .into_iter()
            .filter(|&seat| !self.enough_cards(seat, is_war))
            .collect();

        if seats.is_empty() {
            Ok(())
        } else {
            Err(Shortfall {
                seats,
                needed: Self::cards_needed(is_war),
            })
        }
    }

    /// Both sides reveal together. Both hands are checked first, so a
    /// shortfall removes nothing.
    fn reveal_both(&mut self, is_war: bool) -> Result<SeatMap<Revealed>, Shortfall> {
        self.ensure_enough(is_war)?;

        let human = self.participants[Seat::Human].reveal(is_war);
        let computer = self.participants[Seat::Computer].reveal(is_war);
        human
            .zip(computer)
            .map(|(h, c)| SeatMap::new(h, c))
            .ok_or(Shortfall {
                seats: SmallVec::from_slice(&Seat::ALL),
                needed: Self::cards_needed(is_war),
            })
    }

    /// Both sides reveal their top card.
    pub fn reveal_cards(&mut self) -> Result<SeatMap<Card>, Shortfall> {
        Ok(self.reveal_both(false)?.map(Revealed::top))
    }

    /// Both sides reveal three war cards, topmost first.
    pub fn reveal_war_cards(&mut self) -> Result<SeatMap<WarCards>, Shortfall> {
        let revealed = self.reveal_both(true)?;
        Ok(revealed.map(|r| r.cards().iter().copied().collect()))
    }

    /// Both hands, for cycle detection and snapshots.
    #[must_use]
    pub fn hands(&self) -> SeatMap<Hand> {
        self.participants.map(|p| p.hand().clone())
    }

    /// Compare a revealed pair. `pot` already holds the pair.
    ///
    /// The higher rank takes the pot. On a tie both sides commit war cards,
    /// human's three then the computer's three, and the grown pot is handed
    /// back for the next reveal.
    pub fn resolve(
        &mut self,
        cards: &SeatMap<Card>,
        mut pot: Pot,
        observer: &mut dyn GameObserver,
    ) -> Resolution {
        let human = cards[Seat::Human].rank_index();
        let computer = cards[Seat::Computer].rank_index();

        let winner = match human.cmp(&computer) {
            Ordering::Greater => Some(Seat::Human),
            Ordering::Less => Some(Seat::Computer),
            Ordering::Equal => None,
        };

        if let Some(winner) = winner {
            let cards_gained = self.participants[winner].take(&mut pot);
            tracing::debug!(winner = %self.name(winner), cards_gained, "battle won");
            observer.on_event(&GameEvent::BattleWon {
                winner,
                cards_gained,
            });
            return Resolution::Settled {
                winner,
                cards_gained,
            };
        }

        tracing::debug!(rank = %cards[Seat::Human].rank, pot = pot.len(), "war declared");
        observer.on_event(&GameEvent::WarDeclared {
            counts: self.card_counts(),
        });

        match self.reveal_war_cards() {
            Ok(committed) => {
                pot.extend(committed[Seat::Human].iter().copied());
                pot.extend(committed[Seat::Computer].iter().copied());
                observer.on_event(&GameEvent::WarCardsCommitted {
                    committed,
                    pot_size: pot.len(),
                });
                Resolution::Continuing(pot)
            }
            Err(shortfall) => {
                tracing::debug!(?shortfall, abandoned = pot.len(), "war cannot continue");
                observer.on_event(&GameEvent::RoundAborted {
                    shortfall: shortfall.clone(),
                    abandoned: pot.len(),
                });
                Resolution::Aborted {
                    shortfall,
                    abandoned: pot,
                }
            }
        }
    }

    /// Play one round starting from `pot`, chaining wars until a
    /// comparison is won or a side runs short.
    pub fn battle(&mut self, mut pot: Pot, observer: &mut dyn GameObserver) -> RoundOutcome {
        let mut wars = 0;

        loop {
            let cards = match self.reveal_cards() {
                Ok(cards) => cards,
                Err(shortfall) => {
                    tracing::debug!(?shortfall, abandoned = pot.len(), "reveal impossible");
                    observer.on_event(&GameEvent::RoundAborted {
                        shortfall: shortfall.clone(),
                        abandoned: pot.len(),
                    });
                    return RoundOutcome::Aborted {
                        shortfall,
                        abandoned: pot,
                        wars,
                    };
                }
            };

            pot.push(cards[Seat::Human]);
            pot.push(cards[Seat::Computer]);
            tracing::trace!(human = %cards[Seat::Human], computer = %cards[Seat::Computer], "revealed");
            observer.on_event(&GameEvent::CardsRevealed {
                cards,
                pot_size: pot.len(),
            });

            match self.resolve(&cards, pot, observer) {
                Resolution::Settled {
                    winner,
                    cards_gained,
                } => {
                    return RoundOutcome::Won {
                        winner,
                        cards_gained,
                        wars,
                    }
                }
                Resolution::Continuing(next) => {
                    wars += 1;
                    pot = next;
                }
                Resolution::Aborted {
                    shortfall,
                    abandoned,
                } => {
                    return RoundOutcome::Aborted {
                        shortfall,
                        abandoned,
                        wars: wars + 1,
                    }
                }
            }
        }
    }

    /// Strictly more cards wins; equal counts are a draw.
    #[must_use]
    pub fn winner(&self) -> GameResult {
        let counts = self.card_counts();
        match counts[Seat::Human].cmp(&counts[Seat::Computer]) {
            Ordering::Greater => GameResult::Winner(Seat::Human),
            Ordering::Less => GameResult::Winner(Seat::Computer),
            Ordering::Equal => GameResult::Draw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventLog, NullObserver};

    fn cards(labels: &[&str]) -> Vec<Card> {
        labels.iter().map(|l| l.parse().unwrap()).collect()
    }

    fn engine(human: &[&str], computer: &[&str]) -> BattleEngine {
        BattleEngine::new(
            Participant::new("unittest", cards(human)),
            Participant::new("HAL", cards(computer)),
        )
    }

    fn pair(human: &str, computer: &str) -> SeatMap<Card> {
        SeatMap::new(human.parse().unwrap(), computer.parse().unwrap())
    }

    fn pot_of(pair: &SeatMap<Card>) -> Pot {
        Pot::from(vec![pair[Seat::Human], pair[Seat::Computer]])
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Seat::Computer);
        assert!(!result.is_winner(Seat::Human));
        assert!(result.is_winner(Seat::Computer));
        assert!(!GameResult::Draw.is_winner(Seat::Human));
    }

    #[test]
    fn test_winner() {
        let e = engine(&["2S", "3S", "4S", "5S"], &["2C"]);
        assert_eq!(e.winner(), GameResult::Winner(Seat::Human));

        let e = engine(&[], &["2S", "3S", "4S", "5S"]);
        assert_eq!(e.winner(), GameResult::Winner(Seat::Computer));

        let e = engine(&["2S"], &["2C"]);
        assert_eq!(e.winner(), GameResult::Draw);
    }

    #[test]
    fn test_reveal_cards() {
        let mut e = engine(&["2S", "3S", "4S"], &["2C", "3C", "4C"]);

        assert_eq!(e.reveal_cards(), Ok(pair("4S", "4C")));

        // Two left each: not enough for war, and nothing is taken
        let shortfall = e.reveal_war_cards().unwrap_err();
        assert!(shortfall.includes(Seat::Human));
        assert!(shortfall.includes(Seat::Computer));
        assert!(shortfall.during_war());
        assert_eq!(e.card_counts(), SeatMap::new(2, 2));

        let mut e = engine(&["2S", "3S", "4S", "AS"], &["2C", "3C", "4C", "AC"]);
        let war = e.reveal_war_cards().unwrap();
        assert_eq!(war[Seat::Human].to_vec(), cards(&["AS", "4S", "3S"]));
        assert_eq!(war[Seat::Computer].to_vec(), cards(&["AC", "4C", "3C"]));
    }

    #[test]
    fn test_one_side_short_takes_nothing_from_the_other() {
        let mut e = engine(&["2S", "3S", "4S"], &["2C"]);

        let shortfall = e.reveal_war_cards().unwrap_err();
        assert_eq!(shortfall.seats.as_slice(), &[Seat::Computer]);
        assert_eq!(e.card_counts(), SeatMap::new(3, 1));
    }

    #[test]
    fn test_resolve_sequence() {
        let mut e = engine(&["2S", "2C"], &["2D", "2H"]);
        let mut obs = NullObserver;

        // Computer wins
        let p = pair("3S", "4C");
        let r = e.resolve(&p, pot_of(&p), &mut obs);
        assert_eq!(
            r,
            Resolution::Settled {
                winner: Seat::Computer,
                cards_gained: 2
            }
        );
        assert_eq!(e.card_counts(), SeatMap::new(2, 4));

        // Human wins
        let p = pair("6S", "5C");
        let r = e.resolve(&p, pot_of(&p), &mut obs);
        assert!(matches!(r, Resolution::Settled { winner: Seat::Human, .. }));
        assert_eq!(e.card_counts(), SeatMap::new(4, 4));

        // War
        let p = pair("10S", "10C");
        let r = e.resolve(&p, pot_of(&p), &mut obs);
        let expected = cards(&["10S", "10C", "2C", "2S", "5C", "2H", "2D", "4C"]);
        assert_eq!(r, Resolution::Continuing(Pot::from(expected)));
        assert_eq!(e.card_counts(), SeatMap::new(1, 1));

        // War, not enough cards
        let p = pair("10S", "10C");
        let r = e.resolve(&p, pot_of(&p), &mut obs);
        match r {
            Resolution::Aborted {
                shortfall,
                abandoned,
            } => {
                assert_eq!(shortfall.needed, 3);
                assert_eq!(abandoned.len(), 2);
            }
            other => panic!("expected abort, got {other:?}"),
        }
        assert_eq!(e.card_counts(), SeatMap::new(1, 1));
    }

    #[test]
    fn test_battle_not_enough_cards_for_war() {
        let mut e = engine(&["2S", "2C"], &["2D", "2H"]);
        let outcome = e.battle(Pot::new(), &mut NullObserver);

        assert!(!outcome.should_continue());
        match outcome {
            RoundOutcome::Aborted {
                shortfall,
                abandoned,
                wars,
            } => {
                assert!(shortfall.during_war());
                assert_eq!(abandoned.len(), 2);
                assert_eq!(wars, 1);
            }
            other => panic!("expected abort, got {other:?}"),
        }
        assert_eq!(e.card_counts(), SeatMap::new(1, 1));
    }

    #[test]
    fn test_battle_not_enough_cards_for_reveal() {
        let mut e = engine(&[], &[]);
        let outcome = e.battle(Pot::new(), &mut NullObserver);

        match outcome {
            RoundOutcome::Aborted {
                shortfall,
                abandoned,
                wars,
            } => {
                assert_eq!(shortfall.needed, 1);
                assert!(shortfall.includes(Seat::Human) && shortfall.includes(Seat::Computer));
                assert!(abandoned.is_empty());
                assert_eq!(wars, 0);
            }
            other => panic!("expected abort, got {other:?}"),
        }
    }

    #[test]
    fn test_battle_single_war() {
        let mut e = engine(
            &["10S", "2S", "2C", "3S", "3C"],
            &["9S", "2D", "2H", "3D", "3H"],
        );
        let outcome = e.battle(Pot::new(), &mut NullObserver);

        assert_eq!(
            outcome,
            RoundOutcome::Won {
                winner: Seat::Human,
                cards_gained: 10,
                wars: 1
            }
        );
        assert_eq!(
            e.participant(Seat::Human).hand().to_vec(),
            cards(&["3C", "3H", "3S", "2C", "2S", "3D", "2H", "2D", "10S", "9S"])
        );
        assert_eq!(e.card_counts(), SeatMap::new(10, 0));
    }

    #[test]
    fn test_battle_double_war() {
        let mut e = engine(
            &["JS", "4S", "4C", "5S", "10S", "2S", "2C", "3S", "3C"],
            &["7S", "4D", "4H", "5D", "10C", "2D", "2H", "3D", "3H"],
        );
        let mut log = EventLog::new();
        let outcome = e.battle(Pot::new(), &mut log);

        assert_eq!(
            outcome,
            RoundOutcome::Won {
                winner: Seat::Human,
                cards_gained: 18,
                wars: 2
            }
        );
        assert_eq!(log.count("war_declared"), 2);
        assert_eq!(log.count("cards_revealed"), 3);
        assert_eq!(e.card_counts(), SeatMap::new(18, 0));
    }

    #[test]
    fn test_battle_double_war_computer_runs_out() {
        let mut e = engine(
            &["7S", "4S", "4C", "5S", "10S", "2S", "2C", "3S", "3C"],
            &["4D", "4H", "5D", "10C", "2D", "2H", "3D", "3H"],
        );
        let outcome = e.battle(Pot::new(), &mut NullObserver);

        match outcome {
            RoundOutcome::Aborted {
                shortfall,
                abandoned,
                wars,
            } => {
                assert_eq!(shortfall.seats.as_slice(), &[Seat::Computer]);
                assert_eq!(shortfall.needed, 1);
                assert_eq!(abandoned.len(), 16);
                assert_eq!(wars, 2);
            }
            other => panic!("expected abort, got {other:?}"),
        }
        assert_eq!(e.card_counts(), SeatMap::new(1, 0));
    }

    #[test]
    fn test_battle_events_for_plain_win() {
        let mut e = engine(&["2S", "3S"], &["2D", "4C"]);
        let mut log = EventLog::new();
        e.battle(Pot::new(), &mut log);

        assert_eq!(
            log.events(),
            &[
                GameEvent::CardsRevealed {
                    cards: pair("3S", "4C"),
                    pot_size: 2
                },
                GameEvent::BattleWon {
                    winner: Seat::Computer,
                    cards_gained: 2
                },
            ]
        );
    }
}
