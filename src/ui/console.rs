//! Plain-text rendering of game events.

use std::io::{self, Write};

use crate::cards::Card;
use crate::core::{Seat, SeatMap, DEFAULT_COMPUTER_NAME};
use crate::events::{GameEvent, GameObserver};
use crate::rules::GameResult;

const RULE: &str = "/////////////////////////////////////////////////////////////";
const STARS: &str = "************************************************************";
const COLUMN: usize = 30;

/// Writes a running commentary of the game to any `Write`.
///
/// Names are picked up from `GameEvent::GameStarted`.
pub struct ConsoleObserver<W: Write> {
    out: W,
    names: SeatMap<String>,
}

impl ConsoleObserver<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            names: SeatMap::new("Player".to_string(), DEFAULT_COMPUTER_NAME.to_string()),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn name(&self, seat: Seat) -> &str {
        &self.names[seat]
    }

    /// Two left-aligned columns, human first.
    fn columns(&mut self, left: String, right: String) -> io::Result<()> {
        writeln!(self.out, "{:<COLUMN$}{:<COLUMN$}", left, right)
    }

    fn counts(&mut self, counts: &SeatMap<usize>) -> io::Result<()> {
        let left = format!("{} has {} cards.", self.name(Seat::Human), counts[Seat::Human]);
        let right = format!("{} has {} cards.", self.name(Seat::Computer), counts[Seat::Computer]);
        self.columns(left, right)
    }

    fn render(&mut self, event: &GameEvent) -> io::Result<()> {
        match event {
            GameEvent::GameStarted { names, .. } => {
                self.names = names.clone();
                Ok(())
            }
            GameEvent::RoundStarted { round, counts } => {
                writeln!(self.out, "{RULE}")?;
                writeln!(self.out, "ROUND {round}")?;
                writeln!(self.out, "{RULE}")?;
                self.counts(counts)
            }
            GameEvent::CardsRevealed { cards, pot_size } => {
                let left = format!("{} -1.", self.name(Seat::Human));
                let right = format!("{} -1", self.name(Seat::Computer));
                self.columns(left, right)?;
                writeln!(self.out, "Cards on Board {pot_size}")?;
                writeln!(
                    self.out,
                    "{}: {}\tvs.\t{}: {}",
                    self.names[Seat::Human],
                    face(&cards[Seat::Human]),
                    self.names[Seat::Computer],
                    face(&cards[Seat::Computer]),
                )
            }
            GameEvent::WarDeclared { counts } => {
                writeln!(self.out, "WAR!")?;
                self.counts(counts)
            }
            GameEvent::WarCardsCommitted { committed, pot_size } => {
                let left = format!("{} -{}.", self.name(Seat::Human), committed[Seat::Human].len());
                let right = format!("{} -{}", self.name(Seat::Computer), committed[Seat::Computer].len());
                self.columns(left, right)?;
                writeln!(self.out, "Cards on Board {pot_size}")
            }
            GameEvent::BattleWon { winner, cards_gained } => {
                writeln!(self.out, "{} wins this battle: +{cards_gained}", self.names[*winner])
            }
            GameEvent::RoundAborted { shortfall, abandoned } => {
                let who = shortfall
                    .seats
                    .iter()
                    .map(|&s| self.name(s))
                    .collect::<Vec<_>>()
                    .join(" and ");
                writeln!(
                    self.out,
                    "{who} cannot put up {} card(s). {abandoned} card(s) left on the board.",
                    shortfall.needed,
                )
            }
            GameEvent::CycleDetected { round, first_seen } => writeln!(
                self.out,
                "The hands after round {round} match round {first_seen}. Play would repeat forever."
            ),
            GameEvent::GameOver { result, .. } => {
                writeln!(self.out, "GAME OVER")?;
                writeln!(self.out, "{STARS}")?;
                match result {
                    GameResult::Winner(seat) => {
                        writeln!(self.out, "{} is the WINNER", self.names[*seat])?
                    }
                    GameResult::Draw => writeln!(self.out, "It's a DRAW")?,
                }
                writeln!(self.out, "{STARS}")
            }
        }
    }
}

impl<W: Write> GameObserver for ConsoleObserver<W> {
    fn on_event(&mut self, event: &GameEvent) {
        if let Err(err) = self.render(event) {
            tracing::warn!(%err, kind = event.kind(), "console write failed");
        }
    }
}

fn face(card: &Card) -> String {
    format!("{}-{}", card.rank, card.suit)
}
