//! The game loop: deal, play rounds until one aborts, report the result.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::engine::{BattleEngine, GameResult, RoundOutcome};
use crate::cards::{Card, Deck};
use crate::core::{GameRng, GameRngState, Result, Seat, SeatMap, WarConfig};
use crate::events::{GameEvent, GameObserver};
use crate::zones::{Hand, Participant, Pot};

/// Builder for creating a `WarGame`.
#[derive(Clone, Debug, Default)]
pub struct WarGameBuilder {
    config: WarConfig,
    deck: Option<Deck>,
}

impl WarGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing config.
    pub fn from_config(config: WarConfig) -> Self {
        Self { config, deck: None }
    }

    pub fn player_name(mut self, name: impl Into<String>) -> Self {
        self.config.player_name = name.into();
        self
    }

    pub fn computer_name(mut self, name: impl Into<String>) -> Self {
        self.config.computer_name = name.into();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn max_rounds(mut self, rounds: u32) -> Self {
        self.config.max_rounds = Some(rounds);
        self
    }

    /// Use this deck instead of a standard one. It is still shuffled.
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Validate the config, shuffle, and deal.
    pub fn build(self) -> Result<WarGame> {
        self.config.validate()?;

        let mut rng = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let mut deck = self.deck.unwrap_or_else(Deck::standard);
        deck.shuffle(&mut rng);
        let (human, computer) = deck.deal();

        tracing::info!(seed = rng.seed(), player = %self.config.player_name, "dealt new game");

        Ok(WarGame::with_rng(self.config, human, computer, rng))
    }
}

/// Final report of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub result: GameResult,
    /// Name of the winner, `None` on a draw.
    pub winner_name: Option<String>,
    /// Rounds started, including the final aborted one. A round that wins
    /// the last card of a hand is followed by one more round whose reveal
    /// aborts, so this is one higher than the number of contested rounds.
    pub rounds: u32,
    pub wars: u32,
    /// Most wars chained inside a single round.
    pub longest_war_chain: u32,
    pub final_counts: SeatMap<usize>,
    /// Cards left on the board by aborted rounds.
    pub abandoned: usize,
    /// True when the game was stopped by `max_rounds`.
    pub hit_round_cap: bool,
    /// True when both hands returned to an earlier state and play was
    /// stopped, since it would otherwise repeat forever.
    pub cycled: bool,
}

/// Serializable view of a game in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub round: u32,
    pub names: SeatMap<String>,
    /// Hands bottom-to-top.
    pub hands: SeatMap<Vec<Card>>,
    pub abandoned: Vec<Card>,
    pub rng: GameRngState,
}

/// A game of War between a human and the computer.
#[derive(Clone, Debug)]
pub struct WarGame {
    config: WarConfig,
    engine: BattleEngine,
    rng: GameRng,
    round: u32,
    wars: u32,
    longest_war_chain: u32,
    abandoned: Vec<Card>,
    finished: bool,
}

impl WarGame {
    /// Create a game from explicit hands, listed bottom-to-top.
    ///
    /// No shuffling or validation of the cards happens; use
    /// `WarGameBuilder` for a normal dealt game.
    pub fn from_hands(
        player_name: impl Into<String>,
        human: impl IntoIterator<Item = Card>,
        computer: impl IntoIterator<Item = Card>,
    ) -> Self {
        let config = WarConfig::new(player_name);
        let rng = GameRng::new(config.seed.unwrap_or_default());
        Self::with_rng(config, human, computer, rng)
    }

    fn with_rng(
        config: WarConfig,
        human: impl IntoIterator<Item = Card>,
        computer: impl IntoIterator<Item = Card>,
        rng: GameRng,
    ) -> Self {
        let engine = BattleEngine::new(
            Participant::new(config.player_name.clone(), human),
            Participant::new(config.computer_name.clone(), computer),
        );
        Self {
            config,
            engine,
            rng,
            round: 0,
            wars: 0,
            longest_war_chain: 0,
            abandoned: Vec::new(),
            finished: false,
        }
    }

    #[must_use]
    pub fn config(&self) -> &WarConfig {
        &self.config
    }

    #[must_use]
    pub fn engine(&self) -> &BattleEngine {
        &self.engine
    }

    /// Rounds played so far.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn names(&self) -> SeatMap<String> {
        SeatMap::from_fn(|seat| self.engine.name(seat).to_string())
    }

    /// Cards left on the board by aborted rounds.
    #[must_use]
    pub fn abandoned(&self) -> &[Card] {
        &self.abandoned
    }

    /// Every card still in the game: both hands plus the abandoned pile.
    #[must_use]
    pub fn card_total(&self) -> usize {
        let counts = self.engine.card_counts();
        counts[Seat::Human] + counts[Seat::Computer] + self.abandoned.len()
    }

    #[must_use]
    pub fn winner(&self) -> GameResult {
        self.engine.winner()
    }

    /// Name of the winner, `None` on a draw.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        match self.winner() {
            GameResult::Winner(seat) => Some(self.engine.name(seat)),
            GameResult::Draw => None,
        }
    }

    /// Play a single round on a fresh pot.
    ///
    /// An aborted round finishes the game. Calling this after the game is
    /// finished is harmless: the round aborts again without moving cards.
    pub fn play_round(&mut self, observer: &mut dyn GameObserver) -> RoundOutcome {
        self.round += 1;
        let _span = tracing::debug_span!("round", round = self.round).entered();

        observer.on_event(&GameEvent::RoundStarted {
            round: self.round,
            counts: self.engine.card_counts(),
        });

        let outcome = self.engine.battle(Pot::new(), observer);

        let wars = outcome.wars();
        self.wars += wars;
        self.longest_war_chain = self.longest_war_chain.max(wars);

        if let RoundOutcome::Aborted { abandoned, .. } = &outcome {
            self.abandoned.extend_from_slice(abandoned.cards());
            self.finished = true;
        }

        outcome
    }

    /// Play rounds until one signals stop and report the result.
    ///
    /// Play also stops at the round cap, or as soon as both hands repeat a
    /// state seen before a previous round. War is deterministic once dealt,
    /// so a repeated state means the game would cycle forever. Either way
    /// the result is decided by card count.
    pub fn run(&mut self, observer: &mut dyn GameObserver) -> GameSummary {
        observer.on_event(&GameEvent::GameStarted {
            names: self.names(),
            seed: self.seed(),
        });

        let mut seen: FxHashMap<SeatMap<Hand>, u32> = FxHashMap::default();
        let mut hit_round_cap = false;
        let mut cycled = false;
        while !self.finished {
            if self.config.max_rounds.is_some_and(|cap| self.round >= cap) {
                tracing::warn!(rounds = self.round, "round cap reached");
                hit_round_cap = true;
                break;
            }
            if let Some(&first_seen) = seen.get(&self.engine.hands()) {
                tracing::warn!(rounds = self.round, first_seen, "hands repeat, stopping");
                observer.on_event(&GameEvent::CycleDetected {
                    round: self.round,
                    first_seen,
                });
                cycled = true;
                break;
            }
            seen.insert(self.engine.hands(), self.round);
            self.play_round(observer);
        }

        let summary = self.summary(hit_round_cap, cycled);
        tracing::info!(
            rounds = summary.rounds,
            wars = summary.wars,
            winner = summary.winner_name.as_deref().unwrap_or("draw"),
            "game over"
        );
        observer.on_event(&GameEvent::GameOver {
            result: summary.result,
            rounds: summary.rounds,
        });
        summary
    }

    fn summary(&self, hit_round_cap: bool, cycled: bool) -> GameSummary {
        GameSummary {
            result: self.winner(),
            winner_name: self.winner_name().map(str::to_string),
            rounds: self.round,
            wars: self.wars,
            longest_war_chain: self.longest_war_chain,
            final_counts: self.engine.card_counts(),
            abandoned: self.abandoned.len(),
            hit_round_cap,
            cycled,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            round: self.round,
            names: self.names(),
            hands: SeatMap::from_fn(|seat| self.engine.participant(seat).hand().to_vec()),
            abandoned: self.abandoned.clone(),
            rng: self.rng.state(),
        }
    }
}
