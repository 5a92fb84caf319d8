//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! War is always two-handed: the human player and the computer.
//!
//! ## SeatMap
//!
//! Per-seat data storage with O(1) access, indexable by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One side of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The human player.
    Human,
    /// The computer opponent.
    Computer,
}

impl Seat {
    /// Both seats, human first.
    pub const ALL: [Seat; 2] = [Seat::Human, Seat::Computer];

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Seat::Human => Seat::Computer,
            Seat::Computer => Seat::Human,
        }
    }

    /// Raw seat index (human = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::Human => 0,
            Seat::Computer => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Human => write!(f, "Human"),
            Seat::Computer => write!(f, "Computer"),
        }
    }
}

/// Per-seat data storage.
///
/// ## Example
///
/// ```
/// use war_game::core::{Seat, SeatMap};
///
/// let mut counts = SeatMap::with_value(26usize);
/// counts[Seat::Computer] += 1;
///
/// assert_eq!(counts[Seat::Human], 26);
/// assert_eq!(counts[Seat::Computer], 27);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create from explicit human and computer values.
    pub fn new(human: T, computer: T) -> Self {
        Self {
            data: [human, computer],
        }
    }

    /// Create with values from a factory function.
    pub fn from_fn(factory: impl Fn(Seat) -> T) -> Self {
        Self::new(factory(Seat::Human), factory(Seat::Computer))
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value)
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// Map every entry into a new `SeatMap`.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> SeatMap<U> {
        SeatMap::new(f(&self.data[0]), f(&self.data[1]))
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
