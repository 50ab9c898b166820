//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! The game always has exactly two players, seated as `A` and `B`.
//!
//! ## SeatMap
//!
//! One value per seat with indexing by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two player seats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    /// First player.
    A,
    /// Second player.
    B,
}

impl Seat {
    /// Both seats, in play order.
    pub const ALL: [Seat; 2] = [Seat::A, Seat::B];
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::A => write!(f, "Player A"),
            Seat::B => write!(f, "Player B"),
        }
    }
}

/// Per-seat data storage.
///
/// ## Example
///
/// ```
/// use circle_of_life::core::{Seat, SeatMap};
///
/// let mut score: SeatMap<u32> = SeatMap::default();
/// score[Seat::B] += 1;
///
/// assert_eq!(score[Seat::A], 0);
/// assert_eq!(score[Seat::B], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    a: T,
    b: T,
}

impl<T> SeatMap<T> {
    /// Create a map from explicit per-seat values.
    pub fn new(a: T, b: T) -> Self {
        Self { a, b }
    }

    /// Create a map with values from a factory function.
    pub fn from_fn(mut factory: impl FnMut(Seat) -> T) -> Self {
        let a = factory(Seat::A);
        let b = factory(Seat::B);
        Self { a, b }
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        match seat {
            Seat::A => &self.a,
            Seat::B => &self.b,
        }
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        match seat {
            Seat::A => &mut self.a,
            Seat::B => &mut self.b,
        }
    }
}
