//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! A match always has exactly two sides: the human-controlled player and
//! the scripted opponent. The human always takes the first turn.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, mirroring how the engine keeps
//! one `PlayerState` per side.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The player driven by the presentation layer.
    Human,
    /// The scripted opponent.
    Opponent,
}

impl Side {
    /// Both sides, human first.
    pub const ALL: [Side; 2] = [Side::Human, Side::Opponent];

    /// The other side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }

    /// Slot index (human = 0, opponent = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Opponent => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Human => write!(f, "You"),
            Side::Opponent => write!(f, "Computer"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use tcg_lite::core::{Side, SideMap};
///
/// let mut prizes: SideMap<usize> = SideMap::new(|_| 6);
/// prizes[Side::Opponent] -= 1;
///
/// assert_eq!(prizes[Side::Human], 6);
/// assert_eq!(prizes[Side::Opponent], 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Human), factory(Side::Opponent)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Borrow both sides mutably at once, in `(side, side.other())` order.
    pub fn split_mut(&mut self, side: Side) -> (&mut T, &mut T) {
        let [human, opponent] = &mut self.data;
        match side {
            Side::Human => (human, opponent),
            Side::Opponent => (opponent, human),
        }
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
