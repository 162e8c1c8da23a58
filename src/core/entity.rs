//! Card identity.
//!
//! Every card in a match has a unique `CardUid`, allocated once when the
//! decks are built. Cards only move between zones afterwards, so the id
//! follows the card for the whole match.
//!
//! ## Usage
//!
//! ```
//! use tcg_lite::core::EntityAllocator;
//!
//! let mut ids = EntityAllocator::new();
//! let a = ids.alloc();
//! let b = ids.alloc();
//!
//! assert_ne!(a, b);
//! assert_eq!(ids.allocated(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a single physical card in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardUid(pub u32);

impl CardUid {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardUid {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}

/// Monotonic allocator for `CardUid`s.
///
/// One allocator is shared by both decks so ids never collide across sides.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EntityAllocator {
    next: u32,
}

impl EntityAllocator {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn alloc(&mut self) -> CardUid {
        let id = CardUid(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}
