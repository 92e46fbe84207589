// crates/vidcat-core/src/position.rs - User-facing 1-based positions
//
// Records have no identity of their own; they are addressed by where they
// sit in the catalog. Users count from 1, storage counts from 0, and this
// type is the only place the two meet.
//
// A position is NOT a durable identifier: deleting record p shifts every
// later record down by one. Never hold on to a position across a mutation.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when user input cannot be read as a position at all
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Not a valid position: '{0}'")]
pub struct ParsePositionError(pub String);

/// A 1-based position into the catalog
///
/// Zero is unrepresentable. Whether a position is in range depends on the
/// catalog it is applied to, so that check lives in `Catalog`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(NonZeroUsize);

impl Position {
    /// Build a position from a 1-based number, `None` for zero
    pub fn new(one_based: usize) -> Option<Self> {
        NonZeroUsize::new(one_based).map(Self)
    }

    /// Build the position of a 0-based storage index
    pub fn from_index(index: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(index))
    }

    /// The 1-based number shown to the user
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// The 0-based storage index
    pub fn index(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parse user input such as `" 2 "`. Zero, negative numbers and anything
    /// non-numeric are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ParsePositionError(s.trim().to_string()))
    }
}
