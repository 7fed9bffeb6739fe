//! Live cells and the players that own them.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifier of a competing player.
///
/// Ids are handed out in join order, so a larger id means a later joiner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.0)
    }
}

impl From<u32> for PlayerId {
    fn from(id: u32) -> Self {
        PlayerId(id)
    }
}

/// A live cell on the board.
///
/// Two cells are equal when they sit on the same coordinate; the owner
/// does not take part in equality or hashing, so a set of cells holds at
/// most one cell per coordinate.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    x: usize,
    y: usize,
    owner: Option<PlayerId>,
}

impl Cell {
    pub fn new(x: usize, y: usize, owner: Option<PlayerId>) -> Self {
        Cell { x, y, owner }
    }

    /// An unowned cell, mostly useful as a lookup key.
    pub fn at(x: usize, y: usize) -> Self {
        Cell::new(x, y, None)
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn coords(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// `None` when the cell belongs to nobody.
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}
