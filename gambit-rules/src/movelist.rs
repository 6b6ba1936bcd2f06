//! MoveList and move history types used in Gambit Rules.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt::{self, Display};

use arrayvec::ArrayVec;

use crate::coretypes::{Move, MoveCount, Square, MAX_PIECE_MOVES};

/// MoveList holds every (piece, destination) pair available to a player.
pub type MoveList = Vec<Move>;
/// Destinations of a single piece. No piece can reach more than `MAX_PIECE_MOVES` squares.
pub type Destinations = ArrayVec<Square, MAX_PIECE_MOVES>;
/// Notation of the moves played in one turn, White's then Black's.
pub type TurnRecord = ArrayVec<String, 2>;

/// MoveHistory maps each turn number to the notation of the moves played in it.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct MoveHistory {
    turns: BTreeMap<MoveCount, TurnRecord>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a move's notation to the record for `turn`, opening the record
    /// if this is the first move of the turn.
    pub(crate) fn record(&mut self, turn: MoveCount, notation: String) {
        let record = self.turns.entry(turn).or_default();
        debug_assert!(!record.is_full(), "turn {turn} already has two moves");
        // A turn never holds more than two plies; a third is dropped.
        let _ = record.try_push(notation);
    }

    pub fn get(&self, turn: MoveCount) -> Option<&TurnRecord> {
        self.turns.get(&turn)
    }

    /// Turns in ascending order with their recorded moves.
    pub fn iter(&self) -> btree_map::Iter<'_, MoveCount, TurnRecord> {
        self.turns.iter()
    }

    /// Number of turns with at least one recorded move.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Total number of recorded moves.
    pub fn plies(&self) -> usize {
        self.turns.values().map(|record| record.len()).sum()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Every recorded token in play order, separated by spaces.
    /// Replaying the result with `Game::initialize_from_notation` may move a
    /// different piece when two pieces share a token, since the first match wins.
    pub fn tokens(&self) -> String {
        self.turns
            .values()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'a> IntoIterator for &'a MoveHistory {
    type Item = (&'a MoveCount, &'a TurnRecord);
    type IntoIter = btree_map::Iter<'a, MoveCount, TurnRecord>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// # Example
/// `1. e4 e5 2. Nf3`
impl Display for MoveHistory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for (turn, record) in self {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{turn}. {}", record.join(" "))?;
        }
        Ok(())
    }
}
