//! A [mailbox](https://www.chessprogramming.org/Mailbox) is a square-centric
//! representation of a chess board.
//!
//! A Mailbox is an array of size Files x Ranks where each index may hold the
//! id of the piece occupying that square, or be empty.

use std::ops::{Index, IndexMut};

use crate::coretypes::{PieceId, Square, SquareIndexable, NUM_SQUARES};

/// Classic 8x8 square board of piece occupancy.
/// Index starts at A1.
/// A1 = idx 0
/// B1 = idx 1
/// A2 = idx 8
/// H7 = idx 63
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Mailbox {
    board: [Option<PieceId>; Self::SIZE],
}

impl Mailbox {
    pub const SIZE: usize = NUM_SQUARES;

    /// Creates an empty Mailbox, where all squares are None.
    pub fn new() -> Self {
        Mailbox {
            board: [None; Mailbox::SIZE],
        }
    }

    pub fn board(&self) -> &[Option<PieceId>; Self::SIZE] {
        &self.board
    }

    /// Iterate over every occupied square and its occupant.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, PieceId)> + '_ {
        Square::iter().filter_map(move |square| self[square].map(|id| (square, id)))
    }
}

impl<I: SquareIndexable> Index<I> for Mailbox {
    type Output = Option<PieceId>;
    fn index(&self, idx: I) -> &Self::Output {
        &self.board[idx.idx()]
    }
}

impl<I: SquareIndexable> IndexMut<I> for Mailbox {
    fn index_mut(&mut self, idx: I) -> &mut Self::Output {
        &mut self.board[idx.idx()]
    }
}

impl Default for Mailbox {
    fn default() -> Self {
        Mailbox::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::Square::*;

    #[test]
    fn index_by_square() {
        let mut mb = Mailbox::new();
        assert!(mb.occupied().next().is_none());

        mb[E4] = Some(PieceId(3));
        mb[A1] = Some(PieceId(0));
        assert_eq!(mb[E4], Some(PieceId(3)));
        assert_eq!(mb.board()[E4 as usize], Some(PieceId(3)));

        let occupied: Vec<_> = mb.occupied().collect();
        assert_eq!(occupied, vec![(A1, PieceId(0)), (E4, PieceId(3))]);
    }
}
