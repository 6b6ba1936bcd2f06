//! A player of one color.

use crate::board::Board;
use crate::coretypes::{Color, Move};
use crate::movegen;
use crate::movelist::MoveList;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Player {
    color: Color,
    name: String,
}

impl Player {
    pub fn new(color: Color, name: impl Into<String>) -> Self {
        Self {
            color,
            name: name.into(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every (piece, destination) pair available to this player's pieces,
    /// scanning the board from a1 to h8. Empty when `active` is not this
    /// player's color. Computed fresh on every call.
    pub fn all_moves(&self, board: &Board, active: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (_, id) in board.mailbox().occupied() {
            let ours = board.piece(id).map_or(false, |p| p.color() == self.color);
            if ours {
                let destinations = movegen::piece_moves(board, id, active);
                moves.extend(destinations.into_iter().map(|to| Move::new(id, to)));
            }
        }
        moves
    }
}
