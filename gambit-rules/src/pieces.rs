//! Chess pieces as stored in a Board's piece arena.

use std::fmt::{self, Display, Write};

use crate::coretypes::{Color, PieceKind, Square};

/// A single chess piece.
/// A piece occupies at most one square. Once captured its square is None
/// and it no longer takes part in the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Piece {
    pub(crate) color: Color,
    pub(crate) piece_kind: PieceKind,
    pub(crate) square: Option<Square>,
    pub(crate) has_moved: bool,
}

impl Piece {
    /// A piece that has not been placed on a board.
    pub const fn new(color: Color, piece_kind: PieceKind) -> Self {
        Piece {
            color,
            piece_kind,
            square: None,
            has_moved: false,
        }
    }

    /// Immutable Getters.
    pub const fn color(&self) -> Color {
        self.color
    }
    pub const fn piece_kind(&self) -> PieceKind {
        self.piece_kind
    }
    pub const fn square(&self) -> Option<Square> {
        self.square
    }
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    pub const fn value(&self) -> u32 {
        self.piece_kind.value()
    }

    pub const fn is_captured(&self) -> bool {
        self.square.is_none()
    }

    /// A piece may only move when its color is the active color.
    pub fn can_move(&self, active: Color) -> bool {
        self.color == active
    }

    /// FEN style character, uppercase for White and lowercase for Black.
    pub const fn to_char(&self) -> char {
        match self.color {
            Color::White => self.piece_kind.to_char(),
            Color::Black => self.piece_kind.to_char().to_ascii_lowercase(),
        }
    }
}

impl From<Piece> for char {
    fn from(piece: Piece) -> Self {
        piece.to_char()
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(char::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_move_only_on_own_turn() {
        let knight = Piece::new(Color::Black, PieceKind::Knight);
        assert!(knight.can_move(Color::Black));
        assert!(!knight.can_move(Color::White));
        assert!(knight.is_captured());
        assert!(!knight.has_moved());
    }

    #[test]
    fn piece_chars() {
        assert_eq!(Piece::new(Color::White, PieceKind::Queen).to_char(), 'Q');
        assert_eq!(Piece::new(Color::Black, PieceKind::Queen).to_char(), 'q');
        assert_eq!(Piece::new(Color::Black, PieceKind::Pawn).to_string(), "p");
    }
}
