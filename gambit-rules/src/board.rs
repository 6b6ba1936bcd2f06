//! Board holds the 8x8 grid of squares and every piece set up on it.
//!
//! Squares are slots of a [`Mailbox`] and pieces live in an arena owned by
//! the Board. A square refers to its occupant by [`PieceId`], and a piece
//! refers back to its square by value, so there are no ownership cycles.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::boardrepr::Mailbox;
use crate::coretypes::{
    CastleSide, Castling, Color, File, PieceId, PieceKind, Rank, Square, NUM_FILES, NUM_RANKS,
    PIECES_PER_COLOR,
};
use crate::error::{self, ErrorKind};
use crate::pieces::Piece;

/// Standard order of pieces on a back rank, from the a-file to the h-file.
const BACK_RANK: [PieceKind; NUM_FILES] = {
    use PieceKind::*;
    [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook]
};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    mailbox: Mailbox,
    pieces: Vec<Piece>,
}

impl Board {
    /// Row labels, from the first row to the last.
    pub const ROW_NAMES: [char; NUM_RANKS] = ['1', '2', '3', '4', '5', '6', '7', '8'];
    /// Column labels, from the first column to the last.
    pub const COL_NAMES: [char; NUM_FILES] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

    /// Creates a board with no pieces.
    pub fn new() -> Self {
        Self {
            mailbox: Mailbox::new(),
            pieces: Vec::with_capacity(2 * PIECES_PER_COLOR),
        }
    }

    /// Create a Board with pieces arranged in starting chess position.
    pub fn start_position() -> Self {
        let mut board = Self::new();

        for color in Color::iter() {
            for (col, piece_kind) in BACK_RANK.into_iter().enumerate() {
                let file = File::from_u8(col as u8).unwrap_or(File::A);
                board.setup(color, piece_kind, Square::from((file, color.back_rank())));
            }
            for col in 0..NUM_FILES as u8 {
                let file = File::from_u8(col).unwrap_or(File::A);
                board.setup(color, PieceKind::Pawn, Square::from((file, color.pawn_rank())));
            }
        }

        board
    }

    /// Adds an unmoved piece to an empty square, returning its id.
    pub fn add_piece(
        &mut self,
        color: Color,
        piece_kind: PieceKind,
        square: Square,
    ) -> error::Result<PieceId> {
        if let Some(occupant) = self.piece_at(square) {
            return Err((ErrorKind::BoardSquareOccupied, format!("{square} holds {occupant}")).into());
        }
        let count = self.pieces.iter().filter(|p| p.color == color).count();
        if count >= PIECES_PER_COLOR {
            return Err((ErrorKind::BoardTooManyPieces, format!("{color} has {count}")).into());
        }
        Ok(self.setup(color, piece_kind, square))
    }

    fn setup(&mut self, color: Color, piece_kind: PieceKind, square: Square) -> PieceId {
        let id = PieceId(self.pieces.len() as u8);
        self.pieces.push(Piece::new(color, piece_kind));
        self.place(id, square);
        id
    }

    /// Looks up a square by its address, such as `e4`.
    pub fn square_by_address(&self, address: &str) -> error::Result<Square> {
        Square::from_str(address)
    }

    /// Square found by stepping `row_offset` rows and `col_offset` columns from
    /// `square`, or None past the edge of the board.
    pub fn adjacent(&self, square: Square, row_offset: i8, col_offset: i8) -> Option<Square> {
        square.offset(row_offset, col_offset)
    }

    /// Square-centric view of occupancy.
    pub fn mailbox(&self) -> &Mailbox {
        &self.mailbox
    }

    pub fn occupant(&self, square: Square) -> Option<PieceId> {
        self.mailbox[square]
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id.index())
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.occupant(square).and_then(|id| self.piece(id))
    }

    /// True if `square` holds a piece of the opposite color to `color`.
    pub fn is_enemy(&self, square: Square, color: Color) -> bool {
        self.piece_at(square).map_or(false, |piece| piece.color != color)
    }

    /// Puts a piece on a square and nothing more.
    /// The piece's previous square is emptied and any piece already on
    /// `square` is taken off the board, which is returned.
    /// Turn order, history and the moved flag are left alone.
    pub(crate) fn place(&mut self, id: PieceId, square: Square) -> Option<PieceId> {
        if let Some(from) = self.piece(id).and_then(|piece| piece.square) {
            self.mailbox[from] = None;
        }

        let captured = self.mailbox[square].filter(|&occupant| occupant != id);
        if let Some(piece) = captured.and_then(|captured| self.piece_mut(captured)) {
            piece.square = None;
        }

        self.mailbox[square] = Some(id);
        if let Some(piece) = self.piece_mut(id) {
            piece.square = Some(square);
        }
        captured
    }

    /// All pieces in the arena in the order they were set up, captured ones included.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(idx, piece)| (PieceId(idx as u8), piece))
    }

    /// Every square from a1 to h8 with its occupant, for rendering.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Option<&Piece>)> {
        Square::iter().map(move |square| (square, self.piece_at(square)))
    }

    /// Sum of the values of a color's pieces still on the board.
    pub fn material(&self, color: Color) -> u32 {
        self.pieces
            .iter()
            .filter(|piece| piece.color == color && !piece.is_captured())
            .map(Piece::value)
            .sum()
    }

    /// Unmoved rook of `color` in the corner for `side`, if the king of that
    /// color is unmoved on the e-file of its back rank.
    pub(crate) fn castling_rook(&self, color: Color, side: CastleSide) -> Option<PieceId> {
        let rank = color.back_rank();
        let king = self.piece_at(Square::from((File::E, rank)))?;
        if king.color != color || king.piece_kind != PieceKind::King || king.has_moved {
            return None;
        }

        let rook_id = self.occupant(Square::from((side.rook_from(), rank)))?;
        let rook = self.piece(rook_id)?;
        (rook.color == color && rook.piece_kind == PieceKind::Rook && !rook.has_moved)
            .then_some(rook_id)
    }

    /// Castling rights as implied by which kings and rooks have not moved.
    /// A right does not mean castling is currently possible, squares between
    /// the king and rook may still be occupied.
    pub fn castling(&self) -> Castling {
        let mut castling = Castling::NONE;
        for color in Color::iter() {
            for side in [CastleSide::King, CastleSide::Queen] {
                if self.castling_rook(color, side).is_some() {
                    castling.set(Castling::right(color, side));
                }
            }
        }
        castling
    }

    /// Returns pretty-printed chess board representation of Self.
    /// The chess board has borders and file/rank indicators.
    pub fn pretty(&self) -> String {
        const RANK_SEP: &str = "+---+---+---+---+---+---+---+---+\n";
        let mut pretty = String::with_capacity(626);

        pretty.push_str(RANK_SEP);
        for row in (0..NUM_RANKS as u8).rev() {
            pretty.push_str("| ");
            for col in 0..NUM_FILES as u8 {
                let file = File::from_u8(col).unwrap_or(File::A);
                let rank = Rank::from_u8(row).unwrap_or(Rank::R1);
                pretty.push(match self.piece_at(Square::from((file, rank))) {
                    Some(piece) => char::from(*piece),
                    None => ' ',
                });
                pretty.push_str(" | ");
            }
            pretty.push(Self::ROW_NAMES[row as usize]);
            pretty.push('\n');
            pretty.push_str(RANK_SEP);
        }
        for name in Self::COL_NAMES {
            pretty.push_str("  ");
            pretty.push(name);
            pretty.push(' ');
        }
        pretty.push('\n');

        pretty
    }
}

/// Default value is that of a standard starting chess position.
impl Default for Board {
    fn default() -> Self {
        Board::start_position()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}
