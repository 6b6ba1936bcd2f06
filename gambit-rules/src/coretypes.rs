//! The fundamental and simple types of `gambit_rules`.

use std::convert::TryFrom;
use std::fmt::{self, Display, Write};
use std::ops::Not;
use std::str::FromStr;

use crate::error::{self, Error, ErrorKind};

///////////////
// Constants //
///////////////
pub const NUM_FILES: usize = 8; // A, B, C, D, E, F, G, H
pub const NUM_RANKS: usize = 8; // 1, 2, 3, 4, 5, 6, 7, 8
pub const NUM_SQUARES: usize = NUM_FILES * NUM_RANKS;

// 8 pawns, 2 rooks, 2 knights, 2 bishops, 1 queen, 1 king.
pub const PIECES_PER_COLOR: usize = 16;

// A queen in the middle of an empty board reaches the most squares of any piece.
pub const MAX_PIECE_MOVES: usize = 27;

/////////////////////////
// Data and Structures //
/////////////////////////

/// Counter for full moves, the turn number of a game.
pub type MoveCount = u16;

/// Color can represent the color of a piece, or a player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Color {
    White,
    Black,
}

/// The six kinds of chess pieces.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

/// Observe Castling rights for a position.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Castling(u8);

/// Castling Enum constants.
impl Castling {
    pub const W_KING: Castling = Castling(0b00000001);
    pub const W_QUEEN: Castling = Castling(0b00000010);
    pub const B_KING: Castling = Castling(0b00000100);
    pub const B_QUEEN: Castling = Castling(0b00001000);
    pub const W_SIDE: Castling = Castling(Self::W_KING.0 | Self::W_QUEEN.0);
    pub const B_SIDE: Castling = Castling(Self::B_KING.0 | Self::B_QUEEN.0);
    pub const ALL: Castling = Castling(Self::W_SIDE.0 | Self::B_SIDE.0);
    pub const NONE: Castling = Castling(0u8);
}

/// Which wing of the board a king castles towards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CastleSide {
    /// Towards the h-file, `O-O`.
    King,
    /// Towards the a-file, `O-O-O`.
    Queen,
}

/// Enum variant order and discriminant must be contiguous, start from 0,
/// and be in ascending order ABCDEFGH.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[rustfmt::skip]
#[repr(u8)]
pub enum File {
    A, B, C, D, E, F, G, H = 7u8,
}

/// Enum variant order and discriminant must be contiguous, start from 0,
/// and be in ascending order 12345678.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[rustfmt::skip]
#[repr(u8)]
pub enum Rank {
    R1, R2, R3, R4, R5, R6, R7, R8 = 7u8,
}

/// Square
/// Every cell of a chess board, addressed `a1` through `h8`.
/// The row of a square is its rank index and the column is its file index,
/// both 0-based, so `E4` is row 3, column 4.
/// WARNING: The exact ordering of enums is important for their discriminants.
///          `Square::A1 as u8` is the square's index into a Mailbox.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[rustfmt::skip]
#[repr(u8)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8 = 63u8,
}

#[rustfmt::skip]
const SQUARES: [Square; NUM_SQUARES] = {
    use Square::*;
    [
        A1, B1, C1, D1, E1, F1, G1, H1,
        A2, B2, C2, D2, E2, F2, G2, H2,
        A3, B3, C3, D3, E3, F3, G3, H3,
        A4, B4, C4, D4, E4, F4, G4, H4,
        A5, B5, C5, D5, E5, F5, G5, H5,
        A6, B6, C6, D6, E6, F6, G6, H6,
        A7, B7, C7, D7, E7, F7, G7, H7,
        A8, B8, C8, D8, E8, F8, G8, H8,
    ]
};

/// Handle to a piece stored in a Board's piece arena.
/// A PieceId stays valid for the life of the Board that issued it,
/// including after that piece has been captured.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PieceId(pub(crate) u8);

/// Move
/// A piece and the square it is moving to. Equivalent to a chess "ply".
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Move {
    pub(crate) piece: PieceId,
    pub(crate) to: Square,
}

/// Enum describing the kind of a move.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MoveKind {
    /// Move resulted in a capture.
    Capture(PieceKind),
    /// No special moves or captures, simply moved to empty square.
    Quiet,
    /// King moved two files and its rook was relocated with it.
    Castle(CastleSide),
}

/// MoveInfo describes a move after it has been applied to a game.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MoveInfo {
    /// The moving piece.
    pub(crate) piece: PieceId,
    /// Color of the moving piece.
    pub(crate) color: Color,
    /// Kind of the piece that was moved.
    pub(crate) piece_kind: PieceKind,
    /// Original square of moving piece.
    pub(crate) from: Square,
    /// Target square of moving piece.
    pub(crate) to: Square,
    /// Flag if move was a regular or special move.
    pub(crate) move_kind: MoveKind,
    /// Notation token recorded in the move history.
    pub(crate) notation: String,
    /// Turn number the move was recorded under.
    pub(crate) turn: MoveCount,
}

////////////
// Traits //
////////////

/// SquareIndexable
/// A chessboard has 64 squares on it. SquareIndexable can be implemented
/// for types whose values can map directly to a chess Square's index.
pub trait SquareIndexable {
    /// idx(&self) must return a number between 0-63 inclusive, representing
    /// a square on a chess board in little-endian, rank-file order.
    /// Warning: Values outside of 0-63 will panic when indexing.
    fn idx(&self) -> usize;
}

// Blanket impl on references of types that are SquareIndexable.
impl<I: SquareIndexable> SquareIndexable for &I {
    fn idx(&self) -> usize {
        I::idx(*self)
    }
}

//////////////////////
/// Implementations //
//////////////////////

impl Color {
    /// Single character label, `W` or `B`.
    pub const fn to_char(&self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }

    /// Row step a pawn of this color advances by.
    pub const fn forward(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row holding this color's major and minor pieces at the start of a game.
    pub const fn back_rank(&self) -> Rank {
        match self {
            Color::White => Rank::R1,
            Color::Black => Rank::R8,
        }
    }

    /// Row holding this color's pawns at the start of a game.
    pub const fn pawn_rank(&self) -> Rank {
        match self {
            Color::White => Rank::R2,
            Color::Black => Rank::R7,
        }
    }

    pub fn iter() -> impl Iterator<Item = Color> {
        [Color::White, Color::Black].into_iter()
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl From<Color> for char {
    fn from(color: Color) -> Self {
        color.to_char()
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(char::from(*self))
    }
}

impl PieceKind {
    /// FEN compliant conversion, defaults as white pieces.
    pub const fn to_char(&self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        }
    }

    /// Letter used in move notation. Pawns are written without a letter.
    pub const fn notation_letter(&self) -> Option<char> {
        match self {
            PieceKind::Pawn => None,
            _ => Some(self.to_char()),
        }
    }

    /// Material value in pawns. The king carries a convenience value.
    pub const fn value(&self) -> u32 {
        match self {
            PieceKind::King => 100,
            PieceKind::Queen => 9,
            PieceKind::Rook => 5,
            PieceKind::Bishop => 3,
            PieceKind::Knight => 3,
            PieceKind::Pawn => 1,
        }
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(self.to_char())
    }
}

impl Castling {
    /// Returns true if there are no castling rights.
    pub const fn is_none(&self) -> bool {
        self.0 == 0u8
    }

    /// Returns true if Castling mask has all of provided bits.
    pub fn has(&self, rights: Castling) -> bool {
        self.0 & rights.0 == rights.0
    }

    /// Set given bits to '1' on Castling mask.
    pub fn set(&mut self, rights: Castling) {
        self.0 |= rights.0;
    }

    /// The single right for a color castling towards a side.
    pub const fn right(color: Color, side: CastleSide) -> Castling {
        match (color, side) {
            (Color::White, CastleSide::King) => Self::W_KING,
            (Color::White, CastleSide::Queen) => Self::W_QUEEN,
            (Color::Black, CastleSide::King) => Self::B_KING,
            (Color::Black, CastleSide::Queen) => Self::B_QUEEN,
        }
    }
}

/// Displays in FEN-component format.
impl Display for Castling {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_none() {
            return f.write_char('-');
        }
        for (rights, ch) in [
            (Self::W_KING, 'K'),
            (Self::W_QUEEN, 'Q'),
            (Self::B_KING, 'k'),
            (Self::B_QUEEN, 'q'),
        ] {
            if self.has(rights) {
                f.write_char(ch)?;
            }
        }
        Ok(())
    }
}

impl CastleSide {
    /// File the rook stands on before castling.
    pub const fn rook_from(&self) -> File {
        match self {
            CastleSide::King => File::H,
            CastleSide::Queen => File::A,
        }
    }

    /// File the rook lands on after castling.
    pub const fn rook_to(&self) -> File {
        match self {
            CastleSide::King => File::F,
            CastleSide::Queen => File::D,
        }
    }

    /// File the king lands on after castling.
    pub const fn king_to(&self) -> File {
        match self {
            CastleSide::King => File::G,
            CastleSide::Queen => File::C,
        }
    }

    /// Notation prefix for this castle.
    pub const fn notation(&self) -> &'static str {
        match self {
            CastleSide::King => "O-O",
            CastleSide::Queen => "O-O-O",
        }
    }

    /// Side a king reaches by moving `col_delta` columns, if that is a castle.
    pub const fn from_king_delta(col_delta: i8) -> Option<Self> {
        match col_delta {
            2 => Some(CastleSide::King),
            -2 => Some(CastleSide::Queen),
            _ => None,
        }
    }
}

impl File {
    /// File enum variants cover all u8 values from 0-7 inclusive.
    pub const fn from_u8(value: u8) -> Option<Self> {
        use File::*;
        match value {
            0 => Some(A),
            1 => Some(B),
            2 => Some(C),
            3 => Some(D),
            4 => Some(E),
            5 => Some(F),
            6 => Some(G),
            7 => Some(H),
            _ => None,
        }
    }
    /// Get the character representation of File, in lowercase.
    pub const fn to_char(&self) -> char {
        (b'a' + *self as u8) as char
    }
}

impl Rank {
    /// Rank enum variants cover all u8 values from 0-7 inclusive.
    pub const fn from_u8(value: u8) -> Option<Self> {
        use Rank::*;
        match value {
            0 => Some(R1),
            1 => Some(R2),
            2 => Some(R3),
            3 => Some(R4),
            4 => Some(R5),
            5 => Some(R6),
            6 => Some(R7),
            7 => Some(R8),
            _ => None,
        }
    }
    pub const fn to_char(&self) -> char {
        (b'1' + *self as u8) as char
    }
}

impl TryFrom<char> for File {
    type Error = error::Error;
    fn try_from(ch: char) -> error::Result<Self> {
        match ch {
            'a'..='h' => Ok(Self::from_u8(ch as u8 - b'a').unwrap_or(Self::A)),
            _ => Err((ErrorKind::ParseFileMalformed, "file char not of abcdefgh").into()),
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = error::Error;
    fn try_from(ch: char) -> error::Result<Self> {
        match ch {
            '1'..='8' => Ok(Self::from_u8(ch as u8 - b'1').unwrap_or(Self::R1)),
            _ => Err((ErrorKind::ParseRankMalformed, "rank char not of 12345678").into()),
        }
    }
}

impl Display for File {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(self.to_char())
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(self.to_char())
    }
}

impl SquareIndexable for (File, Rank) {
    fn idx(&self) -> usize {
        let &(file, rank) = self;
        NUM_FILES * rank as usize + file as usize
    }
}

impl Square {
    /// Square enum variants cover all u8 values from 0-63 inclusive.
    pub const fn from_u8(value: u8) -> Option<Self> {
        if (value as usize) < NUM_SQUARES {
            Some(SQUARES[value as usize])
        } else {
            None
        }
    }

    /// Square at 0-based row (rank) and column (file), if both are on the board.
    pub const fn from_coords(row: i8, col: i8) -> Option<Self> {
        if row < 0 || row >= NUM_RANKS as i8 || col < 0 || col >= NUM_FILES as i8 {
            return None;
        }
        Self::from_u8(row as u8 * NUM_FILES as u8 + col as u8)
    }

    /// All squares from A1 to H8 in rank-file order.
    pub fn iter() -> impl Iterator<Item = Square> {
        SQUARES.into_iter()
    }

    pub const fn file(&self) -> File {
        match File::from_u8(self.col()) {
            Some(file) => file,
            None => File::A,
        }
    }

    pub const fn rank(&self) -> Rank {
        match Rank::from_u8(self.row()) {
            Some(rank) => rank,
            None => Rank::R1,
        }
    }

    /// Returns 0-based column (file index), not the chess file letter.
    pub const fn col(&self) -> u8 {
        *self as u8 % NUM_FILES as u8
    }

    /// Returns 0-based row (rank index), not the 1-based chess rank.
    pub const fn row(&self) -> u8 {
        *self as u8 / NUM_FILES as u8
    }

    /// Returns the square `row_offset` rows and `col_offset` columns away,
    /// or None if that would leave the board.
    pub const fn offset(&self, row_offset: i8, col_offset: i8) -> Option<Self> {
        Self::from_coords(self.row() as i8 + row_offset, self.col() as i8 + col_offset)
    }
}

impl From<(File, Rank)> for Square {
    fn from(coordinate: (File, Rank)) -> Self {
        SQUARES[coordinate.idx()]
    }
}

/// Square::= <fileLetter><rankNumber>
impl FromStr for Square {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        let malformed = || Error::from((ErrorKind::ParseSquareMalformed, format!("{s:?}")));

        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(malformed()),
        };
        let file = File::try_from(file).map_err(|_| malformed())?;
        let rank = Rank::try_from(rank).map_err(|_| malformed())?;
        Ok(Square::from((file, rank)))
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl SquareIndexable for Square {
    fn idx(&self) -> usize {
        *self as usize
    }
}

impl PieceId {
    /// Index of this piece in its Board's arena.
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl Move {
    pub const fn new(piece: PieceId, to: Square) -> Self {
        Self { piece, to }
    }

    // Immutable Getters
    pub const fn piece(&self) -> PieceId {
        self.piece
    }
    pub const fn to(&self) -> Square {
        self.to
    }
}

impl MoveInfo {
    pub const fn piece(&self) -> PieceId {
        self.piece
    }
    pub const fn color(&self) -> Color {
        self.color
    }
    pub const fn piece_kind(&self) -> PieceKind {
        self.piece_kind
    }
    pub const fn from(&self) -> Square {
        self.from
    }
    pub const fn to(&self) -> Square {
        self.to
    }
    pub const fn move_kind(&self) -> MoveKind {
        self.move_kind
    }
    pub fn notation(&self) -> &str {
        &self.notation
    }
    pub const fn turn(&self) -> MoveCount {
        self.turn
    }

    /// Get this MoveInfo's inner Move.
    pub const fn move_(&self) -> Move {
        Move::new(self.piece, self.to)
    }

    /// Returns true if this MoveInfo came from a capturing move.
    pub fn is_capture(&self) -> bool {
        matches!(self.move_kind, MoveKind::Capture(_))
    }

    /// Returns the piece kind of the captured piece, if any.
    pub fn captured(&self) -> Option<PieceKind> {
        if let MoveKind::Capture(pk) = self.move_kind {
            Some(pk)
        } else {
            None
        }
    }
}

/// # Example
/// White pawn from e2 to e4 -> `1. W e2e4 (e4)`.
impl Display for MoveInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}. {} {}{} ({})",
            self.turn, self.color, self.from, self.to, self.notation
        )
    }
}
