//! Gambit Rules error type.

use std::error;
use std::fmt::{self, Display};
use std::result;

/// Gambit Rules generic result type.
pub type Result<T> = result::Result<T, Error>;

/// A list specifying general errors for the rules engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Square address malformed or off the board.
    ParseSquareMalformed,
    /// File parse string malformed.
    ParseFileMalformed,
    /// Rank parse string malformed.
    ParseRankMalformed,

    /// A piece cannot be set up on a square that is already occupied.
    BoardSquareOccupied,
    /// A color may not have more pieces than a full starting set.
    BoardTooManyPieces,

    /// The moving piece does not belong to the active color.
    GameWrongTurn,
    /// The piece does not exist or has been captured.
    GamePieceNotOnBoard,
    /// The destination is not among the piece's pseudo-legal moves.
    GameIllegalMove,
    /// A notation token matched none of the active player's moves.
    GameUnresolvableMove,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ParseSquareMalformed => "parse square malformed",
            ErrorKind::ParseFileMalformed => "parse file malformed",
            ErrorKind::ParseRankMalformed => "parse rank malformed",

            ErrorKind::BoardSquareOccupied => "board square occupied",
            ErrorKind::BoardTooManyPieces => "board too many pieces",

            ErrorKind::GameWrongTurn => "game not this color's turn",
            ErrorKind::GamePieceNotOnBoard => "game piece not on board",
            ErrorKind::GameIllegalMove => "game illegal move",
            ErrorKind::GameUnresolvableMove => "game unresolvable move",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary and general error type for Gambit Rules.
#[derive(Debug)]
pub enum Error {
    Simple(ErrorKind),
    Message(ErrorKind, String),
}

impl Error {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Simple(error_kind) | Error::Message(error_kind, _) => *error_kind,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Simple(error_kind) => {
                write!(f, "{error_kind}")
            }
            Error::Message(error_kind, string) => {
                write!(f, "{error_kind}: {string}")
            }
        }
    }
}

impl error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(error_kind: ErrorKind) -> Self {
        Self::Simple(error_kind)
    }
}

impl<S: ToString> From<(ErrorKind, S)> for Error {
    fn from((error_kind, stringable): (ErrorKind, S)) -> Self {
        Self::Message(error_kind, stringable.to_string())
    }
}
