//! Short algebraic style notation for moves.
//!
//! Tokens are built from the moving piece, whether the target is occupied,
//! and the target address:
//! * `e4`, `dxe5` for pawns, which have no letter and name their file on captures.
//! * `Nf3`, `Bxc6` for every other piece.
//! * `O-Og1`, `O-O-Oc8` for castles. The destination is kept on castling
//!   tokens so they stay unique to the moving side.
//!
//! No disambiguation is added when two pieces of the same kind can reach
//! the same square.

use crate::board::Board;
use crate::coretypes::{CastleSide, PieceId, PieceKind, Square};

/// Notation token for moving piece `id` to `to` on `board`.
/// Returns None if the piece is not on the board.
pub fn move_notation(board: &Board, id: PieceId, to: Square) -> Option<String> {
    let piece = board.piece(id)?;
    let from = piece.square()?;
    let is_capture = board.occupant(to).is_some();

    let mut token = String::with_capacity(8);
    match piece.piece_kind() {
        PieceKind::King => {
            let col_delta = to.col() as i8 - from.col() as i8;
            match CastleSide::from_king_delta(col_delta) {
                Some(side) => token.push_str(side.notation()),
                None => push_piece_prefix(&mut token, PieceKind::King, is_capture),
            }
        }
        PieceKind::Pawn => {
            if is_capture {
                token.push(from.file().to_char());
                token.push('x');
            }
        }
        piece_kind => push_piece_prefix(&mut token, piece_kind, is_capture),
    }
    token.push_str(&to.to_string());

    Some(token)
}

fn push_piece_prefix(token: &mut String, piece_kind: PieceKind, is_capture: bool) {
    if let Some(letter) = piece_kind.notation_letter() {
        token.push(letter);
    }
    if is_capture {
        token.push('x');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::{Color, Square::*};

    #[test]
    fn quiet_moves() {
        let board = Board::start_position();
        let e2 = board.occupant(E2).unwrap();
        let g1 = board.occupant(G1).unwrap();
        let b8 = board.occupant(B8).unwrap();
        assert_eq!(move_notation(&board, e2, E4).unwrap(), "e4");
        assert_eq!(move_notation(&board, g1, F3).unwrap(), "Nf3");
        assert_eq!(move_notation(&board, b8, C6).unwrap(), "Nc6");
    }

    #[test]
    fn captures() {
        let mut board = Board::new();
        let pawn = board.add_piece(Color::White, PieceKind::Pawn, E4).unwrap();
        let bishop = board.add_piece(Color::Black, PieceKind::Bishop, B7).unwrap();
        let king = board.add_piece(Color::Black, PieceKind::King, G8).unwrap();
        board.add_piece(Color::Black, PieceKind::Pawn, D5).unwrap();
        board.add_piece(Color::White, PieceKind::Rook, G7).unwrap();

        assert_eq!(move_notation(&board, pawn, D5).unwrap(), "exd5");
        assert_eq!(move_notation(&board, bishop, E4).unwrap(), "Bxe4");
        assert_eq!(move_notation(&board, king, G7).unwrap(), "Kxg7");
        assert_eq!(move_notation(&board, king, H8).unwrap(), "Kh8");
    }

    #[test]
    fn castles_keep_destination() {
        let mut board = Board::new();
        let white = board.add_piece(Color::White, PieceKind::King, E1).unwrap();
        let black = board.add_piece(Color::Black, PieceKind::King, E8).unwrap();
        assert_eq!(move_notation(&board, white, G1).unwrap(), "O-Og1");
        assert_eq!(move_notation(&board, white, C1).unwrap(), "O-O-Oc1");
        assert_eq!(move_notation(&board, black, G8).unwrap(), "O-Og8");
        assert_eq!(move_notation(&board, black, C8).unwrap(), "O-O-Oc8");
    }

    #[test]
    fn captured_piece_has_no_notation() {
        let mut board = Board::new();
        let rook = board.add_piece(Color::White, PieceKind::Rook, A1).unwrap();
        let knight = board.add_piece(Color::Black, PieceKind::Knight, A5).unwrap();
        board.place(rook, A5);
        assert_eq!(move_notation(&board, knight, B3), None);
    }
}
