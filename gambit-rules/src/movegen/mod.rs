//! Pseudo-legal move generation.
//!
//! Moves obey how each piece moves and what occupies the board, but the
//! safety of the mover's own king is never considered.

use crate::board::Board;
use crate::coretypes::{CastleSide, Color, File, PieceId, PieceKind, Square};
use crate::movelist::Destinations;

pub(crate) mod rays;

use rays::{ALL_DIRECTIONS, DIAGONAL, KNIGHT_JUMPS, ORTHOGONAL};

/// Destination squares for the piece `id` when `active` is the color to move.
/// Returns nothing if the piece is captured, unknown, or not of the active color.
pub fn piece_moves(board: &Board, id: PieceId, active: Color) -> Destinations {
    let mut moves = Destinations::new();

    let piece = match board.piece(id) {
        Some(piece) if piece.can_move(active) => piece,
        _ => return moves,
    };
    let from = match piece.square() {
        Some(square) => square,
        None => return moves,
    };
    let color = piece.color();

    match piece.piece_kind() {
        PieceKind::King => {
            rays::steps(board, from, color, &ALL_DIRECTIONS, &mut moves);
            castle_moves(board, from, color, &mut moves);
        }
        PieceKind::Queen => rays::slides(board, from, color, &ALL_DIRECTIONS, &mut moves),
        PieceKind::Rook => rays::slides(board, from, color, &ORTHOGONAL, &mut moves),
        PieceKind::Bishop => rays::slides(board, from, color, &DIAGONAL, &mut moves),
        PieceKind::Knight => rays::steps(board, from, color, &KNIGHT_JUMPS, &mut moves),
        PieceKind::Pawn => pawn_moves(board, from, color, piece.has_moved(), &mut moves),
    }

    moves
}

/// Pawns push one square forward onto an empty square, or two from their
/// first move if both squares are empty. They capture one square diagonally
/// forward, and only onto an enemy piece.
fn pawn_moves(board: &Board, from: Square, color: Color, has_moved: bool, out: &mut Destinations) {
    let forward = color.forward();

    if let Some(single) = board.adjacent(from, forward, 0) {
        if board.occupant(single).is_none() {
            out.push(single);

            if !has_moved {
                if let Some(double) = board.adjacent(single, forward, 0) {
                    if board.occupant(double).is_none() {
                        out.push(double);
                    }
                }
            }
        }
    }

    for col_offset in [-1, 1] {
        if let Some(target) = board.adjacent(from, forward, col_offset) {
            if board.is_enemy(target, color) {
                out.push(target);
            }
        }
    }
}

/// Castles for an unmoved king on the e-file of its back rank, when the
/// corner rook is unmoved and every square between them is empty.
fn castle_moves(board: &Board, from: Square, color: Color, out: &mut Destinations) {
    for side in [CastleSide::King, CastleSide::Queen] {
        if board.castling_rook(color, side).is_none() {
            continue;
        }
        let rank = from.rank();
        let (low, high) = match side {
            CastleSide::King => (File::F as u8, File::G as u8),
            CastleSide::Queen => (File::B as u8, File::D as u8),
        };
        let path_clear = (low..=high)
            .filter_map(File::from_u8)
            .all(|file| board.occupant(Square::from((file, rank))).is_none());

        if path_clear {
            out.push(Square::from((side.king_to(), rank)));
        }
    }
}
