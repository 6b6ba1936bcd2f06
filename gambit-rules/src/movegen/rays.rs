//! Direction offsets and ray scanning for pieces that move by steps or slides.

use crate::board::Board;
use crate::coretypes::{Color, Square};
use crate::movelist::Destinations;

/// A (row, column) step.
pub(crate) type Offset = (i8, i8);

// North, East, South, West.
pub(crate) const ORTHOGONAL: [Offset; 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
// NorthEast, SouthEast, SouthWest, NorthWest.
pub(crate) const DIAGONAL: [Offset; 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];
// Every non-zero combination of -1, 0, 1.
pub(crate) const ALL_DIRECTIONS: [Offset; 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];
pub(crate) const KNIGHT_JUMPS: [Offset; 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Squares reachable from origin along one direction, from the origin exclusive
/// to the first occupied square. The occupied square ends the ray and is
/// included only if it holds a piece of the opposite color.
pub(crate) fn ray_scan(
    board: &Board,
    origin: Square,
    color: Color,
    (row_step, col_step): Offset,
    out: &mut Destinations,
) {
    let mut current = origin;
    while let Some(next) = board.adjacent(current, row_step, col_step) {
        match board.piece_at(next) {
            None => out.push(next),
            Some(piece) => {
                if piece.color() != color {
                    out.push(next);
                }
                return;
            }
        }
        current = next;
    }
}

/// Sliding moves in each of the given directions.
pub(crate) fn slides(
    board: &Board,
    origin: Square,
    color: Color,
    directions: &[Offset],
    out: &mut Destinations,
) {
    for &direction in directions {
        ray_scan(board, origin, color, direction, out);
    }
}

/// Single step moves to each of the given offsets that are on the board and
/// not held by a piece of the same color.
pub(crate) fn steps(
    board: &Board,
    origin: Square,
    color: Color,
    offsets: &[Offset],
    out: &mut Destinations,
) {
    for &(row_offset, col_offset) in offsets {
        if let Some(target) = board.adjacent(origin, row_offset, col_offset) {
            let own_piece = board.piece_at(target).map_or(false, |p| p.color() == color);
            if !own_piece {
                out.push(target);
            }
        }
    }
}
