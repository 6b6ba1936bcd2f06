//! Performance Test
//!
//! [Perft](https://www.chessprogramming.org/Perft)
//!
//! A simple debugging and testing function used to count
//! the number of nodes at a specific depth.
//! Move generation here is pseudo-legal, so counts match published legal
//! perft results only at depths where no king can be left in check.

use std::ops::{Add, AddAssign};
use std::sync::{Arc, Mutex};
use std::thread;

use crate::game::Game;
use crate::movelist::MoveList;

/// Debugging information about results of perft test.
/// nodes: Number of nodes at lowest depth of perft.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PerftInfo {
    pub nodes: u64,
}

impl PerftInfo {
    fn new(nodes: u64) -> Self {
        PerftInfo { nodes }
    }
}

impl Add for PerftInfo {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        PerftInfo {
            nodes: self.nodes + rhs.nodes,
        }
    }
}

impl AddAssign for PerftInfo {
    fn add_assign(&mut self, rhs: Self) {
        self.nodes += rhs.nodes;
    }
}

// Count the number of nodes at a certain depth.
// This ignores higher terminal nodes.
// In other words, it counts the number of paths to the given depth.
pub fn perft(game: &Game, ply: u8, threads: usize) -> PerftInfo {
    // Guard easy to calculate inputs.
    if ply == 0 {
        return PerftInfo::new(1);
    } else if ply <= 2 || threads <= 1 {
        return perft_recurse(game, ply);
    }

    let moves = game.moves();
    if moves.is_empty() {
        return PerftInfo::new(0);
    }

    let moves = Arc::new(Mutex::new(moves));
    let total_perft_info = Arc::new(Mutex::new(PerftInfo::new(0)));
    let mut handles = Vec::new();

    for _ in 0..threads {
        let game = game.clone();
        let moves = Arc::clone(&moves);
        let total_perft_info = Arc::clone(&total_perft_info);

        handles.push(thread::spawn(move || {
            perft_executor(game, ply, moves, total_perft_info);
        }));
    }

    let mut joined = true;
    for handle in handles {
        joined &= handle.join().is_ok();
    }
    debug_assert!(joined, "perft worker panicked");

    let total = total_perft_info.lock().map(|info| *info);
    total.unwrap_or_else(|poisoned| *poisoned.into_inner())
}

/// perft_executor steals one move at a time from the shared list and runs perft on it.
/// When there are no moves left to steal, this function adds what it has
/// collected to the total and returns.
fn perft_executor(
    game: Game,
    ply: u8,
    moves: Arc<Mutex<MoveList>>,
    total_perft_info: Arc<Mutex<PerftInfo>>,
) {
    debug_assert!(ply > 1);
    let mut perft_info = PerftInfo::new(0);
    let next_move = || moves.lock().ok().and_then(|mut moves| moves.pop());

    while let Some(move_) = next_move() {
        let mut child = game.clone();
        if child.make_move(move_).is_ok() {
            perft_info += perft_recurse(&child, ply - 1);
        }
    }

    if let Ok(mut total) = total_perft_info.lock() {
        *total += perft_info;
    }
}

/// Ply must be non-zero.
fn perft_recurse(game: &Game, ply: u8) -> PerftInfo {
    debug_assert_ne!(ply, 0);
    let moves = game.moves();
    if ply == 1 {
        return PerftInfo::new(moves.len() as u64);
    }

    let mut perft_info = PerftInfo::new(0);
    for move_ in moves {
        let mut child = game.clone();
        if child.make_move(move_).is_ok() {
            perft_info += perft_recurse(&child, ply - 1);
        }
    }
    perft_info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_shallow() {
        let game = Game::new();
        assert_eq!(perft(&game, 0, 1).nodes, 1);
        assert_eq!(perft(&game, 1, 1).nodes, 20);
        assert_eq!(perft(&game, 2, 1).nodes, 400);
    }
}
