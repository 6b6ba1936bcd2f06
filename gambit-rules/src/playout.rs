//! Random playouts: games played by picking uniformly among pseudo-legal moves.

use rand::prelude::*;

use crate::coretypes::MoveInfo;
use crate::game::Game;

/// Plays up to `plies` random moves on `game`, returning them in play order.
/// Stops early when the active player has no moves.
pub fn random_playout<R: Rng + ?Sized>(game: &mut Game, plies: usize, rng: &mut R) -> Vec<MoveInfo> {
    let mut played = Vec::with_capacity(plies);
    for _ in 0..plies {
        let moves = game.moves();
        let move_ = match moves.choose(rng) {
            Some(&move_) => move_,
            None => break,
        };
        match game.make_move(move_) {
            Ok(info) => played.push(info),
            Err(_) => break,
        }
    }
    played
}

/// Random playout from a seed, so the same seed always plays the same game.
pub fn seeded_playout(game: &mut Game, plies: usize, seed: u64) -> Vec<MoveInfo> {
    random_playout(game, plies, &mut StdRng::seed_from_u64(seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::Color;

    #[test]
    fn same_seed_same_game() {
        let mut first = Game::new();
        let mut second = Game::new();
        let a = seeded_playout(&mut first, 40, 7);
        let b = seeded_playout(&mut second, 40, 7);
        assert_eq!(a, b);
        assert_eq!(first, second);
    }

    #[test]
    fn colors_alternate() {
        let mut game = Game::new();
        let played = seeded_playout(&mut game, 30, 11);
        for (ply, info) in played.iter().enumerate() {
            let expected = if ply % 2 == 0 { Color::White } else { Color::Black };
            assert_eq!(info.color(), expected);
            assert_eq!(info.turn() as usize, ply / 2 + 1);
        }
    }
}
