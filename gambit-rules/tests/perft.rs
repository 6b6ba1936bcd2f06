//! Performance Test (perft)
//!
//! Tests to ensure move generation matches pre-determined node counts.
//! [Perft Results](https://www.chessprogramming.org/Perft_Results)
//!
//! Only depths where no king can be left in check are compared, since move
//! generation does not filter out moves that leave the mover in check.

use std::thread::available_parallelism;

use gambit_rules::perft::*;
use gambit_rules::*;

const ONE_THREAD: usize = 1;

fn cpu_threads() -> usize {
    available_parallelism()
        .map(|inner| inner.get())
        .unwrap_or(1)
}

/// Run single and multithreaded perft `expected_nodes.len()` times.
/// The index of each expected_node value is its ply.
fn perft_tester(game: &Game, expected_nodes: Vec<u64>) {
    for (ply, expected_node) in expected_nodes.into_iter().enumerate() {
        let single_thread_result = perft(game, ply as u8, ONE_THREAD);
        let multi_thread_result = perft(game, ply as u8, cpu_threads().max(2));

        println!("perft({ply}): {single_thread_result:?}");
        assert_eq!(single_thread_result.nodes, expected_node);
        assert_eq!(single_thread_result, multi_thread_result);
    }
}

#[test]
fn perft_starting_position() {
    perft_tester(&Game::new(), vec![1, 20, 400, 8_902]);
}

#[test]
fn perft_after_replay_matches_fresh_game() {
    let mut game = Game::new();
    game.initialize_from_notation("Nf3 Nf6 Ng1 Ng8").unwrap();
    // Knights moved out and back, leaving the start position again.
    assert_eq!(perft(&game, 1, ONE_THREAD).nodes, 20);
    assert_eq!(perft(&game, 2, ONE_THREAD).nodes, 400);
}

#[test]
fn perft_does_not_change_game() {
    let mut game = Game::new();
    game.initialize_from_notation("e4 e5").unwrap();
    let before = game.clone();
    perft(&game, 3, cpu_threads().max(2));
    assert_eq!(game, before);
}
