use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gambit_rules::playout::seeded_playout;
use gambit_rules::*;

pub fn criterion_movegen_benchmark(c: &mut Criterion) {
    // Setup
    let starting_game = Game::new();
    let mut middlegame = Game::new();
    middlegame
        .initialize_from_notation("e4 e5 Nf3 Nc6 Bc4 Bc5 d3 Nf6 Nc3 d6 Bg5 h6")
        .unwrap();

    // Benchmarks

    c.bench_function("start_position: moves", |b| {
        b.iter(|| black_box(&starting_game).moves())
    });

    c.bench_function("middlegame: moves", |b| {
        b.iter(|| black_box(&middlegame).moves())
    });

    c.bench_function("middlegame: notation of all moves", |b| {
        b.iter(|| {
            let game = black_box(&middlegame);
            game.moves()
                .into_iter()
                .filter_map(|move_| game.notation(move_))
                .count()
        })
    });

    c.bench_function("replay: 12 plies", |b| {
        let mut game = Game::new();
        b.iter(|| {
            game.initialize_from_notation(black_box(
                "e4 e5 Nf3 Nc6 Bc4 Bc5 d3 Nf6 Nc3 d6 Bg5 h6",
            ))
        })
    });

    c.bench_function("playout: 100 plies", |b| {
        b.iter(|| {
            let mut game = Game::new();
            seeded_playout(&mut game, 100, black_box(42)).len()
        })
    });
}

criterion_group! {
    name = movegen_benches;
    config = Criterion::default().without_plots();
    targets = criterion_movegen_benchmark
}
criterion_main!(movegen_benches);
