use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_ttt::core::Board;
use rust_ttt::games::tictactoe::{initial_state, minimax, TicTacToe};
use rust_ttt::search::{play_out, MinimaxPolicy, SearchConfig};

fn bench_single_move_empty_board() {
    black_box(minimax(black_box(&initial_state())));
}

fn bench_single_move_mid_game() {
    let board: Board = "X../.O./..X".parse().unwrap();
    black_box(minimax(black_box(&board)));
}

fn bench_perfect_self_play() {
    let mut x = MinimaxPolicy::new(TicTacToe, SearchConfig::default());
    let mut o = MinimaxPolicy::new(TicTacToe, SearchConfig::default());
    black_box(play_out(&TicTacToe, initial_state(), &mut x, &mut o));
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.sample_size(10);

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.bench_function("perfect_self_play", |b| {
        b.iter(bench_perfect_self_play)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
