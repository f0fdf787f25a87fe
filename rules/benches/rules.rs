use criterion::{criterion_group, criterion_main, Criterion};

use termchess_rules::moves::san;
use termchess_rules::{Board, Captures, Color};

// A short Italian-game opening, enough to exercise candidate resolution,
// captures and castling on every iteration.
const OPENING: &[&str] = &[
    "e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5", "c3", "Nf6", "d4", "exd4", "cxd4", "Bb4", "Nc3",
    "Nxe4", "0-0",
];

fn play_opening() -> Board {
    let mut board = Board::initial();
    let mut captures = Captures::new();
    let mut color = Color::White;
    for (move_number, notation) in OPENING.iter().enumerate() {
        let mv = san::parse(color, notation).unwrap();
        board
            .make_move(&mv, &mut captures, move_number as u32)
            .unwrap();
        color = color.inv();
    }
    board
}

pub fn bench_make_move(c: &mut Criterion) {
    c.bench_function("opening", |b| b.iter(play_opening));
}

pub fn bench_queries(c: &mut Criterion) {
    let board = play_opening();
    c.bench_function("is_in_check", |b| {
        b.iter(|| (board.is_in_check(Color::White), board.is_in_check(Color::Black)))
    });
    c.bench_function("weak_coords", |b| b.iter(|| board.weak_coords(Color::White)));
}

criterion_group!(benches, bench_make_move, bench_queries);
criterion_main!(benches);
