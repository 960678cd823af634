use criterion::{black_box, criterion_group, criterion_main, Criterion};
use teeko::core::{Board, GameSession, WinDetector};
use teeko::types::{CellState, GameAction, Player, Position};

fn bench_win_check(c: &mut Criterion) {
    let mut board = Board::new();
    for (x, y) in [(0, 0), (2, 1), (4, 2), (1, 4)] {
        board.set(Position::new(x, y), CellState::PlayerA);
    }

    c.bench_function("win_evaluate_no_win", |b| {
        b.iter(|| WinDetector::evaluate(black_box(&board), Player::A))
    });
}

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::default();
    session.new_game();

    c.bench_function("session_tick_10ms", |b| {
        b.iter(|| session.tick(black_box(10)))
    });
}

fn bench_move(c: &mut Criterion) {
    let mut session = GameSession::default();
    session.new_game();

    c.bench_function("cursor_move", |b| {
        b.iter(|| session.apply_action(black_box(GameAction::MoveRight)))
    });
}

fn bench_drop_round(c: &mut Criterion) {
    c.bench_function("eight_drops", |b| {
        b.iter(|| {
            let mut session = GameSession::default();
            for _ in 0..8 {
                session.apply_action(GameAction::Select);
                session.apply_action(GameAction::MoveRight);
                session.apply_action(GameAction::MoveUp);
            }
            session
        })
    });
}

fn bench_new_game(c: &mut Criterion) {
    let mut session = GameSession::default();
    c.bench_function("new_game", |b| b.iter(|| session.new_game()));
}

criterion_group!(
    benches,
    bench_win_check,
    bench_tick,
    bench_move,
    bench_drop_round,
    bench_new_game
);
criterion_main!(benches);
