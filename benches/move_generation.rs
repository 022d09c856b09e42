use criterion::{black_box, criterion_group, criterion_main, Criterion};

use draughts::core::{Piece, Player, Position};
use draughts::rules::Checkers;

fn midgame() -> Checkers {
    Checkers::from_position(
        [
            (Position::new(2, 1), Piece::Normal(Player::Red)),
            (Position::new(3, 4), Piece::Normal(Player::Red)),
            (Position::new(4, 1), Piece::King(Player::Red)),
            (Position::new(5, 2), Piece::Normal(Player::Black)),
            (Position::new(5, 6), Piece::Normal(Player::Black)),
            (Position::new(6, 3), Piece::King(Player::Black)),
        ],
        Player::Red,
    )
}

fn bench_legal_moves(c: &mut Criterion) {
    let opening = Checkers::new();
    let midgame = midgame();

    c.bench_function("legal_moves/opening", |b| b.iter(|| black_box(&opening).legal_moves()));
    c.bench_function("legal_moves/midgame", |b| b.iter(|| black_box(&midgame).legal_moves()));
}

fn bench_game_over(c: &mut Criterion) {
    let opening = Checkers::new();
    c.bench_function("is_game_over/opening", |b| b.iter(|| black_box(&opening).is_game_over()));
}

fn bench_attempt_move(c: &mut Criterion) {
    let opening = Checkers::new();
    c.bench_function("attempt_move/step", |b| {
        b.iter(|| {
            let mut game = opening.clone();
            game.attempt_move(black_box(Position::new(2, 1)), black_box(Position::new(3, 2)))
        })
    });
}

criterion_group!(benches, bench_legal_moves, bench_game_over, bench_attempt_move);
criterion_main!(benches);
