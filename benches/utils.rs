use chess_rules::utils::perft;
use chess_rules::{Board, Game, Piece, PieceType};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

fn type_to_value(_type: PieceType) -> u64 {
    match _type {
        PieceType::Pawn => 100,
        PieceType::Knight => 325,
        PieceType::Bishop => 350,
        PieceType::Rook => 500,
        PieceType::Queen => 900,
        PieceType::King => 0,
    }
}

fn tile_count(board: &Board) -> u64 {
    board
        .tiles()
        .iter()
        .filter_map(|tile| tile.piece())
        .map(|piece| type_to_value(piece.kind()))
        .sum()
}

fn active_pieces_count(board: &Board) -> u64 {
    board
        .white_pieces()
        .iter()
        .chain(board.black_pieces())
        .map(|piece: &Piece| type_to_value(piece.kind()))
        .sum()
}

fn stupid_game(mut game: Game, max_steps: usize, seed: u64) -> Game {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..max_steps {
        if !matches!(game.make_random_move(&mut rng), Ok(Some(_))) {
            break;
        }
    }
    game
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("standard board", |b| b.iter(Board::create_standard_board));
    c.bench_function("tile count", |b| b.iter(|| tile_count(black_box(&Board::default()))));
    c.bench_function("active pieces count", |b| {
        b.iter(|| active_pieces_count(black_box(&Board::default())))
    });
    c.bench_function("perft 2", |b| b.iter(|| perft(black_box(&Board::default()), 2)));
    c.bench_function("stupid game 100", |b| {
        b.iter(|| {
            let game: Game = Default::default();
            stupid_game(game, 100, 42)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
