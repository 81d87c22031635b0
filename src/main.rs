use std::env;

use anyhow::{Context, Result};
use chess_rules::{Board, Game, MoveStatus};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

const DEFAULT_MAX_PLIES: usize = 200;

fn main() -> Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let args: Vec<String> = env::args().collect();
    let max_plies: usize = match args.get(1) {
        Some(arg) => arg.parse().context("max_plies must be a number")?,
        None => DEFAULT_MAX_PLIES,
    };
    let mut rng = match args.get(2) {
        Some(arg) => StdRng::seed_from_u64(arg.parse().context("seed must be a number")?),
        None => StdRng::from_entropy(),
    };

    let mut game = Game::with_board(Board::create_standard_board());
    println!("{}", game.board());
    for ply in 0..max_plies {
        match game.make_random_move(&mut rng)? {
            Some(MoveStatus::Done) => {
                if let Some(_move) = game.last_move() {
                    info!("{:>3}. {}", ply + 1, _move);
                }
            }
            Some(status) => info!("move refused: {status:?}"),
            None => break,
        }
    }
    println!("{}", game.board());
    println!("{:?} after {} moves", game.state(), game.move_log().len());
    Ok(())
}
