use rand::seq::IteratorRandom;
use rand::Rng;

use crate::core::board::Board;
use crate::core::moves::Move;

// Hooks for search code; the rules engine itself never calls them.
pub trait BoardEvaluator {
    fn evaluate(&self, board: &Board, depth: u32) -> i32;
}

impl<F> BoardEvaluator for F
where
    F: Fn(&Board, u32) -> i32,
{
    fn evaluate(&self, board: &Board, depth: u32) -> i32 {
        self(board, depth)
    }
}

pub trait MoveStrategy {
    fn execute(&mut self, board: &Board) -> Move;
}

/** Picks uniformly among the moves that don't leave the mover in check. */
#[derive(Debug)]
pub struct RandomMove<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomMove<R> {
    pub fn new(rng: R) -> Self {
        RandomMove { rng }
    }
}

impl<R: Rng> MoveStrategy for RandomMove<R> {
    fn execute(&mut self, board: &Board) -> Move {
        let player = board.current_player();
        player
            .legal_moves()
            .iter()
            .filter(|_move| {
                player
                    .make_move(_move)
                    .map_or(false, |transition| transition.status().is_done())
            })
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or(Move::NullMove)
    }
}
