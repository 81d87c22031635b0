use std::{fmt::Display, ops::AddAssign};

use crate::core::board::Board;
use crate::core::moves::Move;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PerftResult {
    pub all: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftResult {
    pub fn combine(self, other: PerftResult) -> Self {
        PerftResult {
            all: self.all + other.all,
            captures: self.captures + other.captures,
            en_passant: self.en_passant + other.en_passant,
            castles: self.castles + other.castles,
            promotions: self.promotions + other.promotions,
            checks: self.checks + other.checks,
            checkmates: self.checkmates + other.checkmates,
        }
    }
}

impl AddAssign for PerftResult {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.combine(rhs);
    }
}

impl Display for PerftResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - cp: {:<4} ep: {:<4} cs: {:<4} pr: {:<4} Ch: {:<4} CM: {:4}",
            self.all,
            self.captures,
            self.en_passant,
            self.castles,
            self.promotions,
            self.checks,
            self.checkmates
        )
    }
}

/** Counts one completed move, `next` being the board it produced. */
fn count_perft_move(_move: &Move, next: &Board) -> PerftResult {
    let opponent = next.current_player();
    let checks = usize::from(opponent.is_in_check());
    PerftResult {
        all: 1,
        captures: usize::from(_move.is_attack()),
        en_passant: usize::from(_move.is_en_passant()),
        castles: usize::from(_move.is_castling_move()),
        promotions: usize::from(_move.is_promotion()),
        checks,
        checkmates: usize::from(checks == 1 && !opponent.has_escape_moves()),
    }
}

/** Walks every sequence of `depth` moves that don't leave the mover in check. */
pub fn perft(board: &Board, depth: usize) -> PerftResult {
    if depth == 0 {
        return PerftResult {
            all: 1,
            ..Default::default()
        };
    }
    let player = board.current_player();
    let mut result = PerftResult::default();
    for _move in player.legal_moves() {
        let transition = match player.make_move(_move) {
            Ok(transition) if transition.status().is_done() => transition,
            _ => continue,
        };
        result += if depth == 1 {
            count_perft_move(_move, transition.board())
        } else {
            perft(transition.board(), depth - 1)
        };
    }
    result
}

/** Runs perft from the standard setup; `detailed` prints the count below every first move. */
pub fn perf_test(depth: usize, expected: usize, detailed: bool) -> bool {
    let board = Board::create_standard_board();
    #[cfg(test)]
    println!(" - setup: standard | depth: {depth} detailed: {detailed}");
    if detailed && depth > 0 {
        let player = board.current_player();
        let mut total = PerftResult::default();
        for _move in player.legal_moves() {
            let Ok(transition) = player.make_move(_move) else {
                continue;
            };
            if !transition.status().is_done() {
                continue;
            }
            let result = if depth == 1 {
                count_perft_move(_move, transition.board())
            } else {
                perft(transition.board(), depth - 1)
            };
            println!(" {_move} : {result}");
            total += result;
        }
        println!("+ total: {total}");
        total.all == expected
    } else {
        let result = perft(&board, depth);
        #[cfg(test)]
        println!(" details: {result}");
        result.all == expected
    }
}
