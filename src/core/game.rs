use log::warn;
use rand::Rng;

use crate::core::algorithms::{MoveStrategy, RandomMove};
use crate::core::alliance::Alliance;
use crate::core::board::Board;
use crate::core::definitions::{EngineError, GameState};
use crate::core::moves::Move;
use crate::core::piece::Piece;
use crate::core::player::{MoveStatus, Player};

/** Moves executed so far, oldest first. */
#[derive(Debug, Clone, Default)]
pub struct MoveLog {
    moves: Vec<Move>,
}

impl MoveLog {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_move(&mut self, _move: Move) {
        self.moves.push(_move);
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn remove_move_at(&mut self, index: usize) -> Option<Move> {
        (index < self.moves.len()).then(|| self.moves.remove(index))
    }

    /** Removes the first logged move equal to `_move`. */
    pub fn remove_move(&mut self, _move: &Move) -> bool {
        match self.moves.iter().position(|logged| logged == _move) {
            Some(index) => {
                self.moves.remove(index);
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    move_log: MoveLog,
}

impl Game {
    pub fn new() -> Game {
        Game::with_board(Board::create_standard_board())
    }

    pub fn with_board(board: Board) -> Game {
        Game {
            board,
            move_log: MoveLog::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn move_log(&self) -> &MoveLog {
        &self.move_log
    }

    pub fn current_player(&self) -> Player<'_> {
        self.board.current_player()
    }

    pub fn state(&self) -> GameState {
        self.current_player().state()
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.moves().last()
    }

    /** Moves of the side to move starting on `from` that complete without self-check. */
    pub fn possible_moves(&self, from: usize) -> Vec<&Move> {
        let player = self.current_player();
        player
            .legal_moves()
            .iter()
            .filter(|_move| _move.current_coordinate() == Some(from))
            .filter(|_move| {
                player
                    .make_move(_move)
                    .map_or(false, |transition| transition.status().is_done())
            })
            .collect()
    }

    pub fn execute(&mut self, from: usize, to: usize) -> Result<MoveStatus, EngineError> {
        let _move = Move::create_move(&self.board, from, to);
        self.execute_move(_move)
    }

    pub fn execute_move(&mut self, _move: Move) -> Result<MoveStatus, EngineError> {
        let (status, next_board) = {
            let transition = self.board.current_player().make_move(&_move)?;
            let status = transition.status();
            (status, status.is_done().then(|| transition.into_board()))
        };
        match next_board {
            Some(board) => {
                self.board = board;
                self.move_log.add_move(_move);
            }
            None => warn!("{} refused: {:?}", _move, status),
        }
        Ok(status)
    }

    /** Asks `strategy` for a move and plays it; `None` once the game is over. */
    pub fn play<S: MoveStrategy>(
        &mut self,
        strategy: &mut S,
    ) -> Result<Option<MoveStatus>, EngineError> {
        if self.state().is_finished() {
            return Ok(None);
        }
        let _move = strategy.execute(&self.board);
        self.execute_move(_move).map(Some)
    }

    pub fn make_random_move<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<MoveStatus>, EngineError> {
        self.play(&mut RandomMove::new(rng))
    }

    /** Pieces of `alliance` captured so far, in the order they fell. */
    pub fn taken_pieces(&self, alliance: Alliance) -> Vec<Piece> {
        self.move_log
            .moves()
            .iter()
            .filter_map(Move::attacked_piece)
            .filter(|piece| piece.alliance() == alliance)
            .copied()
            .collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
