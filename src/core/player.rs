use std::borrow::Cow;

use log::debug;

use crate::core::alliance::Alliance;
use crate::core::board::Board;
use crate::core::definitions::{EngineError, GameState};
use crate::core::moves::{CastlingSide, Move};
use crate::core::piece::Piece;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveStatus {
    Done,
    IllegalMove,
    LeavesPlayerInCheck,
}

impl MoveStatus {
    pub fn is_done(self) -> bool {
        self == MoveStatus::Done
    }
}

/** Outcome of [`Player::make_move`]; on failure `board` is the unchanged current board. */
#[derive(Debug, Clone)]
pub struct MoveTransition<'a> {
    board: Cow<'a, Board>,
    _move: Move,
    status: MoveStatus,
}

impl<'a> MoveTransition<'a> {
    fn new(board: Cow<'a, Board>, _move: Move, status: MoveStatus) -> Self {
        MoveTransition {
            board,
            _move,
            status,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board.into_owned()
    }

    pub fn move_made(&self) -> &Move {
        &self._move
    }

    pub fn status(&self) -> MoveStatus {
        self.status
    }
}

/** Per-side data computed once while the board is built. */
#[derive(Debug, Clone)]
pub(crate) struct PlayerState {
    king: Piece,
    standard_moves: Vec<Move>,
    /** standard moves followed by castles */
    pub(crate) legal_moves: Vec<Move>,
    in_check: bool,
}

impl PlayerState {
    pub(crate) fn new(
        board: &Board,
        alliance: Alliance,
        standard_moves: Vec<Move>,
        opponent_moves: &[Move],
    ) -> Result<PlayerState, EngineError> {
        let king = board
            .active_pieces(alliance)
            .iter()
            .find(|piece| piece.kind().is_king())
            .copied()
            .ok_or(EngineError::MissingKing(alliance))?;
        let in_check = !calculate_attacks_on_tile(king.position(), opponent_moves).is_empty();
        let mut legal_moves = standard_moves.clone();
        legal_moves.extend(calculate_king_castles(board, &king, in_check, opponent_moves));
        Ok(PlayerState {
            king,
            standard_moves,
            legal_moves,
            in_check,
        })
    }
}

/** One side of a board. Borrowed from the board, so it lives no longer than it. */
#[derive(Debug, Clone, Copy)]
pub struct Player<'a> {
    board: &'a Board,
    alliance: Alliance,
    state: &'a PlayerState,
}

impl<'a> Player<'a> {
    pub(crate) fn new(board: &'a Board, alliance: Alliance, state: &'a PlayerState) -> Self {
        Player {
            board,
            alliance,
            state,
        }
    }

    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    pub fn king(&self) -> &'a Piece {
        &self.state.king
    }

    pub fn active_pieces(&self) -> &'a [Piece] {
        self.board.active_pieces(self.alliance)
    }

    pub fn opponent(&self) -> Player<'a> {
        self.board.player(self.alliance.opponent())
    }

    pub fn legal_moves(&self) -> &'a [Move] {
        &self.state.legal_moves
    }

    /** Legal moves without castles; these are what the opponent checks attacks against. */
    pub fn standard_moves(&self) -> &'a [Move] {
        &self.state.standard_moves
    }

    pub fn is_in_check(&self) -> bool {
        self.state.in_check
    }

    pub fn is_in_checkmate(&self) -> bool {
        self.is_in_check() && !self.has_escape_moves()
    }

    pub fn is_in_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_escape_moves()
    }

    /** True when some legal move completes without leaving the king attacked. */
    pub fn has_escape_moves(&self) -> bool {
        self.legal_moves().iter().any(|_move| {
            self.make_move(_move)
                .map_or(false, |transition| transition.status().is_done())
        })
    }

    pub fn is_move_legal(&self, _move: &Move) -> bool {
        self.legal_moves().contains(_move)
    }

    pub fn make_move(&self, _move: &Move) -> Result<MoveTransition<'a>, EngineError> {
        if !self.is_move_legal(_move) {
            debug!("{} rejected: not a legal move for {}", _move, self.alliance);
            return Ok(MoveTransition::new(
                Cow::Borrowed(self.board),
                _move.clone(),
                MoveStatus::IllegalMove,
            ));
        }
        let transition_board = _move.execute(self.board)?;
        let king_position = transition_board.player(self.alliance).king().position();
        let king_attacked = !calculate_attacks_on_tile(
            king_position,
            transition_board.current_player().legal_moves(),
        )
        .is_empty();
        if king_attacked {
            debug!("{} rejected: leaves {} in check", _move, self.alliance);
            return Ok(MoveTransition::new(
                Cow::Borrowed(self.board),
                _move.clone(),
                MoveStatus::LeavesPlayerInCheck,
            ));
        }
        debug!("{} by {} done", _move, self.alliance);
        Ok(MoveTransition::new(
            Cow::Owned(transition_board),
            _move.clone(),
            MoveStatus::Done,
        ))
    }

    pub fn calculate_king_castles(&self, opponent_legals: &[Move]) -> Vec<Move> {
        calculate_king_castles(self.board, self.king(), self.is_in_check(), opponent_legals)
    }

    pub fn state(&self) -> GameState {
        if self.is_in_checkmate() {
            GameState::Checkmate(self.alliance)
        } else if self.is_in_stalemate() {
            GameState::Stalemate(self.alliance)
        } else if self.is_in_check() {
            GameState::InCheck(self.alliance)
        } else {
            GameState::Normal(self.alliance)
        }
    }
}

pub fn calculate_attacks_on_tile(position: usize, moves: &[Move]) -> Vec<&Move> {
    moves
        .iter()
        .filter(|_move| _move.destination() == Some(position))
        .collect()
}

struct CastleLayout {
    side: CastlingSide,
    king_home: usize,
    rook_home: usize,
    /** must be empty */
    between: &'static [usize],
    /** must not be reached by any opponent move */
    guarded: &'static [usize],
    king_destination: usize,
    rook_destination: usize,
}

#[rustfmt::skip]
const WHITE_CASTLES: [CastleLayout; 2] = [
    CastleLayout { side: CastlingSide::KingSide, king_home: 60, rook_home: 63,
        between: &[61, 62], guarded: &[61, 62], king_destination: 62, rook_destination: 61 },
    CastleLayout { side: CastlingSide::QueenSide, king_home: 60, rook_home: 56,
        between: &[57, 58, 59], guarded: &[58, 59], king_destination: 58, rook_destination: 59 },
];

#[rustfmt::skip]
const BLACK_CASTLES: [CastleLayout; 2] = [
    CastleLayout { side: CastlingSide::KingSide, king_home: 4, rook_home: 7,
        between: &[5, 6], guarded: &[5, 6], king_destination: 6, rook_destination: 5 },
    CastleLayout { side: CastlingSide::QueenSide, king_home: 4, rook_home: 0,
        between: &[1, 2, 3], guarded: &[2, 3], king_destination: 2, rook_destination: 3 },
];

fn calculate_king_castles(
    board: &Board,
    king: &Piece,
    in_check: bool,
    opponent_legals: &[Move],
) -> Vec<Move> {
    let layouts = king
        .alliance()
        .choose_player(&WHITE_CASTLES, &BLACK_CASTLES);
    let mut castles = Vec::with_capacity(2);
    for layout in layouts {
        if in_check || !king.is_first_move() || king.position() != layout.king_home {
            break;
        }
        let Some(rook) = board.tile(layout.rook_home).piece() else {
            continue;
        };
        let rook_ready = rook.kind().is_rook()
            && rook.alliance() == king.alliance()
            && rook.is_first_move();
        let path_clear = layout
            .between
            .iter()
            .all(|&pos| !board.tile(pos).is_occupied());
        let path_safe = layout
            .guarded
            .iter()
            .all(|&pos| calculate_attacks_on_tile(pos, opponent_legals).is_empty());
        if rook_ready && path_clear && path_safe {
            castles.push(Move::Castle(
                *king,
                layout.side,
                layout.king_destination,
                *rook,
                layout.rook_destination,
            ));
        }
    }
    castles
}
