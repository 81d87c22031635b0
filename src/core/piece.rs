use std::fmt::Display;

use crate::core::alliance::Alliance;
use crate::core::board::Board;
use crate::core::moves::Move;
use crate::core::utils::{
    in_direction, is_eighth_column_exclusion, is_first_column_exclusion, offset_coordinate,
    EIGHTH_COLUMN, FIRST_COLUMN, NUM_TILES_PER_ROW, SECOND_COLUMN, SEVENTH_COLUMN,
};

/** Tables of offsets for pieces */
const BISHOP_OFFSETS: &[isize] = &[-9, -7, 7, 9];
const ROOK_OFFSETS: &[isize] = &[-8, -1, 1, 8];
const QUEEN_OFFSETS: &[isize] = &[-9, -8, -7, -1, 1, 7, 8, 9];
const KING_OFFSETS: &[isize] = QUEEN_OFFSETS;
const KNIGHT_OFFSETS: &[isize] = &[-17, -15, -10, -6, 6, 10, 15, 17];
/** push, jump, and the two diagonals; scaled by the alliance direction */
const PAWN_OFFSETS: &[isize] = &[8, 16, 7, 9];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /** Pieces a pawn may turn into, default first. */
    pub const PROMOTIONS: [PieceType; 4] = [
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
    ];

    pub fn letter(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    pub fn is_king(self) -> bool {
        self == PieceType::King
    }

    pub fn is_rook(self) -> bool {
        self == PieceType::Rook
    }

    pub fn is_pawn(self) -> bool {
        self == PieceType::Pawn
    }
}

impl Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceType,
    alliance: Alliance,
    position: usize,
    first_move: bool,
}

impl Piece {
    pub fn new(kind: PieceType, alliance: Alliance, position: usize) -> Piece {
        Piece::with_first_move(kind, alliance, position, true)
    }

    pub fn with_first_move(
        kind: PieceType,
        alliance: Alliance,
        position: usize,
        first_move: bool,
    ) -> Piece {
        Piece {
            kind,
            alliance,
            position,
            first_move,
        }
    }

    pub fn kind(&self) -> PieceType {
        self.kind
    }

    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_first_move(&self) -> bool {
        self.first_move
    }

    pub fn calculate_legal_moves(&self, board: &Board) -> Vec<Move> {
        match self.kind {
            PieceType::Pawn => self.pawn_moves(board),
            PieceType::Knight => self.stepping_moves(board, KNIGHT_OFFSETS, is_knight_exclusion),
            PieceType::King => self.stepping_moves(board, KING_OFFSETS, is_king_exclusion),
            PieceType::Bishop => self.sliding_moves(board, BISHOP_OFFSETS),
            PieceType::Rook => self.sliding_moves(board, ROOK_OFFSETS),
            PieceType::Queen => self.sliding_moves(board, QUEEN_OFFSETS),
        }
    }

    /**
     * Same piece standing on the move's destination, no longer unmoved.
     * Must not be given the null move: it has no destination.
     */
    pub fn move_piece(&self, _move: &Move) -> Piece {
        debug_assert!(
            _move.destination().is_some(),
            "move_piece called with the null move"
        );
        Piece {
            position: _move.destination().unwrap_or(self.position),
            first_move: false,
            ..*self
        }
    }

    fn sliding_moves(&self, board: &Board, offsets: &[isize]) -> Vec<Move> {
        let mut legal_moves = Vec::with_capacity(28);
        for &offset in offsets {
            for destination in in_direction(self.position, offset) {
                match board.tile(destination).piece() {
                    None => legal_moves.push(Move::MajorMove(*self, destination)),
                    Some(target) => {
                        if target.alliance != self.alliance {
                            legal_moves.push(Move::AttackMove(*self, destination, *target));
                        }
                        break;
                    }
                }
            }
        }
        legal_moves
    }

    fn stepping_moves(
        &self,
        board: &Board,
        offsets: &[isize],
        excluded: fn(usize, isize) -> bool,
    ) -> Vec<Move> {
        let mut legal_moves = Vec::with_capacity(8);
        for &offset in offsets {
            if excluded(self.position, offset) {
                continue;
            }
            let Some(destination) = offset_coordinate(self.position, offset) else {
                continue;
            };
            match board.tile(destination).piece() {
                None => legal_moves.push(Move::MajorMove(*self, destination)),
                Some(target) if target.alliance != self.alliance => {
                    legal_moves.push(Move::AttackMove(*self, destination, *target))
                }
                Some(_) => (),
            }
        }
        legal_moves
    }

    fn pawn_moves(&self, board: &Board) -> Vec<Move> {
        let mut legal_moves = Vec::with_capacity(4);
        let direction = self.alliance.direction();
        for &offset in PAWN_OFFSETS {
            let Some(destination) = offset_coordinate(self.position, direction * offset) else {
                continue;
            };
            let tile = board.tile(destination);
            if offset == 8 {
                if !tile.is_occupied() {
                    legal_moves.push(self.promote_if_due(Move::PawnMove(*self, destination)));
                }
            } else if offset == 16 {
                if !self.first_move || !self.alliance.is_pawn_start_square(self.position) {
                    continue;
                }
                let passed = offset_coordinate(self.position, direction * 8);
                let passed_empty = passed.map_or(false, |pos| !board.tile(pos).is_occupied());
                if passed_empty && !tile.is_occupied() {
                    legal_moves.push(Move::PawnJump(*self, destination));
                }
            } else if !self.is_diagonal_exclusion(offset) {
                match tile.piece() {
                    Some(target) if target.alliance != self.alliance => {
                        legal_moves.push(
                            self.promote_if_due(Move::PawnAttackMove(*self, destination, *target)),
                        );
                    }
                    Some(_) => (),
                    None => {
                        if let Some(pawn) = self.en_passant_target(board, destination) {
                            legal_moves.push(Move::PawnEnPassantAttack(*self, destination, pawn));
                        }
                    }
                }
            }
        }
        legal_moves
    }

    /** Enemy pawn that just jumped over `destination`, if any. */
    fn en_passant_target(&self, board: &Board, destination: usize) -> Option<Piece> {
        let pawn = board.en_passant_pawn()?;
        let behind = offset_coordinate(
            destination,
            self.alliance.opposite_direction() * NUM_TILES_PER_ROW as isize,
        )?;
        (pawn.kind.is_pawn() && pawn.alliance != self.alliance && pawn.position == behind)
            .then_some(*pawn)
    }

    fn is_diagonal_exclusion(&self, offset: isize) -> bool {
        let (white_edge, black_edge) = match offset {
            7 => (&EIGHTH_COLUMN, &FIRST_COLUMN),
            9 => (&FIRST_COLUMN, &EIGHTH_COLUMN),
            _ => return false,
        };
        self.alliance.choose_player(white_edge, black_edge)[self.position]
    }

    fn promote_if_due(&self, pawn_move: Move) -> Move {
        match pawn_move.destination() {
            Some(destination) if self.alliance.is_promotion_square(destination) => {
                Move::PawnPromotion(Box::new(pawn_move), PieceType::Queen)
            }
            _ => pawn_move,
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.alliance.letter_case(self.kind.letter()))
    }
}

fn is_king_exclusion(position: usize, offset: isize) -> bool {
    is_first_column_exclusion(position, offset) || is_eighth_column_exclusion(position, offset)
}

fn is_knight_exclusion(position: usize, offset: isize) -> bool {
    (FIRST_COLUMN[position] && matches!(offset, -17 | -10 | 6 | 15))
        || (SECOND_COLUMN[position] && matches!(offset, -10 | 6))
        || (SEVENTH_COLUMN[position] && matches!(offset, -6 | 10))
        || (EIGHTH_COLUMN[position] && matches!(offset, -15 | -6 | 10 | 17))
}
