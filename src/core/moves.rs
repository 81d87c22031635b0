use std::fmt::Display;
use std::hash::{Hash, Hasher};

use log::trace;

use crate::core::board::{Board, Builder};
use crate::core::definitions::EngineError;
use crate::core::piece::{Piece, PieceType};
use crate::core::utils::pos_to_str;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

#[derive(Clone, Debug)]
pub enum Move {
    /** returned when no legal move matches a lookup, can't be executed */
    NullMove,
    /** who is moving, where it's moving */
    MajorMove(Piece, usize),
    /** who is capturing, where it lands, whom is being captured */
    AttackMove(Piece, usize, Piece),
    /** pawn, where it's moving */
    PawnMove(Piece, usize),
    /** pawn, where it lands, whom is being captured */
    PawnAttackMove(Piece, usize, Piece),
    /** pawn, where it lands after two rows */
    PawnJump(Piece, usize),
    /** pawn, square behind the jumped pawn, the jumped pawn */
    PawnEnPassantAttack(Piece, usize, Piece),
    /** underlying pawn move or attack, to whom we are promoting */
    PawnPromotion(Box<Move>, PieceType),
    /** king, which side, king's destination, rook, rook's destination */
    Castle(Piece, CastlingSide, usize, Piece, usize),
}

impl Move {
    /** First legal move on `board` going from `from` to `to`, or [`Move::NullMove`]. */
    pub fn create_move(board: &Board, from: usize, to: usize) -> Move {
        board
            .all_legal_moves()
            .find(|_move| {
                _move.current_coordinate() == Some(from) && _move.destination() == Some(to)
            })
            .cloned()
            .unwrap_or(Move::NullMove)
    }

    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Move::MajorMove(piece, _)
            | Move::AttackMove(piece, _, _)
            | Move::PawnMove(piece, _)
            | Move::PawnAttackMove(piece, _, _)
            | Move::PawnJump(piece, _)
            | Move::PawnEnPassantAttack(piece, _, _)
            | Move::Castle(piece, _, _, _, _) => Some(piece),
            Move::PawnPromotion(inner, _) => inner.piece(),
            Move::NullMove => None,
        }
    }

    pub fn current_coordinate(&self) -> Option<usize> {
        self.piece().map(Piece::position)
    }

    pub fn destination(&self) -> Option<usize> {
        match self {
            Move::MajorMove(_, pos)
            | Move::AttackMove(_, pos, _)
            | Move::PawnMove(_, pos)
            | Move::PawnAttackMove(_, pos, _)
            | Move::PawnJump(_, pos)
            | Move::PawnEnPassantAttack(_, pos, _)
            | Move::Castle(_, _, pos, _, _) => Some(*pos),
            Move::PawnPromotion(inner, _) => inner.destination(),
            Move::NullMove => None,
        }
    }

    pub fn attacked_piece(&self) -> Option<&Piece> {
        match self {
            Move::AttackMove(_, _, target)
            | Move::PawnAttackMove(_, _, target)
            | Move::PawnEnPassantAttack(_, _, target) => Some(target),
            Move::PawnPromotion(inner, _) => inner.attacked_piece(),
            _ => None,
        }
    }

    pub fn is_attack(&self) -> bool {
        self.attacked_piece().is_some()
    }

    pub fn is_castling_move(&self) -> bool {
        matches!(self, Move::Castle(..))
    }

    pub fn is_promotion(&self) -> bool {
        matches!(self, Move::PawnPromotion(..))
    }

    pub fn is_en_passant(&self) -> bool {
        match self {
            Move::PawnEnPassantAttack(..) => true,
            Move::PawnPromotion(inner, _) => inner.is_en_passant(),
            _ => false,
        }
    }

    pub fn promotion_type(&self) -> Option<PieceType> {
        match self {
            Move::PawnPromotion(_, kind) => Some(*kind),
            _ => None,
        }
    }

    /** Chooses the promotion piece; only Knight, Bishop, Rook and Queen are accepted. */
    pub fn set_promotion_type(&mut self, promotion: PieceType) -> Result<(), EngineError> {
        let Move::PawnPromotion(_, kind) = self else {
            return Err(EngineError::NotAPromotion);
        };
        if !PieceType::PROMOTIONS.contains(&promotion) {
            return Err(EngineError::InvalidPromotionPiece(promotion));
        }
        *kind = promotion;
        Ok(())
    }

    /** Builds the board that follows this move; `board` itself is left untouched. */
    pub fn execute(&self, board: &Board) -> Result<Board, EngineError> {
        let mut builder = self.transition_builder(board)?;
        builder.set_transition_move(self.clone());
        builder.build()
    }

    fn transition_builder(&self, board: &Board) -> Result<Builder, EngineError> {
        let Some(moved) = self.piece().copied() else {
            return Err(EngineError::NullMoveExecution);
        };
        if let Move::PawnPromotion(inner, kind) = self {
            let mut builder = inner.transition_builder(board)?;
            let destination = inner.destination().unwrap_or(moved.position());
            trace!("Promoting {} on {} to {}", moved, pos_to_str(destination), kind);
            builder.set_piece(Piece::with_first_move(
                *kind,
                moved.alliance(),
                destination,
                false,
            ));
            return Ok(builder);
        }

        let alliance = moved.alliance();
        let castle_rook = match self {
            Move::Castle(_, _, _, rook, _) => Some(rook.position()),
            _ => None,
        };
        let captured = self.attacked_piece().map(Piece::position);

        let mut builder = Builder::new();
        for piece in board.active_pieces(alliance) {
            if piece.position() != moved.position() && Some(piece.position()) != castle_rook {
                builder.set_piece(*piece);
            }
        }
        for piece in board.active_pieces(alliance.opponent()) {
            if Some(piece.position()) != captured {
                builder.set_piece(*piece);
            }
        }

        let moved_piece = moved.move_piece(self);
        builder.set_piece(moved_piece);
        match self {
            Move::PawnJump(..) => {
                builder.set_en_passant_pawn(moved_piece);
            }
            Move::Castle(_, _, _, rook, rook_destination) => {
                builder.set_piece(Piece::with_first_move(
                    rook.kind(),
                    rook.alliance(),
                    *rook_destination,
                    false,
                ));
            }
            _ => (),
        }
        builder.set_move_maker(alliance.opponent());
        trace!("Executing {} ({} to move next)", self, alliance.opponent());
        Ok(builder)
    }
}

/** Moves are equal by piece, destination and captured piece; the promotion choice is ignored. */
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.piece() == other.piece()
            && self.destination() == other.destination()
            && self.attacked_piece() == other.attacked_piece()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.piece().hash(state);
        self.destination().hash(state);
        self.attacked_piece().hash(state);
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::NullMove => write!(f, "Null Move"),
            Move::MajorMove(piece, pos) => {
                write!(f, "{}{}", piece.kind().letter(), pos_to_str(*pos))
            }
            Move::AttackMove(piece, pos, _) => {
                write!(f, "{}x{}", piece.kind().letter(), pos_to_str(*pos))
            }
            Move::PawnMove(_, pos) | Move::PawnJump(_, pos) => write!(f, "{}", pos_to_str(*pos)),
            Move::PawnAttackMove(piece, pos, _) | Move::PawnEnPassantAttack(piece, pos, _) => {
                let file = &pos_to_str(piece.position())[..1];
                write!(f, "{}x{}", file, pos_to_str(*pos))
            }
            Move::PawnPromotion(inner, kind) => write!(f, "{}={}", inner, kind.letter()),
            Move::Castle(_, CastlingSide::KingSide, ..) => write!(f, "0-0"),
            Move::Castle(_, CastlingSide::QueenSide, ..) => write!(f, "0-0-0"),
        }
    }
}
