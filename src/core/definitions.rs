use thiserror::Error;

use crate::core::alliance::Alliance;
use crate::core::piece::PieceType;

/** Where the side to move stands; checkmate and stalemate end the game. */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Normal(Alliance),
    InCheck(Alliance),
    Checkmate(Alliance),
    Stalemate(Alliance),
}

impl GameState {
    pub fn is_finished(&self) -> bool {
        matches!(self, GameState::Checkmate(_) | GameState::Stalemate(_))
    }

    pub fn alliance(&self) -> Alliance {
        match self {
            GameState::Normal(alliance)
            | GameState::InCheck(alliance)
            | GameState::Checkmate(alliance)
            | GameState::Stalemate(alliance) => *alliance,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("not a valid board: no {0} king")]
    MissingKing(Alliance),
    #[error("cannot execute the null move")]
    NullMoveExecution,
    #[error("`set_promotion_type` on non-promotion move")]
    NotAPromotion,
    #[error("pawn can't promote to {0:?}")]
    InvalidPromotionPiece(PieceType),
}
