pub mod core;
pub mod utils;

// module re-exports
pub use crate::core::alliance::Alliance;
pub use crate::core::board::{Board, Builder, Tile};
pub use crate::core::definitions::{EngineError, GameState};
pub use crate::core::game::{Game, MoveLog};
pub use crate::core::moves::{CastlingSide, Move};
pub use crate::core::piece::{Piece, PieceType};
pub use crate::core::player::{MoveStatus, MoveTransition, Player};
