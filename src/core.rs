pub mod algorithms;
pub mod alliance;
pub mod board;
pub mod definitions;
pub mod game;
pub mod moves;
pub mod piece;
pub mod player;
pub mod utils;
