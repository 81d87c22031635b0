use std::collections::HashMap;
use std::fmt::Display;

use log::debug;

use crate::core::alliance::Alliance;
use crate::core::definitions::EngineError;
use crate::core::moves::Move;
use crate::core::piece::{Piece, PieceType};
use crate::core::player::{Player, PlayerState};
use crate::core::utils::{NUM_TILES, NUM_TILES_PER_ROW};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tile {
    Empty(usize),
    Occupied(usize, Piece),
}

impl Tile {
    /** Empty tiles carry nothing but their coordinate, so any two for a square are equal. */
    pub fn create(coordinate: usize, piece: Option<Piece>) -> Tile {
        match piece {
            Some(piece) => Tile::Occupied(coordinate, piece),
            None => Tile::Empty(coordinate),
        }
    }

    pub fn coordinate(&self) -> usize {
        match self {
            Tile::Empty(coordinate) | Tile::Occupied(coordinate, _) => *coordinate,
        }
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Tile::Occupied(..))
    }

    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Tile::Occupied(_, piece) => Some(piece),
            Tile::Empty(_) => None,
        }
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tile::Empty(_) => f.pad("-"),
            Tile::Occupied(_, piece) => f.pad(&piece.to_string()),
        }
    }
}

/** Immutable position. Every transition builds a new one through [`Builder`]. */
#[derive(Debug, Clone)]
pub struct Board {
    tiles: Vec<Tile>,
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    /** indexed by `Alliance::index`, filled once during construction */
    players: Vec<PlayerState>,
    next_move_maker: Alliance,
    en_passant_pawn: Option<Piece>,
    transition_move: Move,
}

impl Board {
    fn new(builder: Builder) -> Result<Board, EngineError> {
        let tiles: Vec<Tile> = (0..NUM_TILES)
            .map(|coordinate| Tile::create(coordinate, builder.board_config.get(&coordinate).copied()))
            .collect();
        let white_pieces = calculate_active_pieces(&tiles, Alliance::White);
        let black_pieces = calculate_active_pieces(&tiles, Alliance::Black);
        let mut board = Board {
            tiles,
            white_pieces,
            black_pieces,
            players: Vec::with_capacity(2),
            next_move_maker: builder.next_move_maker,
            en_passant_pawn: builder.en_passant_pawn,
            transition_move: builder.transition_move.unwrap_or(Move::NullMove),
        };
        // Both sides see the same pair of standard move sets.
        let white_standard = board.calculate_legal_moves(Alliance::White);
        let black_standard = board.calculate_legal_moves(Alliance::Black);
        let white_player =
            PlayerState::new(&board, Alliance::White, white_standard.clone(), &black_standard)?;
        let black_player =
            PlayerState::new(&board, Alliance::Black, black_standard, &white_standard)?;
        board.players.push(white_player);
        board.players.push(black_player);
        debug!(
            "Built board: {} to move, {} legal moves",
            board.next_move_maker,
            board.current_player().legal_moves().len()
        );
        Ok(board)
    }

    pub fn create_standard_board() -> Board {
        Builder::standard()
            .build()
            .expect("standard setup always has both kings")
    }

    /** Panics when `coordinate` is off the board; see [`Board::get_tile`]. */
    pub fn tile(&self, coordinate: usize) -> &Tile {
        &self.tiles[coordinate]
    }

    pub fn get_tile(&self, coordinate: usize) -> Option<&Tile> {
        self.tiles.get(coordinate)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn white_pieces(&self) -> &[Piece] {
        &self.white_pieces
    }

    pub fn black_pieces(&self) -> &[Piece] {
        &self.black_pieces
    }

    pub fn active_pieces(&self, alliance: Alliance) -> &[Piece] {
        alliance.choose_player(&self.white_pieces, &self.black_pieces)
    }

    pub fn white_player(&self) -> Player<'_> {
        self.player(Alliance::White)
    }

    pub fn black_player(&self) -> Player<'_> {
        self.player(Alliance::Black)
    }

    pub fn player(&self, alliance: Alliance) -> Player<'_> {
        Player::new(self, alliance, &self.players[alliance.index()])
    }

    pub fn current_player(&self) -> Player<'_> {
        self.next_move_maker
            .choose_player(self.white_player(), self.black_player())
    }

    pub fn en_passant_pawn(&self) -> Option<&Piece> {
        self.en_passant_pawn.as_ref()
    }

    pub fn transition_move(&self) -> &Move {
        &self.transition_move
    }

    /** Legal moves of both sides, White first. */
    pub fn all_legal_moves(&self) -> impl Iterator<Item = &Move> + '_ {
        self.players
            .iter()
            .flat_map(|player| player.legal_moves.iter())
    }

    fn calculate_legal_moves(&self, alliance: Alliance) -> Vec<Move> {
        self.active_pieces(alliance)
            .iter()
            .flat_map(|piece| piece.calculate_legal_moves(self))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::create_standard_board()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, tile) in self.tiles.iter().enumerate() {
            write!(f, "{:>3}", tile)?;
            if (idx + 1) % NUM_TILES_PER_ROW == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

fn calculate_active_pieces(tiles: &[Tile], alliance: Alliance) -> Vec<Piece> {
    tiles
        .iter()
        .filter_map(Tile::piece)
        .filter(|piece| piece.alliance() == alliance)
        .copied()
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct Builder {
    board_config: HashMap<usize, Piece>,
    next_move_maker: Alliance,
    en_passant_pawn: Option<Piece>,
    transition_move: Option<Move>,
}

impl Builder {
    pub fn new() -> Builder {
        Default::default()
    }

    /** Standard opening setup, White to move. */
    pub fn standard() -> Builder {
        const BACK_RANK: [PieceType; 8] = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];
        let mut builder = Builder::new();
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            builder
                .set_piece(Piece::new(kind, Alliance::Black, file))
                .set_piece(Piece::new(PieceType::Pawn, Alliance::Black, 8 + file))
                .set_piece(Piece::new(PieceType::Pawn, Alliance::White, 48 + file))
                .set_piece(Piece::new(kind, Alliance::White, 56 + file));
        }
        builder.set_move_maker(Alliance::White);
        builder
    }

    pub fn set_piece(&mut self, piece: Piece) -> &mut Self {
        self.board_config.insert(piece.position(), piece);
        self
    }

    pub fn set_move_maker(&mut self, next_move_maker: Alliance) -> &mut Self {
        self.next_move_maker = next_move_maker;
        self
    }

    pub fn set_en_passant_pawn(&mut self, en_passant_pawn: Piece) -> &mut Self {
        self.en_passant_pawn = Some(en_passant_pawn);
        self
    }

    pub fn set_transition_move(&mut self, transition_move: Move) -> &mut Self {
        self.transition_move = Some(transition_move);
        self
    }

    pub fn build(self) -> Result<Board, EngineError> {
        Board::new(self)
    }
}
