use std::fmt::Display;

use crate::core::utils::{FIRST_RANK, EIGHTH_RANK, SECOND_RANK, SEVENTH_RANK};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alliance {
    #[default]
    White,
    Black,
}

impl Alliance {
    /** Row step of a pawn advance: White walks towards row 0. */
    pub fn direction(self) -> isize {
        match self {
            Alliance::White => -1,
            Alliance::Black => 1,
        }
    }

    pub fn opposite_direction(self) -> isize {
        -self.direction()
    }

    pub fn is_white(self) -> bool {
        self == Alliance::White
    }

    pub fn is_black(self) -> bool {
        self == Alliance::Black
    }

    pub fn opponent(self) -> Alliance {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }

    pub fn choose_player<T>(self, white: T, black: T) -> T {
        match self {
            Alliance::White => white,
            Alliance::Black => black,
        }
    }

    pub fn is_promotion_square(self, coordinate: usize) -> bool {
        let table = self.choose_player(&EIGHTH_RANK, &FIRST_RANK);
        table.get(coordinate).copied().unwrap_or(false)
    }

    pub fn is_pawn_start_square(self, coordinate: usize) -> bool {
        let table = self.choose_player(&SECOND_RANK, &SEVENTH_RANK);
        table.get(coordinate).copied().unwrap_or(false)
    }

    /** Applies the board-dump letter case of this side. */
    pub fn letter_case(self, letter: char) -> char {
        match self {
            Alliance::White => letter.to_ascii_uppercase(),
            Alliance::Black => letter.to_ascii_lowercase(),
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl Display for Alliance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Alliance::White => "White",
            Alliance::Black => "Black",
        })
    }
}
