pub const NUM_TILES: usize = 64;
pub const NUM_TILES_PER_ROW: usize = 8;

/** Column membership tables, indexed by coordinate */
pub const FIRST_COLUMN: [bool; NUM_TILES] = init_column(0);
pub const SECOND_COLUMN: [bool; NUM_TILES] = init_column(1);
pub const SEVENTH_COLUMN: [bool; NUM_TILES] = init_column(6);
pub const EIGHTH_COLUMN: [bool; NUM_TILES] = init_column(7);

/** Row membership tables, named by chess rank (row 0 is the eighth rank) */
pub const EIGHTH_RANK: [bool; NUM_TILES] = init_row(0);
pub const SEVENTH_RANK: [bool; NUM_TILES] = init_row(1);
pub const SECOND_RANK: [bool; NUM_TILES] = init_row(6);
pub const FIRST_RANK: [bool; NUM_TILES] = init_row(7);

const fn init_column(column: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    let mut pos = column;
    while pos < NUM_TILES {
        table[pos] = true;
        pos += NUM_TILES_PER_ROW;
    }
    table
}

const fn init_row(row: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    let mut pos = row * NUM_TILES_PER_ROW;
    while pos < (row + 1) * NUM_TILES_PER_ROW {
        table[pos] = true;
        pos += 1;
    }
    table
}

#[inline]
pub fn is_valid_tile_coordinate(coord: isize) -> bool {
    (0..NUM_TILES as isize).contains(&coord)
}

/** Adds `offset` to `position`, `None` when the result leaves the board. */
#[inline]
pub fn offset_coordinate(position: usize, offset: isize) -> Option<usize> {
    position
        .checked_add_signed(offset)
        .filter(|&coord| coord < NUM_TILES)
}

/** Wraparound test shared by sliding pieces and the king. */
#[inline]
pub fn is_first_column_exclusion(position: usize, offset: isize) -> bool {
    FIRST_COLUMN[position] && matches!(offset, -9 | -1 | 7)
}

#[inline]
pub fn is_eighth_column_exclusion(position: usize, offset: isize) -> bool {
    EIGHTH_COLUMN[position] && matches!(offset, -7 | 1 | 9)
}

/** Walks from `position` along `offset` until the edge of the board. */
pub struct DirectionIterator {
    position: usize,
    offset: isize,
    exhausted: bool,
}

impl Iterator for DirectionIterator {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted
            || is_first_column_exclusion(self.position, self.offset)
            || is_eighth_column_exclusion(self.position, self.offset)
        {
            self.exhausted = true;
            return None;
        }
        match offset_coordinate(self.position, self.offset) {
            Some(next) => {
                self.position = next;
                Some(next)
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}

pub fn in_direction(position: usize, offset: isize) -> DirectionIterator {
    DirectionIterator {
        position,
        offset,
        exhausted: false,
    }
}

#[rustfmt::skip]
const POS_TO_STRING: [&str; NUM_TILES] = [
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
];

pub fn pos_to_str(pos: usize) -> &'static str {
    POS_TO_STRING.get(pos).copied().unwrap_or("XX")
}

pub fn coordinate_at(name: &str) -> Option<usize> {
    POS_TO_STRING.iter().position(|&square| square == name)
}
