use crate::types::{Cell, Color, NUM_SQUARES, Position};

/// Othello board state represented by two bitboards.
///
/// Bit `i` is the square at `Position::from_index(i)`. The masks never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// Creates the opening board:
    /// (3,3)=white, (4,3)=black, (3,4)=black, (4,4)=white.
    pub fn new() -> Self {
        Self {
            black: bit(28) | bit(35),
            white: bit(27) | bit(36),
        }
    }

    /// Builds a board from raw masks. Squares set in both resolve to black.
    pub fn from_bitboards(black: u64, white: u64) -> Self {
        Self {
            black,
            white: white & !black,
        }
    }

    /// Clears every square and restores the opening position.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn get(&self, pos: Position) -> Cell {
        let square = bit(pos.index());
        if (self.black & square) != 0 {
            Cell::Stone(Color::Black)
        } else if (self.white & square) != 0 {
            Cell::Stone(Color::White)
        } else {
            Cell::Empty
        }
    }

    /// Raw storage write, no legality checking.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        let square = bit(pos.index());
        self.black &= !square;
        self.white &= !square;
        match cell {
            Cell::Empty => {}
            Cell::Stone(Color::Black) => self.black |= square,
            Cell::Stone(Color::White) => self.white |= square,
        }
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.black.count_ones() as u8, self.white.count_ones() as u8)
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count();
        NUM_SQUARES as u8 - black_count - white_count
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (pos, cell) in board.iter_mut().enumerate() {
            let square = bit(pos);
            *cell = if (self.black & square) != 0 {
                1
            } else if (self.white & square) != 0 {
                2
            } else {
                0
            };
        }
        board
    }

    /// CRC32 over the cell array. Two peers in lockstep report the same value.
    pub fn fingerprint(&self) -> u32 {
        crc32fast::hash(&self.to_array())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn bit(pos: usize) -> u64 {
    if pos < NUM_SQUARES { 1u64 << pos } else { 0 }
}
