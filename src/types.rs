use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: u8 = 8;
pub const NUM_SQUARES: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Side to move. Black always opens.
///
/// Encoded as `1` / `-1` on the wire, which is what the browser client sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Banner shown when this color is forced to skip.
    pub fn pass_label(self) -> &'static str {
        match self {
            Color::Black => "BLACK PASS",
            Color::White => "WHITE PASS",
        }
    }
}

impl From<Color> for i8 {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => 1,
            Color::White => -1,
        }
    }
}

impl TryFrom<i8> for Color {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Color::Black),
            -1 => Ok(Color::White),
            other => Err(format!("invalid color value: {other}")),
        }
    }
}

/// Contents of one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Stone(Color),
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        Cell::Stone(color)
    }
}

/// A board coordinate, `x` is the column and `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    /// Returns `None` when the coordinate is off the board.
    pub fn new(x: u8, y: u8) -> Option<Self> {
        (x < BOARD_SIZE && y < BOARD_SIZE).then_some(Self { x, y })
    }

    /// Signed variant used by direction walks.
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x as i8 + dx;
        let y = self.y as i8 + dy;
        if x < 0 || y < 0 {
            return None;
        }
        Self::new(x as u8, y as u8)
    }

    pub fn index(self) -> usize {
        self.y as usize * BOARD_SIZE as usize + self.x as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        if idx >= NUM_SQUARES {
            return None;
        }
        Some(Self {
            x: (idx % BOARD_SIZE as usize) as u8,
            y: (idx / BOARD_SIZE as usize) as u8,
        })
    }

    /// Iterates every square in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..NUM_SQUARES).filter_map(Position::from_index)
    }
}

/// A placement by one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub pos: Position,
    pub color: Color,
}

impl Move {
    pub fn new(pos: Position, color: Color) -> Self {
        Self { pos, color }
    }
}

/// Read-only snapshot handed to the renderer once per frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub screen: &'static str,
    /// 0=empty, 1=black, 2=white, row-major.
    pub board: Vec<u8>,
    pub current_player: Color,
    pub legal_moves: Vec<Position>,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    /// Contract:
    /// - empty string when no pass banner is showing.
    /// - `pass_remaining_ms` is zero whenever `pass_message` is empty.
    pub pass_message: String,
    pub pass_remaining_ms: u64,
    pub is_thinking: bool,
    pub flipped: Vec<Position>,
    /// Remote play only.
    pub local_color: Option<Color>,
    pub peer_lost: bool,
    pub fingerprint: u32,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    /// `None` on a draw.
    pub winner: Option<Color>,
    pub black_count: u8,
    pub white_count: u8,
}
