use tracing::{debug, info};

use crate::board::Board;
use crate::error::MoveError;
use crate::resolver::{flips_for, has_legal_move, legal_moves};
use crate::types::{Cell, Color, GameResult, Move, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove,
    /// Absorbing: neither color has a legal move.
    Terminal,
}

/// What happened to the turn after a successful placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Normal alternation, `0` is now to move.
    Next(Color),
    /// `skipped` has no reply; the mover goes again.
    Pass { skipped: Color },
    GameOver,
}

/// Turn engine for one game. Owns its board exclusively.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Color,
    phase: Phase,
    flipped: Vec<Position>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active: Color::Black,
            phase: Phase::AwaitingMove,
            flipped: Vec::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Color {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Terminal
    }

    /// Discs flipped by the last placement.
    pub fn last_flipped(&self) -> &[Position] {
        &self.flipped
    }

    /// Legal squares for the side to move. Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.is_terminal() {
            return Vec::new();
        }
        legal_moves(&self.board, self.active)
    }

    /// Plays a locally validated move.
    ///
    /// Rejections leave the game untouched.
    pub fn apply_move(&mut self, mv: Move) -> Result<Turn, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if mv.color != self.active {
            return Err(MoveError::WrongTurn {
                active: self.active,
                attempted: mv.color,
            });
        }
        if !self.board.is_empty(mv.pos) {
            return Err(MoveError::Occupied);
        }

        let flips = flips_for(&self.board, mv.pos, mv.color);
        if flips.is_empty() {
            return Err(MoveError::NoFlips);
        }

        self.commit(mv, flips);
        Ok(self.advance(mv.color))
    }

    /// Plays a move that a peer already validated.
    ///
    /// Turn order and capture legality are not re-checked. Only moves that
    /// cannot be represented (occupied target, finished game) are refused.
    pub fn apply_trusted(&mut self, pos: Position, color: Color) -> Result<Turn, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied);
        }

        let flips = flips_for(&self.board, pos, color);
        self.commit(Move::new(pos, color), flips);
        Ok(self.advance(color))
    }

    /// Re-derives the turn for a board installed from outside.
    ///
    /// Keeps the active color if it can move, otherwise passes, otherwise ends.
    pub fn settle(&mut self) -> Turn {
        if self.is_terminal() {
            return Turn::GameOver;
        }
        if has_legal_move(&self.board, self.active) {
            return Turn::Next(self.active);
        }
        self.advance(self.active.opposite())
    }

    pub fn result(&self) -> GameResult {
        let (black_count, white_count) = self.board.count();
        GameResult {
            winner: if black_count > white_count {
                Some(Color::Black)
            } else if white_count > black_count {
                Some(Color::White)
            } else {
                None
            },
            black_count,
            white_count,
        }
    }

    fn commit(&mut self, mv: Move, flips: Vec<Position>) {
        let stone = Cell::from(mv.color);
        let mut next = self.board;
        next.set(mv.pos, stone);
        for &pos in &flips {
            next.set(pos, stone);
        }
        self.board = next;

        debug!(
            color = ?mv.color,
            x = mv.pos.x,
            y = mv.pos.y,
            flipped = flips.len(),
            fingerprint = self.board.fingerprint(),
            "move applied"
        );
        self.flipped = flips;
    }

    fn advance(&mut self, mover: Color) -> Turn {
        let opponent = mover.opposite();

        if has_legal_move(&self.board, opponent) {
            self.active = opponent;
            return Turn::Next(opponent);
        }

        if has_legal_move(&self.board, mover) {
            debug!(skipped = ?opponent, "forced pass");
            self.active = mover;
            return Turn::Pass { skipped: opponent };
        }

        self.phase = Phase::Terminal;
        let (black, white) = self.board.count();
        info!(black, white, "game over");
        Turn::GameOver
    }

    #[cfg(test)]
    pub(crate) fn set_board_for_test(&mut self, board: Board, active: Color) {
        self.board = board;
        self.active = active;
        self.phase = Phase::AwaitingMove;
        self.flipped.clear();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
