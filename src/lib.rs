use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod controller;
pub mod cpu;
pub mod error;
pub mod game;
pub mod resolver;
pub mod session;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use config::MatchConfig;
pub use controller::{Match, Mode, Screen};
pub use error::{ConfigError, MoveError, SessionError};
pub use game::{Game, Phase, Turn};
pub use session::{Inbound, Message, Session, SessionStatus};
pub use types::{Cell, Color, GameResult, GameState, Move, Position};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
