use crate::types::Color;

/// Why a placement was refused. The game is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,

    #[error("it is {active:?}'s turn, not {attempted:?}'s")]
    WrongTurn { active: Color, attempted: Color },

    #[error("square is already occupied")]
    Occupied,

    #[error("illegal move: no discs would be flipped")]
    NoFlips,

    #[error("row/col out of range")]
    OutOfBounds,
}

/// Failures on the remote-play path. All of them are recoverable.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("malformed frame: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("start frame received during a running match")]
    UnexpectedStart,

    #[error("move frame received while waiting on the local player")]
    NotPeerTurn,

    #[error("local player is {local:?} but {active:?} is to move")]
    NotLocalTurn { local: Color, active: Color },

    #[error("peer connection lost")]
    PeerLost,

    #[error("no remote match in progress")]
    Inactive,

    #[error("move rejected: {0}")]
    Move(#[from] MoveError),
}

/// Errors raised while loading a `MatchConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),

    #[error("failed to decode config: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_error_display() {
        let err = MoveError::WrongTurn {
            active: Color::Black,
            attempted: Color::White,
        };
        assert_eq!(err.to_string(), "it is Black's turn, not White's");
        assert!(MoveError::NoFlips.to_string().contains("illegal move"));
    }

    #[test]
    fn session_error_wraps_move_error() {
        let err = SessionError::from(MoveError::Occupied);
        assert_eq!(err.to_string(), "move rejected: square is already occupied");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::Validation("pass_banner_ms must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: pass_banner_ms must be > 0"
        );
    }
}
