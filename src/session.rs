use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{MoveError, SessionError};
use crate::game::{Game, Turn};
use crate::types::{Color, Move, Position};

/// Wire frame, JSON with a `type` tag.
///
/// `move` carries no color: it is always the sender's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Message {
    Start { color: Color },
    Move { x: u8, y: u8 },
}

impl Message {
    pub fn encode(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn decode(frame: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(frame)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Connected, no color assigned yet.
    Waiting,
    Active,
    /// Terminal for this session; local moves are suspended.
    PeerLost,
}

/// Effect of an accepted inbound frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inbound {
    Started(Color),
    PeerMoved { pos: Position, turn: Turn },
}

/// One peer's side of a remote match.
///
/// Each peer is authoritative for its own color only. Local moves are validated
/// by the turn engine before they are sent; peer moves are replayed as trusted.
/// Only the target square travels, so each side recomputes flips and derives
/// pass/terminal from its own board.
#[derive(Debug, Clone)]
pub struct Session {
    local: Option<Color>,
    status: SessionStatus,
}

impl Session {
    pub fn new() -> Self {
        Self {
            local: None,
            status: SessionStatus::Waiting,
        }
    }

    /// A session whose color was already assigned.
    pub fn with_color(local: Color) -> Self {
        Self {
            local: Some(local),
            status: SessionStatus::Active,
        }
    }

    pub fn local_color(&self) -> Option<Color> {
        self.local
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_peer_lost(&self) -> bool {
        self.status == SessionStatus::PeerLost
    }

    /// True when the local player may act on `game` right now.
    pub fn is_local_turn(&self, game: &Game) -> bool {
        self.status == SessionStatus::Active && self.local == Some(game.active())
    }

    /// Plays a local move and returns the frame to send to the peer.
    pub fn commit_local(
        &mut self,
        game: &mut Game,
        pos: Position,
    ) -> Result<(Turn, String), SessionError> {
        let local = self.active_color()?;
        if game.active() != local {
            return Err(SessionError::NotLocalTurn {
                local,
                active: game.active(),
            });
        }

        let turn = game.apply_move(Move::new(pos, local))?;
        let frame = Message::Move { x: pos.x, y: pos.y }.encode()?;
        debug!(x = pos.x, y = pos.y, ?turn, "local move sent");
        Ok((turn, frame))
    }

    /// Applies one inbound frame. Errors leave `game` untouched.
    pub fn receive(&mut self, game: &mut Game, frame: &str) -> Result<Inbound, SessionError> {
        match Message::decode(frame)? {
            Message::Start { color } => self.start(game, color),
            Message::Move { x, y } => {
                let local = self.active_color()?;
                let peer = local.opposite();
                if game.active() != peer {
                    return Err(SessionError::NotPeerTurn);
                }

                let pos = Position::new(x, y).ok_or(MoveError::OutOfBounds)?;
                let turn = game.apply_trusted(pos, peer)?;
                debug!(
                    x,
                    y,
                    ?turn,
                    fingerprint = game.board().fingerprint(),
                    "peer move applied"
                );
                Ok(Inbound::PeerMoved { pos, turn })
            }
        }
    }

    /// Channel closed. Suspends further local moves for this match.
    pub fn peer_lost(&mut self) {
        if self.status != SessionStatus::PeerLost {
            warn!(local = ?self.local, "peer connection lost");
        }
        self.status = SessionStatus::PeerLost;
    }

    fn start(&mut self, game: &mut Game, color: Color) -> Result<Inbound, SessionError> {
        match self.status {
            SessionStatus::Active if !game.is_terminal() => Err(SessionError::UnexpectedStart),
            SessionStatus::Waiting | SessionStatus::Active => {
                self.local = Some(color);
                self.status = SessionStatus::Active;
                game.reset();
                info!(?color, "remote match started");
                Ok(Inbound::Started(color))
            }
            SessionStatus::PeerLost => Err(SessionError::PeerLost),
        }
    }

    fn active_color(&self) -> Result<Color, SessionError> {
        match (self.status, self.local) {
            (SessionStatus::Active, Some(color)) => Ok(color),
            (SessionStatus::PeerLost, _) => Err(SessionError::PeerLost),
            _ => Err(SessionError::Inactive),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
