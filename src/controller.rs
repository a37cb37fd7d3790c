use tracing::{debug, info, warn};
use web_time::Instant;

use crate::config::MatchConfig;
use crate::cpu::{MoveSelector, RandomMoveSelector, ThinkTimer};
use crate::error::ConfigError;
use crate::game::{Game, Turn};
use crate::session::{Inbound, Session};
use crate::types::{Color, GameResult, GameState, Move, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    /// Remote match requested, waiting for the `start` frame.
    Waiting,
    Play,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Two humans sharing one input.
    Local,
    Computer { cpu: Color },
    Remote,
}

#[derive(Debug, Clone, Copy)]
struct PassBanner {
    text: &'static str,
    until: Instant,
}

/// Event-driven driver around one `Game`.
///
/// The host calls `click_cell`, `tick` and `receive`; each call runs to
/// completion. All timing is passed in as `now` so the host owns the clock.
pub struct Match {
    config: MatchConfig,
    screen: Screen,
    mode: Option<Mode>,
    game: Game,
    session: Option<Session>,
    selector: Box<dyn MoveSelector>,
    timer: ThinkTimer,
    banner: Option<PassBanner>,
}

impl Match {
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        let selector = Box::new(RandomMoveSelector::new(config.seed));
        Self::with_selector(config, selector)
    }

    pub fn with_selector(
        config: MatchConfig,
        selector: Box<dyn MoveSelector>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            screen: Screen::Menu,
            mode: None,
            game: Game::new(),
            session: None,
            selector,
            timer: ThinkTimer::default(),
            banner: None,
        })
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn start_local(&mut self) {
        self.begin(Mode::Local);
    }

    /// Human plays Black, the computer White.
    pub fn start_computer(&mut self) {
        self.begin(Mode::Computer { cpu: Color::White });
    }

    /// The color arrives later in the matchmaker's `start` frame.
    pub fn start_remote(&mut self) {
        self.back_to_menu();
        self.mode = Some(Mode::Remote);
        self.session = Some(Session::new());
        self.screen = Screen::Waiting;
        info!("waiting for remote match");
    }

    pub fn back_to_menu(&mut self) {
        self.timer.cancel();
        self.session = None;
        self.mode = None;
        self.banner = None;
        self.screen = Screen::Menu;
    }

    /// A board click from the input layer. Returns a frame to send, if any.
    ///
    /// Clicks that are not a legal move for the local human are ignored.
    pub fn click_cell(&mut self, x: i32, y: i32, now: Instant) -> Option<String> {
        if self.screen != Screen::Play {
            return None;
        }
        if self.game.is_terminal() {
            self.back_to_menu();
            return None;
        }

        let pos = Position::new(u8::try_from(x).ok()?, u8::try_from(y).ok()?)?;
        let active = self.game.active();

        match self.mode? {
            Mode::Local => {
                let turn = self.play(Move::new(pos, active))?;
                self.on_turn(turn, now);
                None
            }
            Mode::Computer { cpu } => {
                if active == cpu || self.timer.is_pending() {
                    return None;
                }
                let turn = self.play(Move::new(pos, active))?;
                self.on_turn(turn, now);
                None
            }
            Mode::Remote => {
                let session = self.session.as_mut()?;
                match session.commit_local(&mut self.game, pos) {
                    Ok((turn, frame)) => {
                        self.on_turn(turn, now);
                        Some(frame)
                    }
                    Err(err) => {
                        debug!(error = %err, "local move not sent");
                        None
                    }
                }
            }
        }
    }

    /// Fires the computer reply once its delay has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if !self.timer.poll(now) {
            return;
        }
        let Some(Mode::Computer { cpu }) = self.mode else {
            return;
        };
        if self.game.is_terminal() || self.game.active() != cpu {
            return;
        }

        let legal = self.game.legal_moves();
        let Some(pos) = self.selector.select_move(&legal) else {
            warn!("computer could not select a move");
            return;
        };
        if let Some(turn) = self.play(Move::new(pos, cpu)) {
            self.on_turn(turn, now);
        }
    }

    /// Handles one frame from the remote channel. Bad frames are dropped.
    pub fn receive(&mut self, frame: &str, now: Instant) {
        let Some(session) = self.session.as_mut() else {
            warn!("frame received with no remote match");
            return;
        };

        match session.receive(&mut self.game, frame) {
            Ok(Inbound::Started(_)) => {
                self.banner = None;
                self.screen = Screen::Play;
            }
            Ok(Inbound::PeerMoved { turn, .. }) => self.on_turn(turn, now),
            Err(err) => warn!(error = %err, "ignoring inbound frame"),
        }
    }

    pub fn peer_lost(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.peer_lost();
        }
    }

    /// Final score, once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.game.is_terminal().then(|| self.game.result())
    }

    pub fn snapshot(&self, now: Instant) -> GameState {
        let (black_count, white_count) = self.game.board().count();
        let (pass_message, pass_remaining_ms) = match self.banner {
            Some(banner) if banner.until > now => (
                banner.text.to_string(),
                banner.until.saturating_duration_since(now).as_millis() as u64,
            ),
            _ => (String::new(), 0),
        };

        GameState {
            screen: match self.screen {
                Screen::Menu => "menu",
                Screen::Waiting => "waiting",
                Screen::Play => "play",
            },
            board: self.game.board().to_array().to_vec(),
            current_player: self.game.active(),
            legal_moves: self.game.legal_moves(),
            black_count,
            white_count,
            is_game_over: self.game.is_terminal(),
            pass_message,
            pass_remaining_ms,
            is_thinking: self.timer.is_pending(),
            flipped: self.game.last_flipped().to_vec(),
            local_color: self.session.as_ref().and_then(Session::local_color),
            peer_lost: self.session.as_ref().is_some_and(Session::is_peer_lost),
            fingerprint: self.game.board().fingerprint(),
        }
    }

    fn begin(&mut self, mode: Mode) {
        self.back_to_menu();
        self.game.reset();
        self.mode = Some(mode);
        self.screen = Screen::Play;
        info!(?mode, "match started");
    }

    fn play(&mut self, mv: Move) -> Option<Turn> {
        match self.game.apply_move(mv) {
            Ok(turn) => Some(turn),
            Err(err) => {
                debug!(error = %err, x = mv.pos.x, y = mv.pos.y, "move rejected");
                None
            }
        }
    }

    fn on_turn(&mut self, turn: Turn, now: Instant) {
        if let Turn::Pass { skipped } = turn {
            self.banner = Some(PassBanner {
                text: skipped.pass_label(),
                until: now + self.config.pass_banner(),
            });
        }
        if turn == Turn::GameOver {
            self.timer.cancel();
            return;
        }
        if let Some(Mode::Computer { cpu }) = self.mode
            && self.game.active() == cpu
            && !self.timer.is_pending()
        {
            self.timer.schedule(now, self.config.cpu_delay());
        }
    }
}
