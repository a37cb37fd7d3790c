use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;
use web_time::{Instant, SystemTime, UNIX_EPOCH};

use crate::types::Position;

/// Picks the computer's reply from the legal squares it is given.
pub trait MoveSelector {
    fn select_move(&mut self, legal: &[Position]) -> Option<Position>;
}

/// Uniform choice over legal squares.
#[derive(Debug, Clone)]
pub struct RandomMoveSelector {
    rng: StdRng,
}

impl RandomMoveSelector {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(clock_seed);
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveSelector for RandomMoveSelector {
    fn select_move(&mut self, legal: &[Position]) -> Option<Position> {
        if legal.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..legal.len());
        Some(legal[idx])
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalMoveSelector;

impl MoveSelector for FirstLegalMoveSelector {
    fn select_move(&mut self, legal: &[Position]) -> Option<Position> {
        legal.first().copied()
    }
}

/// A delayed computer reply that can be dropped before it fires.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThinkTimer {
    due: Option<Instant>,
}

impl ThinkTimer {
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        debug!(delay_ms = delay.as_millis() as u64, "computer reply scheduled");
        self.due = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        if self.due.take().is_some() {
            debug!("computer reply cancelled");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// Returns `true` exactly once, on the first poll at or after the due time.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::resolver::legal_moves;
    use crate::types::Color;

    #[test]
    fn random_selector_only_picks_legal_squares() {
        let legal = legal_moves(&Board::new(), Color::White);
        let mut selector = RandomMoveSelector::new(Some(42));

        for _ in 0..100 {
            let pick = selector.select_move(&legal).unwrap();
            assert!(legal.contains(&pick), "{pick:?} is not legal");
        }
    }

    #[test]
    fn random_selector_is_reproducible_for_a_seed() {
        let legal = legal_moves(&Board::new(), Color::Black);
        let mut a = RandomMoveSelector::new(Some(7));
        let mut b = RandomMoveSelector::new(Some(7));

        for _ in 0..20 {
            assert_eq!(a.select_move(&legal), b.select_move(&legal));
        }
    }

    #[test]
    fn random_selector_eventually_covers_every_square() {
        let legal = legal_moves(&Board::new(), Color::Black);
        let mut selector = RandomMoveSelector::new(Some(1));
        let mut seen = Vec::new();

        for _ in 0..200 {
            let pick = selector.select_move(&legal).unwrap();
            if !seen.contains(&pick) {
                seen.push(pick);
            }
        }

        assert_eq!(seen.len(), legal.len());
    }

    #[test]
    fn selectors_return_none_without_legal_moves() {
        assert_eq!(RandomMoveSelector::new(Some(0)).select_move(&[]), None);
        assert_eq!(FirstLegalMoveSelector.select_move(&[]), None);
    }

    #[test]
    fn timer_fires_once_after_delay() {
        let start = Instant::now();
        let delay = Duration::from_millis(600);
        let mut timer = ThinkTimer::default();

        timer.schedule(start, delay);
        assert!(timer.is_pending());
        assert!(!timer.poll(start + Duration::from_millis(599)));
        assert!(timer.poll(start + delay));
        assert!(!timer.poll(start + delay * 2));
        assert!(!timer.is_pending());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let start = Instant::now();
        let mut timer = ThinkTimer::default();

        timer.schedule(start, Duration::from_millis(10));
        timer.cancel();

        assert!(!timer.poll(start + Duration::from_secs(1)));
    }
}
