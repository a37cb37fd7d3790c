use std::time::Duration;

use crate::error::ConfigError;

/// Timing and randomness knobs for one `Match`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchConfig {
    /// Visible "thinking" pause before the computer replies.
    pub cpu_delay_ms: u64,
    /// How long a pass banner stays up.
    pub pass_banner_ms: u64,
    /// Fixed seed for the computer player. Clock-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            cpu_delay_ms: 600,
            pass_banner_ms: 1000,
            seed: None,
        }
    }
}

impl MatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pass_banner_ms == 0 {
            return Err(ConfigError::Validation("pass_banner_ms must be > 0".into()));
        }
        Ok(())
    }

    pub fn cpu_delay(&self) -> Duration {
        Duration::from_millis(self.cpu_delay_ms)
    }

    pub fn pass_banner(&self) -> Duration {
        Duration::from_millis(self.pass_banner_ms)
    }
}
