//! Runtime configuration for a game session.
//!
//! Defaults come from the constants in `falling_blocks_types`; the binary
//! overrides them from the command line and validates the result before the
//! terminal is touched.

use std::time::Duration;

use thiserror::Error;

use crate::types::{
    FALL_INTERVAL_MS, FRAME_RATE, GAME_OVER_PAUSE_MS, GRID_HEIGHT, GRID_WIDTH, MAX_GRID_DIM,
    MIN_GRID_HEIGHT, MIN_GRID_WIDTH,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid width {0} is outside {}..={}", MIN_GRID_WIDTH, MAX_GRID_DIM)]
    InvalidWidth(u8),
    #[error("grid height {0} is outside {}..={}", MIN_GRID_HEIGHT, MAX_GRID_DIM)]
    InvalidHeight(u8),
    #[error("fall interval must be greater than zero")]
    ZeroFallInterval,
    #[error("frame rate must be greater than zero")]
    ZeroFrameRate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    /// Simulated time between automatic one-row descents
    pub fall_interval: Duration,
    /// Upper bound on frames rendered per second
    pub frame_rate: u32,
    /// Seed for the piece source; `None` seeds from OS entropy
    pub seed: Option<u64>,
    /// How long the game-over banner stays up before the driver exits
    pub game_over_pause: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            fall_interval: Duration::from_millis(FALL_INTERVAL_MS as u64),
            frame_rate: FRAME_RATE,
            seed: None,
            game_over_pause: Duration::from_millis(GAME_OVER_PAUSE_MS as u64),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_GRID_WIDTH..=MAX_GRID_DIM).contains(&self.width) {
            return Err(ConfigError::InvalidWidth(self.width));
        }
        if !(MIN_GRID_HEIGHT..=MAX_GRID_DIM).contains(&self.height) {
            return Err(ConfigError::InvalidHeight(self.height));
        }
        if self.fall_interval.is_zero() {
            return Err(ConfigError::ZeroFallInterval);
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        Ok(())
    }

    /// Duration of one frame at the configured frame rate
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }
}
