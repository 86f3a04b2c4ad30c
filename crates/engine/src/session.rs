//! A running game: engine state plus the fall timer that drives it.

use std::time::Duration;

use crate::clock::FallTimer;
use crate::config::{ConfigError, GameConfig};
use crate::core::{GameSnapshot, GameState, PieceSource, RandomSource, TickOutcome};
use crate::types::GameAction;

#[derive(Debug, Clone)]
pub struct Session<S = RandomSource> {
    state: GameState<S>,
    fall: FallTimer,
}

impl Session<RandomSource> {
    /// Validate `config` and start a game with a random piece source
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let source = match config.seed {
            Some(seed) => RandomSource::seeded(seed),
            None => RandomSource::from_entropy(),
        };
        let state = GameState::with_source(config.width, config.height, source);
        Ok(Self::new(state, config.fall_interval))
    }
}

impl<S: PieceSource> Session<S> {
    pub fn new(state: GameState<S>, fall_interval: Duration) -> Self {
        Self {
            state,
            fall: FallTimer::new(fall_interval),
        }
    }

    pub fn state(&self) -> &GameState<S> {
        &self.state
    }

    pub fn game_over(&self) -> bool {
        self.state.game_over()
    }

    /// Forward a player intent. A successful restart also restarts the fall timer.
    pub fn apply(&mut self, action: GameAction) -> bool {
        let applied = self.state.apply_action(action);
        if applied && action == GameAction::Restart {
            self.fall.reset();
        }
        applied
    }

    /// Advance simulated time; ticks the engine at most once per call.
    ///
    /// Returns the tick outcome when the fall interval was crossed. Time does
    /// not accumulate while the game is over.
    pub fn advance(&mut self, elapsed: Duration) -> Option<TickOutcome> {
        if self.state.game_over() {
            return None;
        }
        if self.fall.advance(elapsed) {
            Some(self.state.tick())
        } else {
            None
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }
}
