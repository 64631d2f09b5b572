//! Configuration for move evaluation and matches
//!
//! Both configurations follow the same pattern: a `Default` with sensible
//! values, consuming `with_*` builders, and a `validate` method that is run
//! by whatever consumes the configuration.

use crate::{HexError, Result};

/// Default number of playouts per candidate move
pub const DEFAULT_TRIALS: usize = 1000;

/// Default playable side length of a board
pub const DEFAULT_BOARD_DIM: usize = 11;

/// Configuration for the Monte Carlo evaluator
///
/// # Example
///
/// ```
/// use hexgraph_mc::EvaluatorConfig;
///
/// let config = EvaluatorConfig::default()
///     .with_trials(200)
///     .with_seed(42)
///     .with_parallel(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Number of random playouts run for every candidate move
    ///
    /// This is the only latency control: evaluation cost grows linearly
    /// with it. 1000 gives strong play, 100-200 is close to instantaneous
    /// on an 11x11 board.
    pub trials: usize,

    /// Seed for the random source
    ///
    /// `None` seeds from OS entropy. Set it to get reproducible evaluations.
    pub seed: Option<u64>,

    /// Evaluate candidates on all cores
    ///
    /// Scores are identical to a sequential run with the same seed.
    pub parallel: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        EvaluatorConfig {
            trials: DEFAULT_TRIALS,
            seed: None,
            parallel: false,
        }
    }
}

impl EvaluatorConfig {
    /// Sets the number of playouts per candidate
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks that the configuration can be used
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(HexError::InvalidConfiguration(
                "trials must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration for [`play_match`](crate::game::play_match)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    /// Playable side length of the board
    pub board_dim: usize,

    /// Number of rejected moves tolerated before the match is abandoned
    ///
    /// Guards against players that keep proposing occupied cells.
    pub max_rejected_moves: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            board_dim: DEFAULT_BOARD_DIM,
            max_rejected_moves: 10_000,
        }
    }
}

impl MatchConfig {
    /// Sets the playable side length
    pub fn with_board_dim(mut self, dim: usize) -> Self {
        self.board_dim = dim;
        self
    }

    /// Sets the rejected move limit
    pub fn with_max_rejected_moves(mut self, limit: usize) -> Self {
        self.max_rejected_moves = limit;
        self
    }

    /// Checks that the configuration can be used
    pub fn validate(&self) -> Result<()> {
        if self.board_dim <= 2 {
            return Err(HexError::InvalidDimension(self.board_dim));
        }
        if self.max_rejected_moves == 0 {
            return Err(HexError::InvalidConfiguration(
                "max_rejected_moves must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
