//! Statistics collection for move evaluations
//!
//! This module provides a structure for reporting what a single
//! [`MonteCarloEvaluator::evaluate`](crate::MonteCarloEvaluator::evaluate) run did.

use std::time::Duration;

use crate::utils::win_rate;

/// Statistics collected during one evaluation
#[derive(Debug, Clone)]
pub struct EvaluationStatistics {
    /// Number of candidate moves scored
    pub candidates: usize,

    /// Playouts run for each candidate
    pub trials_per_candidate: usize,

    /// Total number of playouts across all candidates
    pub playouts: u64,

    /// Win count of the selected candidate
    pub best_wins: u32,

    /// Total time spent evaluating
    pub total_time: Duration,

    /// Whether candidates were evaluated in parallel
    pub parallel: bool,
}

impl EvaluationStatistics {
    /// Creates a new, empty statistics object
    pub fn new() -> Self {
        EvaluationStatistics {
            candidates: 0,
            trials_per_candidate: 0,
            playouts: 0,
            best_wins: 0,
            total_time: Duration::from_secs(0),
            parallel: false,
        }
    }

    /// Returns the number of playouts per second
    pub fn playouts_per_second(&self) -> f64 {
        if self.total_time.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.playouts as f64 / self.total_time.as_secs_f64()
    }

    /// Returns the estimated win probability of the selected candidate
    pub fn best_win_rate(&self) -> f64 {
        win_rate(self.best_wins as u64, self.trials_per_candidate as u64)
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        format!(
            "Monte Carlo Evaluation Statistics:\n\
             - Candidates: {}\n\
             - Trials per candidate: {}\n\
             - Total playouts: {}\n\
             - Best win rate: {:.3}\n\
             - Total time: {:.3} seconds\n\
             - Playouts per second: {:.1}\n\
             - Parallel: {}",
            self.candidates,
            self.trials_per_candidate,
            self.playouts,
            self.best_win_rate(),
            self.total_time.as_secs_f64(),
            self.playouts_per_second(),
            self.parallel
        )
    }
}

impl Default for EvaluationStatistics {
    fn default() -> Self {
        Self::new()
    }
}
