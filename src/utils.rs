//! Small numeric helpers shared by the evaluator and its statistics

/// Safely calculates the win rate from wins and trials
///
/// Returns 0.0 if no trials have been run.
pub fn win_rate(wins: u64, trials: u64) -> f64 {
    if trials == 0 {
        return 0.0;
    }
    wins as f64 / trials as f64
}
