//! Monte Carlo move evaluation
//!
//! Every free cell is scored by fixing it as the mover's next stone and then
//! filling the rest of the board at random many times over. Since a full Hex
//! board always has exactly one winner, each playout is a clean win or loss
//! for the mover, and the candidate with the most wins is chosen.
//!
//! Playouts run on a scratch board owned by the evaluator, so the real game
//! board is never touched. The scratch board is seeded from the real one
//! before each candidate and every playout undoes its own writes.

use std::time::Instant;

use log::{debug, info};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use rayon::prelude::*;

use crate::{
    board::{Color, HexBoard},
    config::EvaluatorConfig,
    graph::VertexId,
    stats::EvaluationStatistics,
    utils::win_rate,
    Result,
};

/// Score of one candidate move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateScore {
    /// The free vertex that was evaluated
    pub vertex: VertexId,

    /// Number of playouts the mover won with this move fixed
    pub wins: u32,

    /// Number of playouts run
    pub trials: usize,
}

impl CandidateScore {
    /// Returns the estimated win probability of this move
    pub fn win_rate(&self) -> f64 {
        win_rate(self.wins as u64, self.trials as u64)
    }
}

/// Picks the candidate with the highest win count
///
/// Ties go to the candidate that comes first in `scores`. Returns `None`
/// only when `scores` is empty; if every candidate lost every playout, the
/// first one is still returned.
pub fn select_best(scores: &[CandidateScore]) -> Option<CandidateScore> {
    let mut best: Option<CandidateScore> = None;
    for score in scores {
        if best.map_or(true, |b| score.wins > b.wins) {
            best = Some(*score);
        }
    }
    best
}

/// Runs `trials` random playouts with `candidate` fixed for the player to
/// move on `board`, using `scratch` as the work area.
///
/// On success, every vertex of `free` (including `candidate`) is left
/// `Empty` on the scratch board.
fn run_playouts<R: Rng + ?Sized>(
    scratch: &mut HexBoard,
    board: &HexBoard,
    candidate: VertexId,
    free: &[VertexId],
    trials: usize,
    rng: &mut R,
) -> Result<u32> {
    let mut pool: Vec<VertexId> = free.iter().copied().filter(|&v| v != candidate).collect();

    scratch.clone_board_state(board)?;
    let me = board.get_current_player_symbol();
    let opponent = me.opponent();
    scratch.set_vertex_label(candidate, me)?;

    let mut wins = 0;
    for _ in 0..trials {
        pool.shuffle(rng);

        // opponent replies first, then strict alternation until the board is full
        for (j, &vertex) in pool.iter().enumerate() {
            let color = if j % 2 == 0 { opponent } else { me };
            scratch.set_vertex_label(vertex, color)?;
        }

        if scratch.is_victory(me)? {
            wins += 1;
        }

        for &vertex in &pool {
            scratch.set_vertex_label(vertex, Color::Empty)?;
        }
    }

    scratch.set_vertex_label(candidate, Color::Empty)?;
    Ok(wins)
}

/// Evaluates candidate moves by random playouts
///
/// # Example
///
/// ```
/// use hexgraph_mc::{EvaluatorConfig, HexBoard, MonteCarloEvaluator};
///
/// let board = HexBoard::new(3)?;
/// let config = EvaluatorConfig::default().with_trials(50).with_seed(7);
/// let mut evaluator = MonteCarloEvaluator::new(board.get_playable_dim(), config)?;
///
/// let best = evaluator.best_move(&board)?.expect("an empty board has free cells");
/// assert!(best.wins as usize <= best.trials);
/// # Ok::<(), hexgraph_mc::HexError>(())
/// ```
pub struct MonteCarloEvaluator {
    config: EvaluatorConfig,
    scratch: HexBoard,
    rng: StdRng,
    statistics: EvaluationStatistics,
}

impl MonteCarloEvaluator {
    /// Creates an evaluator for boards with a playable side of `dim`
    pub fn new(dim: usize, config: EvaluatorConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(MonteCarloEvaluator {
            scratch: HexBoard::new(dim)?,
            config,
            rng,
            statistics: EvaluationStatistics::new(),
        })
    }

    /// Returns the configuration in use
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Changes the number of playouts per candidate
    pub fn set_trials(&mut self, trials: usize) -> Result<()> {
        let config = self.config.clone().with_trials(trials);
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Returns the statistics of the last evaluation
    pub fn statistics(&self) -> &EvaluationStatistics {
        &self.statistics
    }

    /// Returns the scratch board used for playouts
    pub fn scratch_board(&self) -> &HexBoard {
        &self.scratch
    }

    /// Counts how many of `trials` random playouts the player to move wins
    /// on `board` after playing `candidate`
    ///
    /// `free` is the list of empty vertices of `board`; the playouts fill
    /// every one of them except `candidate`. The result is within
    /// `0..=trials`.
    pub fn simulate(
        &mut self,
        board: &HexBoard,
        candidate: VertexId,
        free: &[VertexId],
    ) -> Result<u32> {
        run_playouts(
            &mut self.scratch,
            board,
            candidate,
            free,
            self.config.trials,
            &mut self.rng,
        )
    }

    /// Scores every free vertex of `board`, in row-major order
    pub fn evaluate(&mut self, board: &HexBoard) -> Result<Vec<CandidateScore>> {
        let start = Instant::now();
        let free = board.get_free_vertices()?;
        let trials = self.config.trials;

        // one stream per candidate so the result does not depend on scheduling
        let seeds: Vec<u64> = free.iter().map(|_| self.rng.gen()).collect();

        let scores = if self.config.parallel {
            let template = &self.scratch;
            free.par_iter()
                .zip(seeds.par_iter())
                .map(|(&candidate, &seed)| -> Result<CandidateScore> {
                    let mut scratch = template.clone();
                    let mut rng = StdRng::seed_from_u64(seed);
                    let wins =
                        run_playouts(&mut scratch, board, candidate, &free, trials, &mut rng)?;
                    Ok(CandidateScore {
                        vertex: candidate,
                        wins,
                        trials,
                    })
                })
                .collect::<Result<Vec<_>>>()?
        } else {
            let mut scores = Vec::with_capacity(free.len());
            for (&candidate, &seed) in free.iter().zip(&seeds) {
                let mut rng = StdRng::seed_from_u64(seed);
                let wins = run_playouts(
                    &mut self.scratch,
                    board,
                    candidate,
                    &free,
                    trials,
                    &mut rng,
                )?;
                debug!(
                    "candidate {} ({}/{}): {} wins out of {}",
                    candidate,
                    scores.len() + 1,
                    free.len(),
                    wins,
                    trials
                );
                scores.push(CandidateScore {
                    vertex: candidate,
                    wins,
                    trials,
                });
            }
            scores
        };

        self.statistics = EvaluationStatistics {
            candidates: scores.len(),
            trials_per_candidate: trials,
            playouts: (scores.len() * trials) as u64,
            best_wins: select_best(&scores).map_or(0, |s| s.wins),
            total_time: start.elapsed(),
            parallel: self.config.parallel,
        };

        Ok(scores)
    }

    /// Returns the best move for the player to move on `board`
    ///
    /// `None` means the board has no free cell left.
    pub fn best_move(&mut self, board: &HexBoard) -> Result<Option<CandidateScore>> {
        let scores = self.evaluate(board)?;
        let best = select_best(&scores);

        if let Some(score) = best {
            info!(
                "best move {} with win rate {:.3} ({} candidates, {:.3}s)",
                score.vertex,
                score.win_rate(),
                self.statistics.candidates,
                self.statistics.total_time.as_secs_f64()
            );
        }
        Ok(best)
    }
}
