//! Players that produce moves for a board
//!
//! Anything that can look at a [`HexBoard`] and propose a cell implements
//! [`Player`]. The board itself decides whether the proposal is legal.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    board::HexBoard, config::EvaluatorConfig, evaluator::MonteCarloEvaluator, HexError, Result,
};

/// Trait for anything that can choose a move
pub trait Player: Send {
    /// Returns the display name of this player
    fn name(&self) -> &str;

    /// Proposes a move as relative `(row, col)` coordinates
    fn choose_move(&mut self, board: &HexBoard) -> Result<(usize, usize)>;

    /// Clears any per-match state
    fn reset(&mut self) {}

    /// Returns true if a person is behind this player
    ///
    /// Non-interactive players are not told about rejected moves.
    fn is_interactive(&self) -> bool {
        false
    }
}

/// Proposes uniformly random cells, occupied or not
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a random player; `seed` of `None` seeds from OS entropy
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        RandomPlayer {
            name: name.into(),
            rng,
        }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, board: &HexBoard) -> Result<(usize, usize)> {
        let dim = board.get_playable_dim();
        Ok((self.rng.gen_range(0..dim), self.rng.gen_range(0..dim)))
    }
}

/// Plays the move a [`MonteCarloEvaluator`] rates best
pub struct MonteCarloPlayer {
    name: String,
    evaluator: MonteCarloEvaluator,
}

impl MonteCarloPlayer {
    /// Creates a player for boards with a playable side of `dim`
    pub fn new(name: impl Into<String>, dim: usize, config: EvaluatorConfig) -> Result<Self> {
        Ok(MonteCarloPlayer {
            name: name.into(),
            evaluator: MonteCarloEvaluator::new(dim, config)?,
        })
    }

    /// Returns the evaluator backing this player
    pub fn evaluator(&self) -> &MonteCarloEvaluator {
        &self.evaluator
    }

    /// Changes the number of playouts per candidate
    pub fn set_trials(&mut self, trials: usize) -> Result<()> {
        self.evaluator.set_trials(trials)
    }
}

impl Player for MonteCarloPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, board: &HexBoard) -> Result<(usize, usize)> {
        let best = self
            .evaluator
            .best_move(board)?
            .ok_or(HexError::NoFreeVertices)?;

        board
            .vertex_to_row_col(best.vertex)
            .ok_or(HexError::InvalidVertex {
                index: best.vertex.index(),
                vertex_count: board.graph().vertex_count(),
            })
    }
}
