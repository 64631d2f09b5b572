//! # hexgraph-mc
//!
//! A Hex board modeled as a weighted graph, with color-aware win detection and
//! a Monte Carlo move evaluator.
//!
//! ## Features
//!
//! - Generic undirected weighted graph with symmetric adjacency
//! - Hex board built on that graph, padded with a ring of "wall" vertices
//! - Win detection by an iterative, color-aware depth-first search
//! - Monte Carlo evaluation of every free cell, sequential or parallel
//! - Reproducible results through seeded random sources
//!
//! ## Basic Usage
//!
//! ```
//! use hexgraph_mc::{EvaluatorConfig, HexBoard, MonteCarloEvaluator, Outcome};
//!
//! fn main() -> Result<(), hexgraph_mc::HexError> {
//!     // A 5x5 playable board; player one (Blue) moves first
//!     let mut board = HexBoard::new(5)?;
//!     assert_eq!(board.play(2, 2)?, Outcome::NoWin);
//!
//!     // Few trials so the doctest stays fast
//!     let config = EvaluatorConfig::default()
//!         .with_trials(20)
//!         .with_seed(1);
//!     let mut evaluator = MonteCarloEvaluator::new(board.get_playable_dim(), config)?;
//!
//!     // Pick a reply for player two
//!     if let Some(best) = evaluator.best_move(&board)? {
//!         let (row, col) = board.vertex_to_row_col(best.vertex).unwrap();
//!         println!("{}", evaluator.statistics().summary());
//!         assert_eq!(board.play(row, col)?, Outcome::NoWin);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## How It Works
//!
//! 1. **Board**: an `n x n` board is stored as an `(n+2) x (n+2)` grid graph
//!    whose outer ring holds the walls. Each cell is linked to its right and
//!    lower neighbors and to its lower-left diagonal, which gives every
//!    interior cell the six neighbors of a hexagon.
//!
//! 2. **Win detection**: a depth-first search from one of a player's walls
//!    that only walks through that player's stones. Reaching the opposite
//!    wall means the player has won.
//!
//! 3. **Evaluation**: every free cell is fixed as the mover's stone and the
//!    rest of the board is filled at random, alternating colors, `trials`
//!    times. A full Hex board has exactly one winner, so each fill is a win
//!    or a loss. The cell with the most wins is chosen.
//!
//! ## Playing Matches
//!
//! ```
//! use hexgraph_mc::{
//!     game::play_match,
//!     player::{MonteCarloPlayer, RandomPlayer},
//!     EvaluatorConfig, HexBoard, MatchConfig,
//! };
//!
//! fn main() -> Result<(), hexgraph_mc::HexError> {
//!     let config = MatchConfig::default().with_board_dim(3);
//!     let mut board = HexBoard::new(config.board_dim)?;
//!
//!     let evaluator_config = EvaluatorConfig::default().with_trials(20).with_seed(3);
//!     let mut ai = MonteCarloPlayer::new("Player1", config.board_dim, evaluator_config)?;
//!     let mut random = RandomPlayer::new("Player2", Some(3));
//!
//!     let report = play_match(&mut board, &mut ai, &mut random, &config)?;
//!     println!("Player {} won in {} moves", report.winner, report.moves.len());
//!
//!     Ok(())
//! }
//! ```

pub mod board;
pub mod config;
pub mod evaluator;
pub mod game;
pub mod graph;
pub mod player;
pub mod stats;
pub mod utils;
mod victory;

pub use board::{Color, GameStatus, HexBoard, Outcome};
pub use config::{EvaluatorConfig, MatchConfig};
pub use evaluator::{CandidateScore, MonteCarloEvaluator};
pub use game::{play_match, MatchReport};
pub use graph::{Edge, Graph, VertexId};
pub use player::Player;
pub use stats::EvaluationStatistics;

/// Error types for graph, board and evaluation operations
///
/// Illegal moves are not errors; they are reported through [`Outcome`].
/// These variants signal misuse of the API, such as a vertex id that does
/// not belong to the graph it is used with.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// A vertex id is outside the graph
    #[error("Vertex {index} does not exist (graph has {vertex_count} vertices)")]
    InvalidVertex { index: usize, vertex_count: usize },

    /// An edge lookup or update targeted a pair that is not adjacent
    #[error("No edge between vertices {from} and {to}")]
    MissingEdge { from: usize, to: usize },

    /// An edge from a vertex to itself was requested
    #[error("Self-loop on vertex {0} is not allowed")]
    SelfLoop(usize),

    /// Two boards or graphs that must match in size do not
    #[error("Size mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A board side length is too small to play on
    #[error("Invalid board dimension {0}: must be greater than 2")]
    InvalidDimension(usize),

    /// A move was requested on a board with no free cell
    #[error("No free vertices left on the board")]
    NoFreeVertices,

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A match was abandoned because players kept proposing illegal moves
    #[error("Match abandoned after {0} rejected moves")]
    TooManyRejectedMoves(usize),
}

/// Result type for hexgraph-mc operations
pub type Result<T> = std::result::Result<T, HexError>;
