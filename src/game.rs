//! Non-interactive match driver
//!
//! Alternates two [`Player`]s on a board until one of them wins. Rejected
//! moves are retried by the same player.

use log::{debug, info, warn};

use crate::{
    board::{HexBoard, Outcome},
    config::MatchConfig,
    player::Player,
    HexError, Result,
};

/// Summary of a finished match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    /// Winning player, 1 or 2
    pub winner: u8,

    /// Outcome of the winning move
    pub outcome: Outcome,

    /// Accepted moves in the order they were played
    pub moves: Vec<(usize, usize)>,

    /// Number of moves the board rejected
    pub rejected_moves: usize,
}

/// Plays a full match between `first` (player one) and `second`
///
/// The board is reset and both players are reset before the first move.
/// The board must have been built with `config.board_dim`.
pub fn play_match(
    board: &mut HexBoard,
    first: &mut dyn Player,
    second: &mut dyn Player,
    config: &MatchConfig,
) -> Result<MatchReport> {
    config.validate()?;
    if board.get_playable_dim() != config.board_dim {
        return Err(HexError::DimensionMismatch {
            expected: config.board_dim,
            found: board.get_playable_dim(),
        });
    }

    board.reset_board()?;
    first.reset();
    second.reset();

    let mut moves = Vec::new();
    let mut rejected_moves = 0;

    loop {
        let player: &mut dyn Player = if board.get_current_player() == 1 {
            &mut *first
        } else {
            &mut *second
        };

        let (row, col) = player.choose_move(board)?;
        let outcome = board.play(row, col)?;

        match outcome {
            Outcome::OutOfBounds | Outcome::AlreadyOccupied => {
                rejected_moves += 1;
                if player.is_interactive() {
                    warn!("{} proposed ({}, {}): {}", player.name(), row, col, outcome);
                } else {
                    debug!("{} proposed ({}, {}): {}", player.name(), row, col, outcome);
                }
                if rejected_moves > config.max_rejected_moves {
                    return Err(HexError::TooManyRejectedMoves(rejected_moves));
                }
            }
            Outcome::NoWin => {
                debug!("{} played ({}, {})", player.name(), row, col);
                moves.push((row, col));
            }
            Outcome::PlayerOneWins | Outcome::PlayerTwoWins => {
                moves.push((row, col));
                let winner = if outcome == Outcome::PlayerOneWins { 1 } else { 2 };
                info!(
                    "{} wins after {} moves ({} rejected)",
                    player.name(),
                    moves.len(),
                    rejected_moves
                );
                return Ok(MatchReport {
                    winner,
                    outcome,
                    moves,
                    rejected_moves,
                });
            }
        }
    }
}
