//! Hex board built on top of the weighted graph
//!
//! A board with a playable side of `n` is stored as an `(n+2) x (n+2)` graph.
//! The extra ring of "margin" vertices represents the players' walls: the top
//! and bottom rows belong to [`Color::Red`], the left and right columns to
//! [`Color::Blue`], and the four corners are [`Color::Blocked`]. Connecting
//! your two walls through the playable area wins the game.
//!
//! Coordinates are either absolute (margins included, `0..n+2`) or relative
//! (playable area only, `0..n`). Public methods take relative coordinates.

use std::fmt;

use log::trace;

use crate::{
    graph::{Graph, VertexId},
    HexError, Result,
};

/// Weight used for every edge of the board graph
///
/// The game only cares whether two cells are adjacent, never about the weight.
pub const EDGE_WEIGHT: u32 = 1;

/// Label of a board vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Free cell, either player may claim it
    Empty,

    /// Taken by player one, or part of player one's left/right walls
    Blue,

    /// Taken by player two, or part of player two's top/bottom walls
    Red,

    /// Corner cell that belongs to both walls; never playable or traversable
    Blocked,
}

impl Color {
    /// Returns the character used to draw this color
    pub fn symbol(self) -> char {
        match self {
            Color::Empty => '.',
            Color::Blue => 'X',
            Color::Red => 'O',
            Color::Blocked => '*',
        }
    }

    /// Returns the color of the other player
    ///
    /// `Empty` and `Blocked` have no opponent and map to themselves.
    pub fn opponent(self) -> Color {
        match self {
            Color::Blue => Color::Red,
            Color::Red => Color::Blue,
            other => other,
        }
    }

    /// Returns true for the two player colors
    pub fn is_player(self) -> bool {
        matches!(self, Color::Blue | Color::Red)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Result of a single call to [`HexBoard::play`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The coordinates are outside the playable area
    OutOfBounds,

    /// The target cell is already taken
    AlreadyOccupied,

    /// The move was accepted and nobody has won yet
    NoWin,

    /// The move was accepted and player one has connected their walls
    PlayerOneWins,

    /// The move was accepted and player two has connected their walls
    PlayerTwoWins,
}

impl Outcome {
    /// Returns true if the move was rejected
    pub fn is_error(self) -> bool {
        matches!(self, Outcome::OutOfBounds | Outcome::AlreadyOccupied)
    }

    /// Returns true if the move ended the game
    pub fn is_win(self) -> bool {
        matches!(self, Outcome::PlayerOneWins | Outcome::PlayerTwoWins)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Outcome::OutOfBounds => "Position out of bounds.",
            Outcome::AlreadyOccupied => "Position already taken.",
            Outcome::NoWin => "Successful play, no winner.",
            Outcome::PlayerOneWins => "Player1 wins!",
            Outcome::PlayerTwoWins => "Player2 wins!",
        };
        f.write_str(message)
    }
}

/// State of the match held by a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Moves are still being accepted
    InProgress,

    /// Player one has won; only a reset makes the board playable again
    WonByPlayerOne,

    /// Player two has won; only a reset makes the board playable again
    WonByPlayerTwo,
}

/// Maps `(row, col)` into a vertex index of a square grid of side `dim`,
/// shifted by a fixed row/column offset.
#[derive(Debug, Clone, Copy)]
struct Transpose {
    row_offset: usize,
    col_offset: usize,
    dim: usize,
}

impl Transpose {
    fn new(row_offset: usize, col_offset: usize, dim: usize) -> Self {
        Transpose {
            row_offset,
            col_offset,
            dim,
        }
    }

    fn index(&self, row: usize, col: usize) -> VertexId {
        let i = (row + self.row_offset) * self.dim + (col + self.col_offset);
        debug_assert!(i < self.dim * self.dim);
        VertexId::new(i)
    }
}

/// A Hex board and the state of the match being played on it
///
/// Player one ([`Color::Blue`]) always moves first and must connect the
/// left and right walls; player two ([`Color::Red`]) must connect top and
/// bottom.
///
/// # Example
///
/// ```
/// use hexgraph_mc::{HexBoard, Outcome};
///
/// let mut board = HexBoard::new(3)?;
/// assert_eq!(board.play(1, 1)?, Outcome::NoWin);
/// assert_eq!(board.play(1, 1)?, Outcome::AlreadyOccupied);
/// assert_eq!(board.get_current_player(), 2);
/// # Ok::<(), hexgraph_mc::HexError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HexBoard {
    graph: Graph<Color, u32>,

    // side length including margins
    abs_dim: usize,

    // side length of the playable area
    rel_dim: usize,

    abs_pos: Transpose,
    rel_pos: Transpose,

    current: Color,
    status: GameStatus,
}

impl HexBoard {
    /// Creates a board with a playable side of `dim` cells, ready to play
    ///
    /// Fails with [`HexError::InvalidDimension`] unless `dim > 2`.
    pub fn new(dim: usize) -> Result<Self> {
        if dim <= 2 {
            return Err(HexError::InvalidDimension(dim));
        }

        let abs_dim = dim + 2;
        let mut board = HexBoard {
            graph: Graph::with_capacity(abs_dim * abs_dim),
            abs_dim,
            rel_dim: dim,
            abs_pos: Transpose::new(0, 0, abs_dim),
            rel_pos: Transpose::new(1, 1, abs_dim),
            current: Color::Blue,
            status: GameStatus::InProgress,
        };
        board.reset_board()?;
        Ok(board)
    }

    /// Rebuilds the graph from scratch and gives the first move to player one
    pub fn reset_board(&mut self) -> Result<()> {
        let n = self.abs_dim;
        let last = n - 1;
        let pos = self.abs_pos;

        self.graph.clear();
        for _ in 0..n * n {
            self.graph.add_vertex(Color::Empty);
        }

        for i in 0..n {
            self.graph.set_vertex_label(pos.index(0, i), Color::Red)?;
            self.graph.set_vertex_label(pos.index(last, i), Color::Red)?;
            self.graph.set_vertex_label(pos.index(i, 0), Color::Blue)?;
            self.graph.set_vertex_label(pos.index(i, last), Color::Blue)?;
        }

        // corners go last so the walls above do not overwrite them
        for (row, col) in [(0, 0), (0, last), (last, 0), (last, last)] {
            self.graph.set_vertex_label(pos.index(row, col), Color::Blocked)?;
        }

        for row in 0..n {
            for col in 0..n {
                let here = pos.index(row, col);
                if col < last {
                    self.graph
                        .add_edge(here, pos.index(row, col + 1), EDGE_WEIGHT)?;
                }
                if row < last {
                    self.graph
                        .add_edge(here, pos.index(row + 1, col), EDGE_WEIGHT)?;
                }
                if col > 0 && row < last {
                    self.graph
                        .add_edge(here, pos.index(row + 1, col - 1), EDGE_WEIGHT)?;
                }
            }

            // close the right margin column
            if row < last {
                self.graph
                    .add_edge(pos.index(row, last), pos.index(row + 1, last), EDGE_WEIGHT)?;
            }
        }

        self.current = Color::Blue;
        self.status = GameStatus::InProgress;
        trace!(
            "board reset: {} vertices, {} edges",
            self.graph.vertex_count(),
            self.graph.edge_count()
        );
        Ok(())
    }

    /// Claims the cell at relative `(row, col)` for the player to move
    ///
    /// Rejected moves leave the board untouched. A winning move ends the
    /// match without passing the turn; after that, every call returns the
    /// winning outcome again until the board is reset.
    pub fn play(&mut self, row: usize, col: usize) -> Result<Outcome> {
        match self.status {
            GameStatus::WonByPlayerOne => return Ok(Outcome::PlayerOneWins),
            GameStatus::WonByPlayerTwo => return Ok(Outcome::PlayerTwoWins),
            GameStatus::InProgress => {}
        }

        let Some(vertex) = self.vertex_at(row, col) else {
            return Ok(Outcome::OutOfBounds);
        };
        if self.graph.get_vertex_label(vertex)? != Color::Empty {
            return Ok(Outcome::AlreadyOccupied);
        }

        let color = self.current;
        self.graph.set_vertex_label(vertex, color)?;

        if self.is_victory(color)? {
            let (status, outcome) = if color == Color::Blue {
                (GameStatus::WonByPlayerOne, Outcome::PlayerOneWins)
            } else {
                (GameStatus::WonByPlayerTwo, Outcome::PlayerTwoWins)
            };
            self.status = status;
            return Ok(outcome);
        }

        self.current = color.opponent();
        Ok(Outcome::NoWin)
    }

    /// Returns 1 if player one is to move, 2 otherwise
    pub fn get_current_player(&self) -> u8 {
        if self.current == Color::Blue {
            1
        } else {
            2
        }
    }

    /// Returns the color of the player to move
    pub fn get_current_player_symbol(&self) -> Color {
        self.current
    }

    /// Returns the state of the match
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the side length of the playable area
    pub fn get_playable_dim(&self) -> usize {
        self.rel_dim
    }

    /// Returns the side length including margins
    pub fn absolute_dim(&self) -> usize {
        self.abs_dim
    }

    /// Returns the underlying graph
    pub fn graph(&self) -> &Graph<Color, u32> {
        &self.graph
    }

    /// Returns the vertex at relative `(row, col)`, if it is on the board
    pub fn vertex_at(&self, row: usize, col: usize) -> Option<VertexId> {
        (row < self.rel_dim && col < self.rel_dim).then(|| self.rel_pos.index(row, col))
    }

    pub(crate) fn absolute_vertex(&self, row: usize, col: usize) -> VertexId {
        self.abs_pos.index(row, col)
    }

    /// Lists every empty playable vertex in row-major order
    pub fn get_free_vertices(&self) -> Result<Vec<VertexId>> {
        let mut free = Vec::new();
        for row in 0..self.rel_dim {
            for col in 0..self.rel_dim {
                let vertex = self.rel_pos.index(row, col);
                if self.graph.get_vertex_label(vertex)? == Color::Empty {
                    free.push(vertex);
                }
            }
        }
        Ok(free)
    }

    /// Converts a vertex back into relative `(row, col)` coordinates
    ///
    /// Returns `None` for margin vertices and for ids outside the board.
    pub fn vertex_to_row_col(&self, vertex: VertexId) -> Option<(usize, usize)> {
        let i = vertex.index();
        if i >= self.abs_dim * self.abs_dim {
            return None;
        }
        let (row, col) = (i / self.abs_dim, i % self.abs_dim);
        if row == 0 || col == 0 || row > self.rel_dim || col > self.rel_dim {
            return None;
        }
        Some((row - 1, col - 1))
    }

    /// Returns the color of `vertex`
    pub fn get_vertex_label(&self, vertex: VertexId) -> Result<Color> {
        self.graph.get_vertex_label(vertex)
    }

    /// Overwrites the color of `vertex` without any rule checks
    pub fn set_vertex_label(&mut self, vertex: VertexId, color: Color) -> Result<()> {
        self.graph.set_vertex_label(vertex, color)
    }

    /// Copies every vertex color from `other`, which must have the same size
    ///
    /// The turn and match status are left as they are.
    pub fn clone_board_state(&mut self, other: &HexBoard) -> Result<()> {
        let expected = self.graph.vertex_count();
        let found = other.graph.vertex_count();
        if expected != found {
            return Err(HexError::DimensionMismatch { expected, found });
        }

        for vertex in other.graph.vertex_ids() {
            self.graph
                .set_vertex_label(vertex, other.graph.get_vertex_label(vertex)?)?;
        }
        Ok(())
    }
}
