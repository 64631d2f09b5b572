//! Win detection
//!
//! A player has won when their two walls are joined by a chain of cells of
//! their color. The check is an iterative depth-first search that only walks
//! through vertices of the player's color, starting from a cell of one wall
//! and stopping as soon as a designated cell of the opposite wall shows up
//! among the neighbors of a vertex on the stack.

use crate::{
    board::{Color, HexBoard},
    graph::VertexId,
    Result,
};

impl HexBoard {
    /// Returns the source and destination wall cells for `color`
    ///
    /// Blue runs from the top of the left wall to the bottom of the right
    /// wall, Red from the left end of the top wall to the right end of the
    /// bottom wall. Non-player colors have no walls.
    fn anchors(&self, color: Color) -> Option<(VertexId, VertexId)> {
        let n = self.absolute_dim();
        match color {
            Color::Blue => Some((
                self.absolute_vertex(1, 0),
                self.absolute_vertex(n - 2, n - 1),
            )),
            Color::Red => Some((
                self.absolute_vertex(0, 1),
                self.absolute_vertex(n - 1, n - 2),
            )),
            Color::Empty | Color::Blocked => None,
        }
    }

    /// Returns true if `color` has a path connecting its two walls
    ///
    /// Always false for [`Color::Empty`] and [`Color::Blocked`].
    pub fn is_victory(&self, color: Color) -> Result<bool> {
        let Some((src, dst)) = self.anchors(color) else {
            return Ok(false);
        };

        let graph = self.graph();
        let mut visited = vec![false; graph.vertex_count()];
        let mut stack = vec![src];

        while let Some(top) = stack.pop() {
            for neighbor in graph.neighbors(top)? {
                // the destination is a wall cell, so reaching it is enough
                if neighbor == dst {
                    return Ok(true);
                }

                let seen = &mut visited[neighbor.index()];
                if !*seen {
                    *seen = true;
                    if graph.get_vertex_label(neighbor)? == color {
                        stack.push(neighbor);
                    }
                }
            }
        }

        Ok(false)
    }
}
