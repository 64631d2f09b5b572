//! Generic undirected weighted graph
//!
//! Vertices are stored densely and addressed by [`VertexId`]. Each vertex
//! carries a label of type `V` and an adjacency list of [`Edge`]s whose
//! weights are of type `E`. Adjacency is always kept symmetric.

use std::fmt;

use crate::{HexError, Result};

/// Index of a vertex inside a [`Graph`]
///
/// Ids are only handed out by the graph (or by the board wrapping it), so
/// an id is always in range for the graph that produced it. Ids are still
/// checked on use, since nothing stops a caller from passing an id minted by
/// a different graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    pub(crate) fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Returns the raw index of this vertex
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<VertexId> for usize {
    fn from(id: VertexId) -> Self {
        id.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// One half of an undirected edge, as stored in a vertex's adjacency list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<E> {
    /// The vertex on the other end of the edge
    pub neighbor: VertexId,

    /// Weight of the edge
    pub weight: E,
}

#[derive(Debug, Clone)]
struct Vertex<V, E> {
    label: V,
    edges: Vec<Edge<E>>,
}

impl<V, E> Vertex<V, E> {
    fn new(label: V) -> Self {
        Vertex {
            label,
            edges: Vec::new(),
        }
    }

    // position of `neighbor` in the adjacency list
    fn find(&self, neighbor: VertexId) -> Option<usize> {
        self.edges.iter().position(|e| e.neighbor == neighbor)
    }
}

/// Undirected graph with labelled vertices and weighted edges
///
/// # Example
///
/// ```
/// use hexgraph_mc::Graph;
///
/// let mut graph: Graph<char, u32> = Graph::new();
/// let a = graph.add_vertex('a');
/// let b = graph.add_vertex('b');
///
/// graph.add_edge(a, b, 3)?;
/// assert!(graph.is_adjacent(b, a)?);
/// assert_eq!(graph.get_edge_weight(b, a)?, 3);
/// # Ok::<(), hexgraph_mc::HexError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph<V, E> {
    vertices: Vec<Vertex<V, E>>,
    edge_count: usize,
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Graph {
            vertices: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<V: Clone, E: Clone> Graph<V, E> {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        Graph {
            vertices: Vec::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Returns the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the id for `index` if such a vertex exists
    pub fn vertex(&self, index: usize) -> Option<VertexId> {
        (index < self.vertices.len()).then(|| VertexId::new(index))
    }

    /// Iterates over all vertex ids in index order
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId::new)
    }

    fn validate(&self, x: VertexId) -> Result<()> {
        if x.0 < self.vertices.len() {
            Ok(())
        } else {
            Err(HexError::InvalidVertex {
                index: x.0,
                vertex_count: self.vertices.len(),
            })
        }
    }

    /// Appends a vertex with the given label and returns its id
    pub fn add_vertex(&mut self, label: V) -> VertexId {
        self.vertices.push(Vertex::new(label));
        VertexId::new(self.vertices.len() - 1)
    }

    /// Adds an edge between `x` and `y`
    ///
    /// If the edge already exists only its weight is updated, so the edge
    /// count does not change. Self-loops are rejected.
    pub fn add_edge(&mut self, x: VertexId, y: VertexId, weight: E) -> Result<()> {
        self.validate(x)?;
        self.validate(y)?;
        if x == y {
            return Err(HexError::SelfLoop(x.0));
        }

        if self.is_adjacent(x, y)? {
            return self.set_edge_weight(x, y, weight);
        }

        self.vertices[x.0].edges.push(Edge {
            neighbor: y,
            weight: weight.clone(),
        });
        self.vertices[y.0].edges.push(Edge {
            neighbor: x,
            weight,
        });
        self.edge_count += 1;
        Ok(())
    }

    /// Returns true if there is an edge between `x` and `y`
    pub fn is_adjacent(&self, x: VertexId, y: VertexId) -> Result<bool> {
        self.validate(x)?;
        self.validate(y)?;
        Ok(self.vertices[x.0].find(y).is_some())
    }

    /// Returns the weight of the edge between `x` and `y`
    ///
    /// Fails with [`HexError::MissingEdge`] if there is no such edge.
    pub fn get_edge_weight(&self, x: VertexId, y: VertexId) -> Result<E> {
        self.validate(x)?;
        self.validate(y)?;
        let vertex = &self.vertices[x.0];
        vertex
            .find(y)
            .map(|i| vertex.edges[i].weight.clone())
            .ok_or(HexError::MissingEdge { from: x.0, to: y.0 })
    }

    /// Overwrites the weight of an existing edge, on both endpoints
    pub fn set_edge_weight(&mut self, x: VertexId, y: VertexId, weight: E) -> Result<()> {
        self.validate(x)?;
        self.validate(y)?;
        let missing = HexError::MissingEdge { from: x.0, to: y.0 };
        let i = self.vertices[x.0].find(y).ok_or(missing)?;
        let j = self.vertices[y.0]
            .find(x)
            .ok_or(HexError::MissingEdge { from: y.0, to: x.0 })?;

        self.vertices[x.0].edges[i].weight = weight.clone();
        self.vertices[y.0].edges[j].weight = weight;
        Ok(())
    }

    /// Iterates over the neighbors of `v` in the order their edges were added
    pub fn neighbors(&self, v: VertexId) -> Result<impl Iterator<Item = VertexId> + '_> {
        self.validate(v)?;
        Ok(self.vertices[v.0].edges.iter().map(|e| e.neighbor))
    }

    /// Collects the neighbors of `v` in the order their edges were added
    pub fn get_neighbors(&self, v: VertexId) -> Result<Vec<VertexId>> {
        Ok(self.neighbors(v)?.collect())
    }

    /// Returns the label of `x`
    pub fn get_vertex_label(&self, x: VertexId) -> Result<V> {
        self.validate(x)?;
        Ok(self.vertices[x.0].label.clone())
    }

    /// Replaces the label of `x`
    pub fn set_vertex_label(&mut self, x: VertexId, label: V) -> Result<()> {
        self.validate(x)?;
        self.vertices[x.0].label = label;
        Ok(())
    }

    /// Removes every vertex and edge
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edge_count = 0;
    }

    /// Replaces the contents of this graph with a copy of `other`
    ///
    /// Labels are copied first, then every undirected edge exactly once by
    /// visiting only the pairs `i > j`. This relies on `other` having no
    /// self-loops, which `add_edge` guarantees.
    pub fn copy_from(&mut self, other: &Graph<V, E>) -> Result<()> {
        self.clear();
        self.vertices.reserve(other.vertex_count());
        for vertex in &other.vertices {
            self.add_vertex(vertex.label.clone());
        }

        for (i, vertex) in other.vertices.iter().enumerate() {
            for edge in vertex.edges.iter().filter(|e| e.neighbor.0 < i) {
                self.add_edge(VertexId::new(i), edge.neighbor, edge.weight.clone())?;
            }
        }
        Ok(())
    }
}
