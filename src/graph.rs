use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::options::{GraphOptions, OutOfRangePolicy};

mod algos;
mod directed;
mod undirected;
mod union_find;

pub use algos::Path;
pub use undirected::Eulerian;

/// dense index in `0..vertex_count`
pub type Vertex = usize;

/// decides at compile time whether edges are stored one way or both ways
pub trait Direction: Clone + Copy + fmt::Debug + Default {
    const DIRECTED: bool;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Directed;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Undirected;

impl Direction for Directed {
    const DIRECTED: bool = true;
}

impl Direction for Undirected {
    const DIRECTED: bool = false;
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Edge {
    pub source: Vertex,
    pub destination: Vertex,
    pub weight: f64,
}

impl Edge {
    pub const fn new(source: Vertex, destination: Vertex, weight: f64) -> Self {
        Self { source, destination, weight }
    }

    pub const fn reversed(&self) -> Self {
        Self::new(self.destination, self.source, self.weight)
    }
}

impl From<(Vertex, Vertex, f64)> for Edge {
    fn from((source, destination, weight): (Vertex, Vertex, f64)) -> Self {
        Self::new(source, destination, weight)
    }
}

/// entry in the adjacency list of some vertex
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Link {
    pub neighbor: Vertex,
    pub weight: f64,
}

#[derive(Clone, Debug)]
pub struct Graph<D: Direction> {
    //position i lists all neighbors of vertex i.
    //undirected graphs store every edge at both endpoints, so a self-loop appears twice.
    adjacency: Vec<Vec<Link>>,

    //every edge ever added, in insertion order
    edges: Vec<Edge>,

    options: GraphOptions,
    direction: PhantomData<D>,
}

pub type DirectedGraph = Graph<Directed>;
pub type UndirectedGraph = Graph<Undirected>;

impl<D: Direction> Graph<D> {
    pub fn new(vertex_count: usize) -> Self {
        Self::with_options(vertex_count, GraphOptions::default())
    }

    pub fn with_options(vertex_count: usize, options: GraphOptions) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edges: Vec::new(),
            options,
            direction: PhantomData,
        }
    }

    pub fn from_edges<E: Into<Edge>>(
        edges: impl IntoIterator<Item = E>,
        vertex_count: usize,
    ) -> GraphResult<Self> {
        Self::from_edges_with_options(edges, vertex_count, GraphOptions::default())
    }

    pub fn from_edges_with_options<E: Into<Edge>>(
        edges: impl IntoIterator<Item = E>,
        vertex_count: usize,
        options: GraphOptions,
    ) -> GraphResult<Self> {
        let mut res = Self::with_options(0, options);
        res.grow_to(vertex_count)?;
        for edge in edges {
            let Edge { source, destination, weight } = edge.into();
            res.add_edge(source, destination, weight)?;
        }
        Ok(res)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_directed(&self) -> bool {
        D::DIRECTED
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    /// all edges in the order they were added
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    pub fn neighbors(&self, v: Vertex) -> GraphResult<&[Link]> {
        self.check_vertex(v)?;
        Ok(&self.adjacency[v])
    }

    /// number of adjacency entries of `v`. self-loops of undirected graphs count twice.
    pub fn degree(&self, v: Vertex) -> GraphResult<usize> {
        Ok(self.neighbors(v)?.len())
    }

    /// only ever grows, a smaller `vertex_count` leaves the graph unchanged.
    /// fails instead of aborting if the adjacency table can not be allocated.
    pub fn grow_to(&mut self, vertex_count: usize) -> GraphResult<()> {
        let old_count = self.vertex_count();
        if vertex_count > old_count {
            log::debug!("growing graph from {old_count} to {vertex_count} vertices");
            if let Err(e) = self.adjacency.try_reserve_exact(vertex_count - old_count) {
                log::warn!("can not grow graph to {vertex_count} vertices: {e}");
                return Err(GraphError::TooManyVertices { vertex_count });
            }
            self.adjacency.resize_with(vertex_count, Vec::new);
        }
        Ok(())
    }

    pub fn add_edge(&mut self, source: Vertex, destination: Vertex, weight: f64) -> GraphResult<()> {
        if weight.is_nan() {
            log::warn!("rejected edge ({source}, {destination}) with NaN weight");
            return Err(GraphError::InvalidWeight { from: source, to: destination });
        }
        let largest = usize::max(source, destination);
        if largest >= self.vertex_count() {
            match self.options.out_of_range {
                OutOfRangePolicy::Grow => {
                    //`usize::MAX` can never be a valid index
                    let Some(needed) = largest.checked_add(1) else {
                        log::warn!("rejected edge ({source}, {destination}): vertex index overflows");
                        return Err(GraphError::OutOfRange {
                            vertex: largest,
                            vertex_count: self.vertex_count(),
                        });
                    };
                    self.grow_to(needed)?;
                },
                OutOfRangePolicy::Reject => {
                    log::warn!(
                        "rejected edge ({source}, {destination}) in graph with {} vertices",
                        self.vertex_count()
                    );
                    return Err(GraphError::OutOfRange {
                        vertex: largest,
                        vertex_count: self.vertex_count(),
                    });
                },
            }
        }
        self.insert(Edge::new(source, destination, weight));
        Ok(())
    }

    /// stores an edge already known to be valid
    fn insert(&mut self, edge: Edge) {
        debug_assert!(edge.source < self.vertex_count());
        debug_assert!(edge.destination < self.vertex_count());
        debug_assert!(!edge.weight.is_nan());
        self.adjacency[edge.source].push(Link { neighbor: edge.destination, weight: edge.weight });
        if !D::DIRECTED {
            self.adjacency[edge.destination].push(Link { neighbor: edge.source, weight: edge.weight });
        }
        self.edges.push(edge);
    }

    fn check_vertex(&self, v: Vertex) -> GraphResult<()> {
        if v < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::OutOfRange { vertex: v, vertex_count: self.vertex_count() })
        }
    }
}

/// one line per vertex: `v ->   neighbor(weight)\t...`
impl<D: Direction> fmt::Display for Graph<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, links) in self.adjacency.iter().enumerate() {
            write!(f, "{v} ->   ")?;
            for link in links {
                write!(f, "{}({})\t", link.neighbor, link.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
