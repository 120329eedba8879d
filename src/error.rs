use thiserror::Error;

use crate::graph::Vertex;

#[derive(Debug, Error)]
pub enum GraphError {
    /// a vertex argument lies outside `0..vertex_count`
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRange { vertex: Vertex, vertex_count: usize },

    /// the adjacency table for this many vertices can not be allocated
    #[error("can not allocate a graph with {vertex_count} vertices")]
    TooManyVertices { vertex_count: usize },

    /// dijkstra only works with non-negative weights
    #[error("negative weight {weight} on edge ({from}, {to})")]
    NegativeWeight { from: Vertex, to: Vertex, weight: f64 },

    #[error("edge ({from}, {to}) has a NaN weight")]
    InvalidWeight { from: Vertex, to: Vertex },

    /// a saved graph was loaded as the wrong flavor
    #[error("saved graph has directed = {found}, but directed = {expected} was requested")]
    WrongDirection { expected: bool, found: bool },

    #[error("ron: {0}")]
    Ron(#[from] ron::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
