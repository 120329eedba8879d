#![warn(clippy::all, rust_2018_idioms)]

/// adjacency list storage and the algorithms working on it
pub mod graph;
pub use graph::{
    Directed, DirectedGraph, Direction, Edge, Eulerian, Graph, Link, Path, Undirected,
    UndirectedGraph, Vertex,
};

mod error;
pub use error::{GraphError, GraphResult};

/// construction time settings of a graph
mod options;
pub use options::{GraphOptions, OutOfRangePolicy};

/// reading and writing graphs as `.ron` files
mod saves;
pub use saves::SavedGraph;

/// the text `graph-tool` prints
mod report;
pub use report::write_report;

#[cfg(test)]
mod rand;
