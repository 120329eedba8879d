use std::{fs, io::Write, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Directed, Direction, Edge, Graph, Undirected};
use crate::options::GraphOptions;

/// graph as stored in a `.ron` file
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SavedGraph {
    pub directed: bool,
    pub vertex_count: usize,
    #[serde(default)]
    pub options: GraphOptions,
    pub edges: Vec<Edge>,
}

impl SavedGraph {
    pub fn from_graph<D: Direction>(graph: &Graph<D>) -> Self {
        Self {
            directed: D::DIRECTED,
            vertex_count: graph.vertex_count(),
            options: graph.options(),
            edges: graph.edges().to_vec(),
        }
    }

    fn into_graph<D: Direction>(self) -> GraphResult<Graph<D>> {
        if self.directed != D::DIRECTED {
            return Err(GraphError::WrongDirection {
                expected: D::DIRECTED,
                found: self.directed,
            });
        }
        Graph::from_edges_with_options(self.edges, self.vertex_count, self.options)
    }

    pub fn into_directed(self) -> GraphResult<Graph<Directed>> {
        self.into_graph()
    }

    pub fn into_undirected(self) -> GraphResult<Graph<Undirected>> {
        self.into_graph()
    }

    pub fn to_ron_string(&self) -> GraphResult<String> {
        let config = ron::ser::PrettyConfig::new()
            .compact_arrays(true)
            .new_line("\n".into())
            .indentor("\t".into());
        Ok(ron::ser::to_string_pretty(self, config)?)
    }

    pub fn from_ron_str(s: &str) -> GraphResult<Self> {
        Ok(ron::from_str(s).map_err(|e| e.code)?)
    }

    pub fn store(&self, path: impl AsRef<Path>) -> GraphResult<()> {
        let as_str = self.to_ron_string()?;
        let mut file = fs::File::create(path.as_ref())?;
        file.write_all(as_str.as_bytes())?;
        log::debug!(
            "stored graph with {} vertices and {} edges in {}",
            self.vertex_count,
            self.edges.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> GraphResult<Self> {
        let file_str = fs::read_to_string(path.as_ref())?;
        Self::from_ron_str(&file_str)
    }
}
