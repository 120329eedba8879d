use std::io::Write;

use itertools::Itertools;

use crate::error::GraphResult;
use crate::graph::{Direction, Graph, Vertex};
use crate::saves::SavedGraph;

/// dump, connectivity and distances, shared by both flavors
fn write_common<D: Direction>(
    graph: &Graph<D>,
    start: Vertex,
    distances: &[f64],
    out: &mut impl Write,
) -> GraphResult<()> {
    write!(out, "{graph}")?;
    writeln!(out, "connected: {}", graph.connected())?;
    writeln!(out, "distances from {start}: [{}]", distances.iter().join(", "))?;
    Ok(())
}

/// everything `graph-tool` prints about a saved graph.
/// nothing is written if `start` is out of range or dijkstra can not run.
pub fn write_report(saved: SavedGraph, start: Vertex, out: &mut impl Write) -> GraphResult<()> {
    if saved.directed {
        let graph = saved.into_directed()?;
        let distances = graph.dijkstra(start)?;
        write_common(&graph, start, &distances, out)?;
        writeln!(out, "in-degrees: [{}]", graph.in_degrees().iter().join(", "))?;
        writeln!(out, "transpose:")?;
        write!(out, "{}", graph.transpose())?;
    } else {
        let graph = saved.into_undirected()?;
        let distances = graph.dijkstra(start)?;
        write_common(&graph, start, &distances, out)?;
        writeln!(out, "eulerian: {}", graph.eulerian())?;
        let tree = graph.minimum_spanning_tree();
        writeln!(
            out,
            "minimum spanning tree: {} edges, total weight {}",
            tree.edge_count(),
            tree.total_weight()
        )?;
        write!(out, "{tree}")?;
    }
    Ok(())
}
