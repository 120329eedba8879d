use std::cmp::Ordering;
use std::collections::BinaryHeap;

use bitvec::prelude as bv;

use super::*;

type VisitedSet = bv::BitVec<u32>;

/// shortest path found by [`Graph::shortest_path`]
#[derive(Clone, PartialEq, Debug)]
pub struct Path {
    /// starts with the start vertex, ends with the destination
    pub vertices: Vec<Vertex>,
    pub distance: f64,
}

/// entry of the priority queue.
/// ordered reversed, so that [`BinaryHeap`] pops the smallest distance first,
/// equal distances pop the smaller vertex first.
#[derive(Clone, Copy, Debug)]
struct Tentative {
    distance: f64,
    vertex: Vertex,
}

impl Ord for Tentative {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for Tentative {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Tentative {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Tentative {}

struct Search {
    distances: Vec<f64>,
    predecessors: Vec<Option<Vertex>>,
}

impl<D: Direction> Graph<D> {
    /// true iff every vertex can be reached from vertex 0 walking along stored adjacency entries.
    /// for directed graphs this only follows edges forward.
    pub fn connected(&self) -> bool {
        let nr_vertices = self.vertex_count();
        if nr_vertices == 0 {
            return true;
        }
        let mut visited = VisitedSet::repeat(false, nr_vertices);
        let mut stack = vec![0];
        visited.set(0, true);
        while let Some(v) = stack.pop() {
            for link in &self.adjacency[v] {
                //mark before push, every vertex enters the stack at most once
                if !visited[link.neighbor] {
                    visited.set(link.neighbor, true);
                    stack.push(link.neighbor);
                }
            }
        }
        visited.all()
    }

    /// distances from `start` to every vertex, unreachable vertices are at infinity.
    pub fn dijkstra(&self, start: Vertex) -> GraphResult<Vec<f64>> {
        Ok(self.search(start, None)?.distances)
    }

    /// distance from `start` to `destination`, infinity if unreachable.
    pub fn dijkstra_to(&self, start: Vertex, destination: Vertex) -> GraphResult<f64> {
        let search = self.search(start, Some(destination))?;
        Ok(search.distances[destination])
    }

    /// `None` if `destination` can not be reached from `start`.
    pub fn shortest_path(&self, start: Vertex, destination: Vertex) -> GraphResult<Option<Path>> {
        let Search { distances, predecessors } = self.search(start, Some(destination))?;
        let distance = distances[destination];
        if distance.is_infinite() {
            return Ok(None);
        }
        let mut vertices = vec![destination];
        let mut curr = destination;
        while let Some(pred) = predecessors[curr] {
            vertices.push(pred);
            curr = pred;
        }
        debug_assert_eq!(curr, start);
        vertices.reverse();
        Ok(Some(Path { vertices, distance }))
    }

    fn check_non_negative(&self) -> GraphResult<()> {
        match self.edges.iter().find(|e| e.weight < 0.0) {
            Some(e) => Err(GraphError::NegativeWeight {
                from: e.source,
                to: e.destination,
                weight: e.weight,
            }),
            None => Ok(()),
        }
    }

    /// stops early once `target` is finalized, if there is one
    fn search(&self, start: Vertex, target: Option<Vertex>) -> GraphResult<Search> {
        self.check_vertex(start)?;
        if let Some(target) = target {
            self.check_vertex(target)?;
        }
        self.check_non_negative()?;

        let nr_vertices = self.vertex_count();
        let mut distances = vec![f64::INFINITY; nr_vertices];
        let mut predecessors = vec![None; nr_vertices];
        let mut finalized = VisitedSet::repeat(false, nr_vertices);
        let mut queue = BinaryHeap::new();

        distances[start] = 0.0;
        queue.push(Tentative { distance: 0.0, vertex: start });
        let mut nr_pops = 0usize;
        while let Some(Tentative { vertex, .. }) = queue.pop() {
            nr_pops += 1;
            //stale entry, a shorter one was popped earlier
            if finalized[vertex] {
                continue;
            }
            finalized.set(vertex, true);
            if target == Some(vertex) {
                break;
            }
            let dist = distances[vertex];
            for link in &self.adjacency[vertex] {
                let new_dist = dist + link.weight;
                if new_dist < distances[link.neighbor] {
                    distances[link.neighbor] = new_dist;
                    predecessors[link.neighbor] = Some(vertex);
                    queue.push(Tentative { distance: new_dist, vertex: link.neighbor });
                }
            }
        }
        log::debug!(
            "dijkstra from {start}: {nr_pops} pops, {} of {nr_vertices} vertices finalized",
            finalized.count_ones()
        );
        Ok(Search { distances, predecessors })
    }
}
