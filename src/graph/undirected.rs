use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::union_find::DisjointSet;
use super::*;

/// whether a walk using every edge exactly once exists
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
pub enum Eulerian {
    None,
    /// walk exists, but must start and end at different vertices
    Path,
    /// closed walk exists
    Circle,
}

impl Graph<Undirected> {
    /// kruskal. the result has the same vertex count and is a spanning forest
    /// if `self` is not connected. edges of equal weight are considered in insertion order.
    pub fn minimum_spanning_tree(&self) -> Self {
        let nr_vertices = self.vertex_count();
        let mut components = DisjointSet::new(nr_vertices);
        let mut tree = Self::with_options(nr_vertices, self.options);
        let by_weight = self.edges.iter().sorted_by(|a, b| a.weight.total_cmp(&b.weight));
        for edge in by_weight {
            if tree.edge_count() + 1 == nr_vertices {
                break;
            }
            //edges inside one component would close a cycle
            if components.union(edge.source, edge.destination) {
                tree.insert(*edge);
            }
        }
        log::debug!(
            "spanning forest of {nr_vertices} vertices: {} components, {} of {} edges kept",
            components.nr_sets(),
            tree.edge_count(),
            self.edge_count()
        );
        tree
    }

    pub fn eulerian(&self) -> Eulerian {
        if !self.connected() {
            return Eulerian::None;
        }
        let mut nr_odd = 0;
        for links in &self.adjacency {
            if links.len() % 2 == 1 {
                nr_odd += 1;
                if nr_odd > 2 {
                    return Eulerian::None;
                }
            }
        }
        match nr_odd {
            0 => Eulerian::Circle,
            2 => Eulerian::Path,
            _ => Eulerian::None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rand::{Lcg, random_edges};

    fn nr_components(g: &UndirectedGraph) -> usize {
        let mut sets = DisjointSet::new(g.vertex_count());
        for e in g.edges() {
            sets.union(e.source, e.destination);
        }
        sets.nr_sets()
    }

    #[test]
    fn spanning_tree_of_cycle_drops_heaviest_edge() {
        let g = UndirectedGraph::from_edges([(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0), (3, 0, 10.0)], 4)
            .unwrap();
        let tree = g.minimum_spanning_tree();
        assert_eq!(tree.edge_count(), 3);
        assert_eq!(tree.total_weight(), 6.0);
        assert!(tree.edges().iter().all(|e| e.weight != 10.0));
        assert!(tree.connected());
        //source untouched
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.edges()[3], Edge::new(3, 0, 10.0));
    }

    #[test]
    fn spanning_forest_of_disjoint_triangles() {
        let g = UndirectedGraph::from_edges(
            [(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0), (3, 4, 1.0), (4, 5, 1.0), (5, 3, 1.0)],
            6,
        )
        .unwrap();
        let forest = g.minimum_spanning_tree();
        assert_eq!(forest.vertex_count(), 6);
        assert_eq!(forest.edge_count(), 4);
        assert!(!forest.connected());
    }

    #[test]
    fn spanning_tree_edge_counts_on_random_graphs() {
        let mut rng = Lcg::new(12345);
        for round in 0..50 {
            let n = 1 + round % 17;
            let g = UndirectedGraph::from_edges(random_edges(&mut rng, n, round), n).unwrap();
            let forest = g.minimum_spanning_tree();
            assert_eq!(forest.vertex_count(), n);
            assert_eq!(forest.edge_count(), n - nr_components(&g));
            assert_eq!(nr_components(&forest), nr_components(&g));
            assert!(forest.total_weight() <= g.total_weight());
        }
    }

    #[test]
    fn spanning_tree_equal_weights_keep_insertion_order() {
        let g = UndirectedGraph::from_edges([(0, 1, 1.0), (1, 2, 1.0), (0, 2, 1.0)], 3).unwrap();
        let tree = g.minimum_spanning_tree();
        assert_eq!(tree.edges(), &[Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0)]);
    }

    #[test]
    fn spanning_tree_ignores_self_loops_and_keeps_options() {
        let g = UndirectedGraph::from_edges_with_options(
            [(0, 0, 0.0), (0, 1, 5.0), (0, 1, 2.0)],
            2,
            crate::GraphOptions::rejecting(),
        )
        .unwrap();
        let tree = g.minimum_spanning_tree();
        assert_eq!(tree.edges(), &[Edge::new(0, 1, 2.0)]);
        assert_eq!(tree.options(), g.options());
    }

    #[test]
    fn eulerian_triangle_path_star() {
        let triangle = UndirectedGraph::from_edges([(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)], 3).unwrap();
        assert_eq!(triangle.eulerian(), Eulerian::Circle);

        let path = UndirectedGraph::from_edges([(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)], 4).unwrap();
        assert_eq!(path.eulerian(), Eulerian::Path);

        let star = UndirectedGraph::from_edges([(0, 1, 1.0), (0, 2, 1.0), (0, 3, 1.0)], 4).unwrap();
        assert_eq!(star.eulerian(), Eulerian::None);
    }

    #[test]
    fn eulerian_needs_connectivity() {
        let two_triangles = UndirectedGraph::from_edges(
            [(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0), (3, 4, 1.0), (4, 5, 1.0), (5, 3, 1.0)],
            6,
        )
        .unwrap();
        assert_eq!(two_triangles.eulerian(), Eulerian::None);
        assert_eq!(UndirectedGraph::new(0).eulerian(), Eulerian::Circle);
    }

    #[test]
    fn eulerian_self_loop_counts_twice() {
        //degrees: 0 -> 1, 1 -> 1 + 2
        let g = UndirectedGraph::from_edges([(0, 1, 1.0), (1, 1, 1.0)], 2).unwrap();
        assert_eq!(g.degree(1).unwrap(), 3);
        assert_eq!(g.eulerian(), Eulerian::Path);

        let lonely_loop = UndirectedGraph::from_edges([(0, 0, 1.0)], 1).unwrap();
        assert_eq!(lonely_loop.eulerian(), Eulerian::Circle);
    }

    #[test]
    fn eulerian_names() {
        let names = [Eulerian::None, Eulerian::Path, Eulerian::Circle].map(|e| e.to_string());
        assert_eq!(names, ["None", "Path", "Circle"]);
    }
}
