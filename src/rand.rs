use crate::graph::{Edge, Vertex};

///  linear congruential generator, reproducible graphs for tests
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next(&mut self) -> u32 {
        let old = self.state;
        //values by Donald Knuth
        self.state = old.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (old >> 16) as u32 //bits in middle have highest quality
    }

    pub fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        self.next() as usize % bound
    }
}

/// `nr_edges` edges between vertices in `0..nr_vertices` with integral weights in `0..100`.
/// self-loops and parallel edges may occur.
pub fn random_edges(rng: &mut Lcg, nr_vertices: usize, nr_edges: usize) -> Vec<Edge> {
    (0..nr_edges)
        .map(|_| {
            let source: Vertex = rng.below(nr_vertices);
            let destination: Vertex = rng.below(nr_vertices);
            Edge::new(source, destination, rng.below(100) as f64)
        })
        .collect()
}
