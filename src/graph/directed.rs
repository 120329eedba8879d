use super::*;

impl Graph<Directed> {
    /// every edge `(u, v, w)` becomes `(v, u, w)`, edge order is kept.
    pub fn transpose(&self) -> Self {
        let mut res = Self::with_options(self.vertex_count(), self.options);
        for edge in &self.edges {
            res.insert(edge.reversed());
        }
        res
    }

    pub fn in_degrees(&self) -> Vec<usize> {
        let mut res = vec![0; self.vertex_count()];
        for edge in &self.edges {
            res[edge.destination] += 1;
        }
        res
    }
}
