/// partition of `0..len` into disjoint sets.
/// uses path halving on lookup and merges the smaller set below the larger one.
pub struct DisjointSet {
    parent: Vec<usize>,
    //only meaningful for roots
    size: Vec<usize>,
    nr_sets: usize,
}

impl DisjointSet {
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            nr_sets: len,
        }
    }

    pub fn nr_sets(&self) -> usize {
        self.nr_sets
    }

    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            //point to grandparent, halves the path on every lookup
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// returns whether `a` and `b` were in different sets before
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut root_a, mut root_b) = (self.find(a), self.find(b));
        if root_a == root_b {
            return false;
        }
        if self.size[root_a] < self.size[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }
        self.parent[root_b] = root_a;
        self.size[root_a] += self.size[root_b];
        self.nr_sets -= 1;
        true
    }

    #[cfg(test)]
    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}
