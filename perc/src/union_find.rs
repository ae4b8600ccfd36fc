/// Disjoint-set forest over the elements `0..n`.
///
/// Sets are merged by size, so every tree has height at most `log2(n)` and
/// [`find`](UnionFind::find) works through a shared reference. Paths walked
/// by [`union`](UnionFind::union) are additionally halved.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets `{0}, {1}, ..., {n - 1}`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// # Panics
    ///
    /// If `x >= len()`.
    pub fn find(&self, mut x: usize) -> usize {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    pub fn connected(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merges the sets containing `a` and `b`. The smaller tree is hung
    /// under the root of the larger one.
    ///
    /// Returns `false` if both were already in the same set.
    ///
    /// # Panics
    ///
    /// If `a` or `b` is out of range.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find_halving(a);
        let rb = self.find_halving(b);
        if ra == rb {
            return false;
        }

        let (small, large) = if self.size[ra] < self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.count -= 1;
        true
    }

    fn find_halving(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }
}

////////////////////////////////////////////////////////////////////////////////
