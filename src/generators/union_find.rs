use crate::maze::CellIx;

/// Disjoint-set over cell indices, tracking which cells Kruskal's carve has
/// already joined into one component.
pub struct UnionFind {
    representatives: Vec<CellIx>,
}

impl UnionFind {
    /// Every cell starts as its own representative.
    pub fn new(size: usize) -> Self {
        UnionFind {
            representatives: (0..size).collect(),
        }
    }

    /// Follow the representative chain until it reaches its root. No path
    /// compression: chain shape stays exactly as `union` built it.
    ///
    /// Iterative with a step bound rather than recursive: a cyclic chain is
    /// a bug in `union` usage, so the walk panics instead of overflowing the
    /// call stack.
    pub fn find(&self, mut x: CellIx) -> CellIx {
        let mut steps = 0;
        while self.representatives[x] != x {
            x = self.representatives[x];
            steps += 1;
            assert!(
                steps <= self.representatives.len(),
                "cyclic representative chain through cell {x}"
            );
        }
        x
    }

    /// Point `a`'s own entry at `b`'s root.
    ///
    /// Deliberately asymmetric: `a`'s entry is overwritten, not its root's.
    /// Connectivity comes out the same either way, but the chain shape (and
    /// so the carve result for a fixed seed) depends on this exact form.
    pub fn union(&mut self, a: CellIx, b: CellIx) {
        self.representatives[a] = self.find(b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_sets_are_singletons() {
        let uf = UnionFind::new(4);
        for i in 0..4 {
            assert_eq!(uf.find(i), i);
        }
    }

    #[test]
    fn find_is_idempotent() {
        let mut uf = UnionFind::new(6);
        uf.union(0, 1);
        uf.union(1, 2);
        uf.union(4, 5);
        for i in 0..6 {
            assert_eq!(uf.find(uf.find(i)), uf.find(i));
        }
    }

    #[test]
    fn union_joins_components() {
        let mut uf = UnionFind::new(5);
        uf.union(0, 1);
        assert_eq!(uf.find(0), uf.find(1));
        assert_ne!(uf.find(0), uf.find(2));
        uf.union(2, 0);
        assert_eq!(uf.find(2), uf.find(1));
    }

    #[test]
    fn union_overwrites_first_argument_entry() {
        let mut uf = UnionFind::new(4);
        uf.union(1, 2);
        uf.union(2, 3);
        // 1 still points at 2, which now points at 3: the asymmetric update
        // rewrites entries, never roots.
        assert_eq!(uf.find(1), 3);
        assert_eq!(uf.find(0), 0);
    }

    #[test]
    fn union_of_roots_matches_kruskal_usage() {
        let mut uf = UnionFind::new(6);
        // Kruskal always unions roots, as in `union(find(a), find(b))`.
        let (ra, rb) = (uf.find(0), uf.find(1));
        uf.union(ra, rb);
        let (ra, rb) = (uf.find(1), uf.find(2));
        uf.union(ra, rb);
        assert_eq!(uf.find(0), uf.find(2));
    }
}
