//! Disjoint-set over the fragments of one round.
//!
//! Union by size with a plain parent walk in `find`. Each round builds a fresh
//! forest over that round's V-node indices, so trees stay shallow and path
//! compression buys nothing.

/// Union-Find with union by size.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    /// Creates `n` singleton sets `{0}, {1}, ..., {n-1}`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of the set containing `x`.
    ///
    /// # Panics
    /// Panics if `x >= len()`.
    pub fn find(&self, x: usize) -> usize {
        let mut x = x;
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// The root of the smaller tree is attached under the root of the larger
    /// one. On equal sizes `y`'s root becomes the child.
    ///
    /// Returns `false` if `x` and `y` were already in the same set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        if self.size[root_x] < self.size[root_y] {
            self.parent[root_x] = root_y;
            self.size[root_y] += self.size[root_x];
        } else {
            self.parent[root_y] = root_x;
            self.size[root_x] += self.size[root_y];
        }

        true
    }
}

#[cfg(test)]
impl UnionFind {
    /// Size of the set containing `x`.
    pub(crate) fn set_size(&self, x: usize) -> usize {
        self.size[self.find(x)]
    }

    pub(crate) fn connected(&self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn roots_are_self_parented(
            n in 1_usize..30,
            ops in proptest::collection::vec((0_usize..30, 0_usize..30), 0..60),
        ) {
            let mut uf = UnionFind::new(n);
            for &(x, y) in &ops {
                if x < n && y < n {
                    uf.union(x, y);
                }
            }

            let mut total = 0;
            for i in 0..n {
                let root = uf.find(i);
                prop_assert_eq!(uf.find(root), root);
                if root == i {
                    total += uf.set_size(i);
                }
            }
            prop_assert_eq!(total, n);
        }
    }
}
