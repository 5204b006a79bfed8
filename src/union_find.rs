/*!
# Union-Find

A disjoint-set structure over the elements `0..n` using **union-by-size** and **path halving**.
Together, both keep the amortized cost of every operation effectively constant.

Elements share the [`Node`] type with the graph representations, so a `UnionFind` can be used
directly on the nodes of a graph.
*/

use std::fmt::Display;

use itertools::Itertools;

use crate::{error::*, node::*};

/// Weighted quick-union with path halving.
///
/// `parent` forms a forest whose roots are the representatives of the sets.
/// `size[r]` is only meaningful if `r` is a root and then counts the elements of its set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionFind {
    parent: Vec<Node>,
    size: Vec<NumNodes>,
    num_sets: NumNodes,
}

impl UnionFind {
    /// Creates `n` singleton sets `{0}, {1}, ..., {n - 1}`
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect_vec(),
            size: vec![1; n as usize],
            num_sets: n,
        }
    }

    /// Creates `n` singleton sets.
    /// Fails with [`InvalidArgument::InvalidCount`] if `n` is negative or exceeds [`NumNodes`].
    pub fn try_new(n: i64) -> Result<Self> {
        Ok(Self::new(checked_count(n)?))
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns *true* if there are no elements (and thus no sets)
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets
    pub fn count(&self) -> NumNodes {
        self.num_sets
    }

    fn check(&self, p: Node) -> Result<Node> {
        checked_node(p, self.parent.len() as NumNodes)
    }

    /// Returns the representative of the set containing `p`.
    ///
    /// Every node visited on the way to the root is redirected to its grandparent (path halving),
    /// which never changes the set a node belongs to.
    /// ** Panics if `p >= n` **
    pub fn find(&mut self, mut p: Node) -> Node {
        while self.parent[p as usize] != p {
            let grandparent = self.parent[self.parent[p as usize] as usize];
            self.parent[p as usize] = grandparent;
            p = grandparent;
        }
        p
    }

    /// Checked variant of [`UnionFind::find`]
    pub fn try_find(&mut self, p: Node) -> Result<Node> {
        self.check(p)?;
        Ok(self.find(p))
    }

    /// Returns *true* if `p` and `q` are in the same set
    /// ** Panics if `p >= n || q >= n` **
    pub fn connected(&mut self, p: Node, q: Node) -> bool {
        self.find(p) == self.find(q)
    }

    /// Checked variant of [`UnionFind::connected`]
    pub fn try_connected(&mut self, p: Node, q: Node) -> Result<bool> {
        self.check(p)?;
        self.check(q)?;
        Ok(self.connected(p, q))
    }

    /// Merges the sets containing `p` and `q` and returns *true* if they were distinct.
    ///
    /// The root of the smaller set is attached below the root of the larger one.
    /// On a tie, the root of `q` is attached below the root of `p`.
    /// ** Panics if `p >= n || q >= n` **
    pub fn union(&mut self, p: Node, q: Node) -> bool {
        let i = self.find(p);
        let j = self.find(q);
        if i == j {
            return false;
        }

        let (root, child) = if self.size[i as usize] < self.size[j as usize] {
            (j, i)
        } else {
            (i, j)
        };

        self.parent[child as usize] = root;
        self.size[root as usize] += self.size[child as usize];
        self.num_sets -= 1;
        true
    }

    /// Checked variant of [`UnionFind::union`]. On error, no set is modified.
    pub fn try_union(&mut self, p: Node, q: Node) -> Result<bool> {
        self.check(p)?;
        self.check(q)?;
        Ok(self.union(p, q))
    }

    /// Returns the number of elements in the set containing `p`
    /// ** Panics if `p >= n` **
    pub fn set_size(&mut self, p: Node) -> NumNodes {
        let root = self.find(p);
        self.size[root as usize]
    }

    /// Checked variant of [`UnionFind::set_size`]
    pub fn try_set_size(&mut self, p: Node) -> Result<NumNodes> {
        self.check(p)?;
        Ok(self.set_size(p))
    }

    /// Returns the representatives of all sets in ascending order
    pub fn roots(&self) -> impl Iterator<Item = Node> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(i, &p)| (i as Node == p).then_some(p))
    }

    /// Returns all sets. Every set is sorted and sets are ordered by their smallest element.
    pub fn sets(&mut self) -> Vec<Vec<Node>> {
        let n = self.parent.len() as NumNodes;
        let mut index_of_root = vec![None; n as usize];
        let mut sets: Vec<Vec<Node>> = Vec::with_capacity(self.num_sets as usize);

        for u in 0..n {
            let root = self.find(u) as usize;
            let idx = *index_of_root[root].get_or_insert_with(|| {
                sets.push(Vec::new());
                sets.len() - 1
            });
            sets[idx].push(u);
        }

        sets
    }
}

/// Writes the parent of every element, separated by spaces
impl Display for UnionFind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.parent.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn new() {
        for n in 0..20 {
            let uf = UnionFind::new(n);
            assert_eq!(uf.count(), n);
            assert_eq!(uf.len(), n as usize);
            assert_eq!(uf.roots().collect_vec(), (0..n).collect_vec());
        }

        assert!(UnionFind::new(0).is_empty());
        assert_eq!(
            UnionFind::try_new(-1).unwrap_err(),
            InvalidArgument::InvalidCount { count: -1 }
        );
        assert_eq!(UnionFind::try_new(3).unwrap().count(), 3);
    }

    #[test]
    fn three_unions() {
        let mut uf = UnionFind::new(5);
        uf.union(0, 1);
        uf.union(1, 2);
        uf.union(3, 4);

        assert_eq!(uf.count(), 2);
        assert!(uf.connected(0, 2));
        assert!(!uf.connected(0, 3));
        assert_eq!(uf.set_size(2), 3);
        assert_eq!(uf.set_size(4), 2);
        assert_eq!(uf.sets(), vec![vec![0, 1, 2], vec![3, 4]]);
    }

    #[test]
    fn repeated_union() {
        let mut uf = UnionFind::new(2);
        assert!(uf.union(0, 1));
        assert_eq!(uf.count(), 1);
        assert!(!uf.union(0, 1));
        assert!(!uf.union(1, 0));
        assert_eq!(uf.count(), 1);
    }

    #[test]
    fn union_by_size() {
        let mut uf = UnionFind::new(6);

        // tie: root of the second operand goes below root of the first
        uf.union(0, 1);
        assert_eq!(uf.to_string(), "0 0 2 3 4 5");

        // smaller set {2} is attached below the larger {0, 1}, even as first operand
        uf.union(2, 1);
        assert_eq!(uf.to_string(), "0 0 0 3 4 5");

        uf.union(4, 3);
        uf.union(5, 3);
        assert_eq!(uf.to_string(), "0 0 0 4 4 4");

        // tie between {0, 1, 2} and {3, 4, 5}
        uf.union(3, 0);
        assert_eq!(uf.to_string(), "4 0 0 4 4 4");
        assert_eq!(uf.set_size(1), 6);
        assert_eq!(uf.roots().collect_vec(), vec![4]);
    }

    #[test]
    fn path_halving() {
        // union-by-size never builds the chain 4 -> 3 -> 2 -> 1 -> 0, so set it up by hand
        let mut uf = UnionFind {
            parent: vec![0, 0, 1, 2, 3],
            size: vec![5, 4, 3, 2, 1],
            num_sets: 1,
        };

        assert_eq!(uf.find(4), 0);
        // 4 -> 2 and 2 -> 0 got redirected, 3 and 1 were skipped
        assert_eq!(uf.parent, vec![0, 0, 0, 2, 2]);

        assert_eq!(uf.find(3), 0);
        assert_eq!(uf.parent, vec![0, 0, 0, 0, 2]);
        assert_eq!(uf.count(), 1);
    }

    #[test]
    fn out_of_range() {
        let mut uf = UnionFind::new(3);
        uf.union(0, 1);
        let before = uf.clone();

        let err = InvalidArgument::NodeOutOfRange { node: 3, n: 3 };
        assert_eq!(uf.try_union(0, 3), Err(err));
        assert_eq!(uf.try_union(3, 0), Err(err));
        assert_eq!(uf.try_connected(3, 0), Err(err));
        assert_eq!(uf.try_find(3), Err(err));
        assert_eq!(uf.try_set_size(3), Err(err));
        assert_eq!(uf, before);

        assert_eq!(uf.try_connected(0, 1), Ok(true));
        assert_eq!(uf.try_union(1, 2), Ok(true));
        assert_eq!(uf.try_find(2), uf.try_find(0));
        assert_eq!(uf.try_set_size(2), Ok(3));
    }

    #[test]
    #[should_panic]
    fn union_out_of_range() {
        UnionFind::new(2).union(0, 2);
    }

    #[test]
    fn display() {
        assert_eq!(UnionFind::new(0).to_string(), "");
        assert_eq!(UnionFind::new(3).to_string(), "0 1 2");
    }

    /// Compares against a naive labelling in which every union relabels a whole class
    #[test]
    fn random_unions() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1 as NumNodes, 10, 50, 200] {
            for _ in 0..10 {
                let mut uf = UnionFind::new(n);
                let mut label = (0..n).collect_vec();
                let mut num_labels = n;

                for _ in 0..(2 * n) {
                    let p = rng.random_range(0..n);
                    let q = rng.random_range(0..n);

                    let (lp, lq) = (label[p as usize], label[q as usize]);
                    if lp != lq {
                        label.iter_mut().filter(|l| **l == lq).for_each(|l| *l = lp);
                        num_labels -= 1;
                    }

                    assert_eq!(uf.union(p, q), lp != lq);
                    assert_eq!(uf.count(), num_labels);
                    assert_eq!(uf.roots().count() as NumNodes, uf.count());
                }

                for _ in 0..n {
                    let p = rng.random_range(0..n);
                    let q = rng.random_range(0..n);
                    assert_eq!(uf.connected(p, q), label[p as usize] == label[q as usize]);

                    let root = uf.find(p);
                    assert_eq!(uf.find(root), root);
                    assert_eq!(
                        uf.set_size(p) as usize,
                        label.iter().filter(|&&l| l == label[p as usize]).count()
                    );
                }

                let sets = uf.sets();
                assert_eq!(sets.len() as NumNodes, uf.count());
                assert_eq!(sets.iter().map(Vec::len).sum::<usize>(), n as usize);
                for set in sets {
                    assert!(set.iter().all(|&u| label[u as usize] == label[set[0] as usize]));
                }
            }
        }
    }
}
