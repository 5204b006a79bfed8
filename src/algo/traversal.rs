/*!
Forward traversals and reachability.

[`Search`] walks the nodes reachable from a start node and yields every node exactly once,
even if it is the target of parallel edges or self-loops. Whether the walk is breadth-first or
depth-first only depends on its [`Frontier`]. The [`Traversal`] trait makes both available as
methods on every graph.
*/

use super::*;
use std::collections::VecDeque;

/// Nodes that were discovered but not yet yielded by a [`Search`].
///
/// - [`VecDeque`] hands them out first-in first-out (**BFS**),
/// - [`Vec`] hands them out last-in first-out (**DFS**).
pub trait Frontier: Default {
    fn insert(&mut self, u: Node);

    fn take(&mut self) -> Option<Node>;

    fn len(&self) -> usize;
}

impl Frontier for VecDeque<Node> {
    fn insert(&mut self, u: Node) {
        self.push_back(u);
    }

    fn take(&mut self) -> Option<Node> {
        self.pop_front()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl Frontier for Vec<Node> {
    fn insert(&mut self, u: Node) {
        self.push(u);
    }

    fn take(&mut self) -> Option<Node> {
        self.pop()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// Lazy traversal over all nodes reachable from a start node, following edges forward.
///
/// A node counts as discovered as soon as it enters the frontier, so later edges into it
/// (parallel edges, self-loops, back edges) are ignored.
pub struct Search<'a, G, F>
where
    G: AdjacencyList,
    F: Frontier,
{
    graph: &'a G,
    discovered: NodeBitSet,
    frontier: F,
}

/// Breadth-first [`Search`]
pub type BFS<'a, G> = Search<'a, G, VecDeque<Node>>;

/// Depth-first [`Search`]
pub type DFS<'a, G> = Search<'a, G, Vec<Node>>;

impl<G, F> Iterator for Search<'_, G, F>
where
    G: AdjacencyList,
    F: Frontier,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.frontier.take()?;

        for v in self.graph.neighbors_of(u) {
            if !self.discovered.set_bit(v) {
                self.frontier.insert(v);
            }
        }

        Some(u)
    }

    /// Every node in the frontier is still going to be yielded, and at most all undiscovered
    /// nodes can join them.
    fn size_hint(&self) -> (usize, Option<usize>) {
        let undiscovered = self.graph.len() - self.discovered.cardinality() as usize;
        let pending = self.frontier.len();
        (pending, Some(pending + undiscovered))
    }
}

impl<'a, G, F> Search<'a, G, F>
where
    G: AdjacencyList,
    F: Frontier,
{
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(
            start < graph.number_of_nodes(),
            "start node {start} is out of range"
        );

        let mut discovered = graph.vertex_bitset_unset();
        discovered.set_bit(start);

        let mut frontier = F::default();
        frontier.insert(start);

        Self {
            graph,
            discovered,
            frontier,
        }
    }

    /// Checked variant of [`Search::new`]
    pub fn try_new(graph: &'a G, start: Node) -> Result<Self> {
        graph.check_node(start)?;
        Ok(Self::new(graph, start))
    }

    /// Returns *true* if `u` was discovered, i.e. it was yielded already or is about to be
    pub fn did_discover(&self, u: Node) -> bool {
        self.discovered.get_bit(u)
    }

    pub fn number_of_discovered_nodes(&self) -> NumNodes {
        self.discovered.cardinality()
    }

    /// Runs the search to completion and returns every node it reached
    pub fn into_reached(mut self) -> NodeBitSet {
        while self.next().is_some() {}
        self.discovered
    }
}

/// BFS, DFS and reachability queries on every graph
pub trait Traversal: AdjacencyList + Sized {
    /// Returns the nodes reachable from `start` in **breadth-first** order.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use coursegraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(3, [(0, 1), (0, 2), (1, 2)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns the nodes reachable from `start` in **depth-first** order.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use coursegraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(3, [(1, 0), (1, 2)]);
    ///
    /// let order: Vec<_> = g.dfs(1).collect();
    /// assert_eq!(order, vec![1, 2, 0]);
    /// assert_eq!(g.dfs(0).count(), 1);
    /// ```
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Checked variant of [`Traversal::bfs`]
    fn try_bfs(&self, start: Node) -> Result<BFS<'_, Self>> {
        BFS::try_new(self, start)
    }

    /// Checked variant of [`Traversal::dfs`]
    fn try_dfs(&self, start: Node) -> Result<DFS<'_, Self>> {
        DFS::try_new(self, start)
    }

    /// Returns the set of nodes reachable from `start`, including `start`
    /// ** Panics if `start >= n` **
    fn reachable_from(&self, start: Node) -> NodeBitSet {
        self.dfs(start).into_reached()
    }

    /// Returns *true* if every node can be reached from `start` by following edges forward
    /// ** Panics if `start >= n` **
    fn all_reachable_from(&self, start: Node) -> bool {
        self.dfs(start).count() == self.len()
    }

    /// Checked variant of [`Traversal::all_reachable_from`]
    fn try_all_reachable_from(&self, start: Node) -> Result<bool> {
        Ok(self.try_dfs(start)?.count() == self.len())
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
