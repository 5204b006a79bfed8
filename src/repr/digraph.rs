/*!
# Directed Graph

[`Digraph`] stores the outgoing neighborhood of every vertex together with a table of
in-degrees that is maintained on every edge insertion. Edges can only be added, never removed,
so the number of edges is the number of insertions so far.
*/

use std::fmt::Display;

use itertools::Itertools;

use crate::{algo::Traversal, error::*, testing::test_graph_ops};

use super::*;

/// A directed multigraph over the nodes `0..n`.
///
/// - Outgoing adjacency is stored directly, in insertion order.
/// - Incoming adjacency is only stored as a count per node.
///
/// Cloning yields an independent deep copy with identical adjacency order.
///
/// # Type parameters
/// - `Nbs`: [`Neighborhood`] implementation used for outgoing adjacency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Digraph<Nbs = ArrNeighborhood>
where
    Nbs: Neighborhood,
{
    out_nbs: Vec<Nbs>,
    in_degrees: Vec<NumNodes>,
    num_edges: NumEdges,
}

/// Directed graph using adjacency arrays (`Vec<Node>`).
pub type AdjArray = Digraph<ArrNeighborhood>;

/// Directed graph using sparse adjacency arrays (`SmallVec<[Node; N]>`).
pub type SparseAdjArray = Digraph<SparseNeighborhood>;

impl<Nbs: Neighborhood> GraphNodeOrder for Digraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.out_nbs.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for Digraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for Digraph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.out_nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> DirectedAdjacencyList for Digraph<Nbs> {
    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_degrees[u as usize]
    }
}

impl<Nbs: NeighborhoodSlice> NeighborsSlice for Digraph<Nbs> {
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        self.out_nbs[u as usize].as_slice()
    }
}

impl<Nbs: Neighborhood> GraphNew for Digraph<Nbs> {
    fn new(n: NumNodes) -> Self {
        Self {
            out_nbs: vec![Nbs::default(); n as usize],
            in_degrees: vec![0; n as usize],
            num_edges: 0,
        }
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for Digraph<Nbs> {
    fn add_edge(&mut self, u: Node, v: Node) {
        let n = self.number_of_nodes();
        assert!(u < n && v < n, "edge ({u},{v}) is out of range for {n} nodes");
        assert!(
            self.num_edges < NumEdges::MAX,
            "graph already holds the maximum number of edges"
        );

        self.out_nbs[u as usize].add_neighbor(v);
        self.in_degrees[v as usize] += 1;
        self.num_edges += 1;
    }
}

impl<Nbs: Neighborhood> Digraph<Nbs> {
    /// Returns an iterator over the successors of `u` in insertion order.
    ///
    /// The iterator borrows the graph immutably and can be cloned to restart the iteration,
    /// so any number of readers may walk the same list independently.
    ///
    /// # Examples
    /// ```
    /// use coursegraphs::prelude::*;
    ///
    /// let g = AdjArray::from_edges(3, [(0, 2), (0, 1), (0, 2)]);
    /// assert_eq!(g.adj(0).unwrap().collect::<Vec<_>>(), vec![2, 1, 2]);
    /// assert!(g.adj(3).is_err());
    /// ```
    pub fn adj(&self, u: Node) -> Result<Nbs::NeighborhoodIter<'_>> {
        self.check_node(u)?;
        Ok(self.out_nbs[u as usize].neighbors())
    }

    /// Returns the in-degree of every node, indexed by node
    pub fn in_degree_table(&self) -> &[NumNodes] {
        &self.in_degrees
    }

    /// Returns *true* if every node can be reached from node `0` by following edges forward.
    ///
    /// This is a single-source reachability check: it neither implies that node `0` is
    /// reachable from the others nor that the graph is strongly connected.
    /// The empty graph is considered connected.
    ///
    /// # Examples
    /// ```
    /// use coursegraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(3, [(0, 1), (1, 2)]);
    /// assert!(g.connected());
    /// assert!(!g.reversed().connected());
    /// ```
    pub fn connected(&self) -> bool {
        self.is_empty() || self.all_reachable_from(0)
    }
}

impl<Nbs: Neighborhood> Display for Digraph<Nbs> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} vertices, {} edges",
            self.number_of_nodes(),
            self.number_of_edges()
        )?;
        for u in self.vertices_range() {
            writeln!(f, "{u}: {}", self.neighbors_of(u).join(" "))?;
        }
        Ok(())
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_adj_array,
    AdjArray,
    (
        GraphNew,
        AdjacencyList,
        DirectedAdjacencyList,
        GraphEdgeEditing,
        Clone,
        Transpose
    )
);

test_graph_ops!(
    test_sparse_adj_array,
    SparseAdjArray,
    (
        GraphNew,
        AdjacencyList,
        DirectedAdjacencyList,
        GraphEdgeEditing,
        Clone,
        Transpose
    )
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::*;

    fn lecture_graph() -> AdjArray {
        AdjArray::from_edges(4, [(0, 1), (0, 2), (1, 2), (2, 3)])
    }

    #[test]
    fn sources_and_sinks() {
        let graph = lecture_graph();

        assert_eq!(graph.sources().collect_vec(), vec![0]);
        assert_eq!(graph.sinks().collect_vec(), vec![3]);
        assert_eq!(graph.out_degree_of(0), 2);
        assert_eq!(graph.in_degree_of(2), 2);
        assert_eq!(graph.in_degree_table(), &[0, 1, 2, 1]);
    }

    #[test]
    fn without_edges() {
        let graph = AdjArray::new(3);

        assert!(!graph.is_map());
        assert_eq!(graph.sources().collect_vec(), vec![0, 1, 2]);
        assert_eq!(graph.sinks().collect_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn empty_graph() {
        let graph = AdjArray::try_new(0).unwrap();

        assert!(graph.is_empty());
        assert!(graph.is_map());
        assert!(graph.connected());
        assert_eq!(graph.sources().count(), 0);
        assert_eq!(graph.to_string(), "0 vertices, 0 edges\n");
    }

    #[test]
    fn negative_count() {
        assert_eq!(
            AdjArray::try_new(-1).unwrap_err(),
            InvalidArgument::InvalidCount { count: -1 }
        );
        assert!(SparseAdjArray::try_new(-1).is_err());
        assert!(AdjArray::try_from_edges(-3, [(0, 1)]).is_err());
    }

    #[test]
    fn out_of_range() {
        let mut graph = lecture_graph();
        let before = graph.clone();

        let err = InvalidArgument::NodeOutOfRange { node: 4, n: 4 };
        assert_eq!(graph.try_add_edge(4, 0), Err(err));
        assert_eq!(graph.try_add_edge(0, 4), Err(err));
        assert_eq!(graph, before);

        assert_eq!(graph.adj(4).unwrap_err(), err);
        assert_eq!(graph.try_out_degree_of(4), Err(err));
        assert_eq!(graph.try_in_degree_of(4), Err(err));
        assert!(graph.try_neighbors_of(4).is_err());

        assert_eq!(graph.try_out_degree_of(0), Ok(2));
        assert_eq!(graph.try_in_degree_of(3), Ok(1));
    }

    #[test]
    #[should_panic]
    fn add_edge_out_of_range() {
        let mut graph = AdjArray::new(2);
        graph.add_edge(0, 2);
    }

    #[test]
    fn try_from_edges() {
        let graph = AdjArray::try_from_edges(3, [(0, 1), (1, 2)]).unwrap();
        assert_eq!(graph.number_of_edges(), 2);

        assert_eq!(
            AdjArray::try_from_edges(3, [(0, 1), (1, 3)]).unwrap_err(),
            InvalidArgument::NodeOutOfRange { node: 3, n: 3 }
        );
    }

    #[test]
    fn rejected_batch_adds_nothing() {
        let mut graph = AdjArray::new(3);

        assert_eq!(
            graph.try_add_edges([(0, 1), (1, 2), (2, 5)]),
            Err(InvalidArgument::NodeOutOfRange { node: 5, n: 3 })
        );
        assert_eq!(graph.number_of_edges(), 0);
        assert_eq!(graph.in_degree_table(), &[0, 0, 0]);
        assert_eq!(graph, AdjArray::new(3));

        assert_eq!(graph.try_add_edges([(0, 1), (1, 2), (2, 2)]), Ok(()));
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.in_degree_table(), &[0, 1, 2]);
    }

    #[test]
    #[should_panic(expected = "maximum number of edges")]
    fn edge_count_limit() {
        let mut graph = AdjArray::new(2);
        graph.num_edges = NumEdges::MAX;
        graph.add_edge(0, 1);
    }

    #[test]
    fn parallel_edges_and_loops() {
        let graph = AdjArray::from_edges(2, [(0, 1), (0, 1), (1, 1), (0, 1)]);

        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.adj(0).unwrap().collect_vec(), vec![1, 1, 1]);
        assert_eq!(graph.in_degree_of(1), 4);
        assert_eq!(graph.out_degree_of(1), 1);
        assert!(graph.sinks().next().is_none());
        assert_eq!(graph.sources().collect_vec(), vec![0]);
    }

    #[test]
    fn is_map() {
        let mut graph = AdjArray::from_edges(3, [(0, 1), (1, 2)]);
        assert!(!graph.is_map());

        graph.add_edge(2, 2);
        assert!(graph.is_map());

        graph.add_edge(2, 0);
        assert!(!graph.is_map());
    }

    #[test]
    fn connected_from_first_node() {
        let graph = lecture_graph();
        assert!(graph.connected());

        // node 0 cannot be reached from anywhere else
        assert!(!graph.reversed().connected());

        // node 1 is a source, so 0 does not reach it
        let graph = AdjArray::from_edges(3, [(1, 0), (0, 2)]);
        assert!(!graph.connected());

        assert!(AdjArray::new(1).connected());
        assert!(!AdjArray::new(2).connected());
    }

    #[test]
    fn adjacency_is_restartable() {
        let graph = AdjArray::from_edges(4, [(0, 3), (0, 1), (0, 3), (0, 2)]);

        let adj = graph.adj(0).unwrap();
        let first = adj.clone().collect_vec();
        let second = adj.collect_vec();
        assert_eq!(first, vec![3, 1, 3, 2]);
        assert_eq!(first, second);
        assert_eq!(graph.as_neighbors_slice(0), &[3, 1, 3, 2]);
    }

    #[test]
    fn copy_is_independent() {
        let mut graph = AdjArray::from_edges(3, [(0, 2), (0, 1), (2, 0)]);
        let copy = graph.clone();

        graph.add_edge(0, 0);

        assert_eq!(copy.number_of_edges(), 3);
        assert_eq!(copy.adj(0).unwrap().collect_vec(), vec![2, 1]);
        assert_eq!(copy.in_degree_table(), &[1, 1, 1]);
        assert_eq!(graph.adj(0).unwrap().collect_vec(), vec![2, 1, 0]);
        assert_eq!(graph.in_degree_table(), &[2, 1, 1]);
    }

    #[test]
    fn display() {
        let graph = lecture_graph();
        assert_eq!(
            graph.to_string(),
            "4 vertices, 4 edges\n0: 1 2\n1: 2\n2: 3\n3: \n"
        );
    }
}
