use std::ops::Range;

use itertools::Itertools;

use crate::{edge::*, error::*, node::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns the range `0..n`.
    /// In contrast to self.vertices(), the range returned by self.vertices_range() does
    /// not borrow self and hence may be used where additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns `Ok(u)` if `u` is a node of the graph and [`InvalidArgument::NodeOutOfRange`] otherwise
    fn check_node(&self, u: Node) -> Result<Node> {
        checked_node(u, self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

macro_rules! node_iterator {
    ($iter : ident, $single : ident, $type : ty) => {
        fn $iter(&self) -> impl Iterator<Item = $type> + '_ {
            self.vertices().map(move |u| self.$single(u))
        }
    };
}

macro_rules! checked {
    ($try_fn:ident => $fn:ident -> $ret:ty) => {
        /// Checked variant: returns [`InvalidArgument::NodeOutOfRange`] instead of panicking
        fn $try_fn(&self, u: Node) -> Result<$ret> {
            self.check_node(u)?;
            Ok(self.$fn(u))
        }
    };
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (out-)neighbors of a given vertex in insertion order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Checked variant of [`AdjacencyList::neighbors_of`]
    fn try_neighbors_of(&self, u: Node) -> Result<impl Iterator<Item = Node> + '_> {
        self.check_node(u)?;
        Ok(self.neighbors_of(u))
    }

    checked!(try_degree_of => degree_of -> NumNodes);

    /// Returns an iterator to all vertices without any (outgoing) neighbor in ascending order
    fn vertices_without_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(move |&u| self.degree_of(u) == 0)
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    node_iterator!(degrees, degree_of, NumNodes);

    /// Returns an iterator over outgoing edges of a given vertex in insertion order.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u).map(move |v| Edge(u, v))
    }

    /// Returns an iterator over all edges in the graph, grouped by source in ascending order.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range().flat_map(move |u| self.edges_of(u))
    }

    /// Returns all edges in the graph in sorted order (parallel edges are kept)
    fn ordered_edges(&self) -> Vec<Edge> {
        self.edges().sorted().collect_vec()
    }
}

macro_rules! propagate {
    ($out_fn:ident => $fn:ident($($arg:ident : $type:ty),*) -> $ret:ty) => {
        #[inline]
        fn $out_fn(&self, $($arg: $type),*) -> $ret {
            self.$fn($($arg),*)
        }
    };
}

/// Adjacency getters of directed graphs, i.e. graphs which also keep track of incoming edges.
pub trait DirectedAdjacencyList: AdjacencyList {
    propagate!(out_neighbors_of => neighbors_of(u : Node) -> impl Iterator<Item = Node> + '_);
    propagate!(out_degree_of => degree_of(u : Node) -> NumNodes);
    propagate!(max_out_degree => max_degree() -> NumNodes);

    checked!(try_out_degree_of => out_degree_of -> NumNodes);

    node_iterator!(out_degrees, out_degree_of, NumNodes);

    /// Returns the number of incoming edges of a given vertex
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumNodes;

    checked!(try_in_degree_of => in_degree_of -> NumNodes);

    node_iterator!(in_degrees, in_degree_of, NumNodes);

    /// Returns the out-degree and in-degree of a given vertex
    /// ** Panics if `u >= n` **
    #[inline]
    fn total_degree_of(&self, u: Node) -> NumNodes {
        self.out_degree_of(u) + self.in_degree_of(u)
    }

    /// Returns the maximum in-degree in the graph
    fn max_in_degree(&self) -> NumNodes {
        self.in_degrees().max().unwrap_or(0)
    }

    /// Returns all vertices without incoming edges in ascending order
    fn sources(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(move |&u| self.in_degree_of(u) == 0)
    }

    /// Returns all vertices without outgoing edges in ascending order
    fn sinks(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_without_neighbors()
    }

    /// Returns *true* if every vertex has exactly one outgoing edge,
    /// i.e. the edges encode a total function `V -> V`.
    /// An empty graph is trivially a map.
    fn is_map(&self) -> bool {
        self.out_degrees().all(|d| d == 1)
    }
}

/// Trait for accessing the neighborhood of nodes as slices
pub trait NeighborsSlice {
    /// Returns a slice-reference of the neighborhood of a given vertex
    /// ** Panics if `u >= n` **
    fn as_neighbors_slice(&self, u: Node) -> &[Node];
}

/// Trait for creating a new empty graph
pub trait GraphNew: Sized {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;

    /// Creates an empty graph with n singleton nodes.
    /// Fails with [`InvalidArgument::InvalidCount`] if `n` is negative or exceeds [`NumNodes`].
    fn try_new(n: i64) -> Result<Self> {
        Ok(Self::new(checked_count(n)?))
    }
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing: GraphNew + GraphNodeOrder {
    /// Adds the edge *(u,v)* to the graph. Parallel edges and self-loops are kept.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node);

    /// Adds the edge *(u,v)* to the graph if both endpoints exist.
    /// Otherwise the graph is left unchanged and an error is returned.
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        self.add_edge(u, v);
        Ok(())
    }

    /// Adds all edges in the collection
    /// ** Panics if any endpoint is `>= n` **
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v);
        }
    }

    /// Adds all edges of the collection if every endpoint exists.
    /// Otherwise no edge is added and the first invalid endpoint is reported.
    fn try_add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<()> {
        let edges: Vec<Edge> = edges.into_iter().map(|d| d.into()).collect();
        for &Edge(u, v) in &edges {
            self.check_node(u)?;
            self.check_node(v)?;
        }
        self.add_edges(edges);
        Ok(())
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and an iterator over Edges
    /// ** Panics if any endpoint is `>= n` **
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;

    /// Checked variant of [`GraphFromScratch::from_edges`]
    fn try_from_edges(n: i64, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<Self>;
}

impl<G: GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }

    fn try_from_edges(n: i64, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<Self> {
        let mut graph = Self::try_new(n)?;
        graph.try_add_edges(edges)?;
        Ok(graph)
    }
}
