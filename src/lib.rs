/*!
`coursegraphs` provides two small textbook data structures over integer identifiers:

- a directed multigraph ([`Digraph`](crate::repr::Digraph)) with degree queries,
  source/sink enumeration, reversal and reachability checks, and
- a weighted quick-union structure ([`UnionFind`](crate::union_find::UnionFind)) with path halving.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is fixed when the structure is created.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)` meaning "from `Edge.0` to `Edge.1`".
Parallel edges and self-loops are allowed, and the successors of a node keep their insertion order.

See the [`repr`] module for the available graph storage backends:

- [`AdjArray`](crate::repr::AdjArray)
- [`SparseAdjArray`](crate::repr::SparseAdjArray)

# Errors

Operations that receive node ids or counts come in two flavours:
- `try_*` methods validate their input and return [`InvalidArgument`](crate::error::InvalidArgument)
  before anything is modified,
- the plain methods (`add_edge`, `neighbors_of`, `union`, ...) panic on invalid input.

# Usage

In most use-cases, `use coursegraphs::{prelude::*, algo::*};` suffices for your needs.

```rust
use coursegraphs::{prelude::*, algo::*};

let mut g = AdjArray::new(4);
g.add_edges([(0, 1), (0, 2), (1, 2), (2, 3)]);

assert_eq!(g.sources().collect::<Vec<_>>(), vec![0]);
assert_eq!(g.sinks().collect::<Vec<_>>(), vec![3]);
assert!(g.connected());
assert!(g.try_add_edge(4, 0).is_err());

let mut uf = UnionFind::new(5);
uf.union(0, 1);
uf.union(1, 2);
uf.union(3, 4);
assert_eq!(uf.count(), 2);
assert!(uf.connected(0, 2));
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod union_find;

/// `coursegraphs::prelude` includes definitions for nodes, edges and errors, all basic graph
/// operation traits, all implemented representations and the union-find structure.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*, union_find::*};
}
