/*!
# Graph Representations

A [`Digraph`] is parameterized by a [`Neighborhood`] type which controls how the successors of
every vertex are stored. All neighborhoods keep successors in insertion order and allow duplicates.

- [`AdjArray`]: adjacency arrays (`Vec<Node>`).
- [`SparseAdjArray`]: adjacency arrays with inline storage for small degrees (`SmallVec<[Node; N]>`).
*/

use crate::{edge::*, node::*, ops::*};

mod digraph;
mod neighborhood;

pub use digraph::*;
pub use neighborhood::*;
