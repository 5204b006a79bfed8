/*!
# Node Representation

Vertices (and union-find elements) are plain unsigned integers `0..n`.
We choose `Node = u32` as course-sized inputs never come close to `2^32` elements, which keeps
adjacency lists and parent tables at half the size of `usize`-based ones.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `n - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
