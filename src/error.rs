/*!
# Errors

Every checked operation of this crate fails with the same error type, [`InvalidArgument`].
Validation always happens before any mutation, so a returned error leaves the structure untouched.
*/

use std::fmt::Display;

use crate::node::{Node, NumNodes};

/// Rejected input passed to a graph or union-find operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidArgument {
    /// A vertex/element count that is negative or does not fit into [`NumNodes`]
    InvalidCount { count: i64 },
    /// A node id outside of `0..n`
    NodeOutOfRange { node: Node, n: NumNodes },
}

/// Result-type of all checked operations
pub type Result<T> = std::result::Result<T, InvalidArgument>;

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCount { count } if *count < 0 => {
                write!(f, "number of nodes must be nonnegative, got {count}")
            }
            Self::InvalidCount { count } => {
                write!(f, "number of nodes must be at most {}, got {count}", NumNodes::MAX)
            }
            Self::NodeOutOfRange { node, n: 0 } => {
                write!(f, "node {node} does not exist in an empty structure")
            }
            Self::NodeOutOfRange { node, n } => {
                write!(f, "node {node} is not between 0 and {}", n - 1)
            }
        }
    }
}

impl std::error::Error for InvalidArgument {}

/// Converts a signed count into [`NumNodes`]
pub(crate) fn checked_count(count: i64) -> Result<NumNodes> {
    NumNodes::try_from(count).map_err(|_| InvalidArgument::InvalidCount { count })
}

/// Returns `node` if it is in `0..n`
#[inline]
pub(crate) fn checked_node(node: Node, n: NumNodes) -> Result<Node> {
    if node < n {
        Ok(node)
    } else {
        Err(InvalidArgument::NodeOutOfRange { node, n })
    }
}
