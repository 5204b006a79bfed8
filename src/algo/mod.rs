/*!
# Graph Algorithms

Algorithms are provided as traits that are implemented on every graph representation, so
```rust
use coursegraphs::{prelude::*, algo::*};
```
gives access to them as methods on the graph itself.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod transpose;
mod traversal;

use crate::prelude::*;

pub use transpose::*;
pub use traversal::*;
