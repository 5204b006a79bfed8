use super::*;

/// Reversal of all edges of a directed graph.
pub trait Transpose: Sized {
    /// Creates a graph of type `GO` on the same nodes that contains the edge `(v, u)` for every
    /// edge `(u, v)` of `self`, keeping multiplicities.
    ///
    /// Edges are inserted in the order of [`AdjacencyList::edges`].
    fn reversed_as<GO>(&self) -> GO
    where
        GO: GraphFromScratch;

    /// Shorthand for [`Transpose::reversed_as`] where the output has the same type as `self`.
    ///
    /// # Examples
    /// ```
    /// use coursegraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(3, [(0, 1), (0, 2), (2, 2)]);
    /// let r = g.reversed();
    ///
    /// assert_eq!(r.number_of_nodes(), 3);
    /// assert_eq!(r.edges().collect::<Vec<_>>(), vec![Edge(1, 0), Edge(2, 0), Edge(2, 2)]);
    /// ```
    fn reversed(&self) -> Self
    where
        Self: GraphFromScratch,
    {
        self.reversed_as()
    }
}

impl<G> Transpose for G
where
    G: AdjacencyList,
{
    fn reversed_as<GO>(&self) -> GO
    where
        GO: GraphFromScratch,
    {
        GO::from_edges(self.number_of_nodes(), self.edges().map(|e| e.reverse()))
    }
}
