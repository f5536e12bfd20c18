//! Minimum spanning tree algorithm traits.

use numr::runtime::Runtime;

use crate::graph::error::MstResult;

use super::types::{BoruvkaOptions, EdgeListGraph, SpanningTree};

/// Minimum spanning tree algorithms.
///
/// Finds the subset of edges that connects all nodes with minimum total weight.
/// Among equal-weight edges, the one listed first wins, so both methods
/// return the same tree for the same input.
pub trait SpanningTreeAlgorithms<R: Runtime> {
    /// Compute the minimum spanning tree using Borůvka's algorithm.
    ///
    /// Every round each fragment selects its cheapest outgoing edge, the
    /// selected edges are accepted and the graph is contracted. Sequential
    /// algorithm.
    ///
    /// # Complexity
    /// O(E log V): at most log2(V) rounds of linear work.
    ///
    /// # Errors
    /// Returns error if the graph is disconnected or the round cap is hit.
    fn boruvka_mst(
        &self,
        graph: &EdgeListGraph<R>,
        options: &BoruvkaOptions,
    ) -> MstResult<SpanningTree<R>>;

    /// Compute the minimum spanning tree using Kruskal's algorithm.
    ///
    /// # Complexity
    /// O(E log E) for sorting + O(E log V) for union-find.
    ///
    /// # Errors
    /// Returns error if the graph is disconnected.
    fn kruskal_mst(&self, graph: &EdgeListGraph<R>) -> MstResult<SpanningTree<R>>;
}
