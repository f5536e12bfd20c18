//! Spanning trees of tensor edge lists.
//!
//! The algorithms are sequential; edge lists are copied out of the runtime at
//! the API boundary and the tree is copied back in.

use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

use crate::graph::error::MstResult;
use crate::graph::traits::types::{
    BoruvkaOptions, EdgeListGraph, MstSolution, OriginalGraph, SpanningTree,
};

use super::boruvka::boruvka_mst;
use super::kruskal::kruskal_mst;

/// Borůvka's minimum spanning tree of a tensor edge list.
pub fn boruvka_impl<R, C>(
    _client: &C,
    graph: &EdgeListGraph<R>,
    options: &BoruvkaOptions,
) -> MstResult<SpanningTree<R>>
where
    R: Runtime,
    C: RuntimeClient<R>,
{
    // Extract edges at API boundary
    let original = graph.to_original()?;
    let solution = boruvka_mst(&original, options)?;
    Ok(to_spanning_tree(&original, &solution, graph.weights.device()))
}

/// Kruskal's minimum spanning tree of a tensor edge list.
pub fn kruskal_impl<R, C>(_client: &C, graph: &EdgeListGraph<R>) -> MstResult<SpanningTree<R>>
where
    R: Runtime,
    C: RuntimeClient<R>,
{
    let original = graph.to_original()?;
    let solution = kruskal_mst(&original)?;
    Ok(to_spanning_tree(&original, &solution, graph.weights.device()))
}

fn to_spanning_tree<R: Runtime>(
    original: &OriginalGraph,
    solution: &MstSolution,
    device: &R::Device,
) -> SpanningTree<R> {
    let mut tree_sources = Vec::with_capacity(solution.len());
    let mut tree_targets = Vec::with_capacity(solution.len());
    let mut tree_weights = Vec::with_capacity(solution.len());

    for edge in solution.tree_edges(original) {
        tree_sources.push(edge.v as i64);
        tree_targets.push(edge.u as i64);
        tree_weights.push(edge.cost);
    }

    let len = tree_sources.len();
    SpanningTree {
        sources: Tensor::<R>::from_slice(&tree_sources, &[len], device),
        targets: Tensor::<R>::from_slice(&tree_targets, &[len], device),
        weights: Tensor::<R>::from_slice(&tree_weights, &[len], device),
        total_weight: solution.total_cost,
        rounds: solution.rounds,
    }
}
