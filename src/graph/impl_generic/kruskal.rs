//! Minimum spanning tree via Kruskal's algorithm.
//!
//! Serves as the reference the Borůvka rounds are checked against.

use crate::graph::error::{MstError, MstResult};
use crate::graph::traits::types::{MstSolution, OriginalGraph};

use super::union_find::UnionFind;

/// Kruskal's minimum spanning tree.
///
/// Edges are stably sorted by cost, so equal-cost edges are tried in input
/// order, and greedily accepted when they join two different components.
///
/// Time: O(E log E) for sorting + O(E log V) for union-find.
///
/// # Errors
/// Returns [`MstError::Disconnected`] if fewer than `n - 1` edges join.
pub fn kruskal_mst(graph: &OriginalGraph) -> MstResult<MstSolution> {
    let n = graph.num_vertices();
    let target = graph.tree_size();

    let mut order: Vec<usize> = (0..graph.num_edges()).collect();
    order.sort_by(|&a, &b| graph.cost(a).total_cmp(&graph.cost(b)));

    let mut uf = UnionFind::new(n);
    let mut solution = MstSolution::with_capacity(target);

    for i in order {
        // Stop when we have n-1 edges
        if solution.len() == target {
            break;
        }
        let edge = graph.edge(i);
        if uf.union(edge.v, edge.u) {
            solution.accept(i, edge.cost);
        }
    }

    if solution.len() < target {
        return Err(MstError::Disconnected {
            components: n - solution.len(),
            rounds: 0,
        });
    }
    Ok(solution)
}
