//! Folding a round's strut into the solution.

use crate::graph::traits::types::{MstSolution, OriginalGraph};

use super::bipartite::BipartiteGraph;
use super::strut::Strut;
use super::union_find::UnionFind;

/// What a round contributed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Edges added to the solution.
    pub accepted: usize,
    /// Selected edges whose two fragments both chose them.
    pub num_zerodiff: usize,
}

/// Accept the strut's edges and merge their fragments.
///
/// Each selected U-node is visited once, in U-node order. Its two fragments
/// are resolved to their roots in `uf`; the edge is accepted and the roots
/// merged only when the roots differ, so an edge can never close a cycle.
pub fn resolve_round(
    bg: &BipartiteGraph,
    strut: &Strut,
    graph: &OriginalGraph,
    uf: &mut UnionFind,
    solution: &mut MstSolution,
) -> RoundOutcome {
    let mut outcome = RoundOutcome::default();

    for (u, node) in strut.nodes.iter().enumerate() {
        let Some(first) = node.first else {
            continue;
        };
        if node.is_zero_diff() {
            outcome.num_zerodiff += 1;
        }

        let selected = &strut.edges[first];
        let x = uf.find(bg.edges[selected.edge].v);
        let y = uf.find(bg.edges[selected.companion].v);
        if x == y {
            continue;
        }

        let original_edge = bg.u_nodes[u].original_edge;
        solution.accept(original_edge, graph.cost(original_edge));
        uf.union(x, y);
        outcome.accepted += 1;
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::impl_generic::{extract_strut, select_min_edges};

    fn run_round(graph: &OriginalGraph) -> (UnionFind, MstSolution, RoundOutcome) {
        let mut bg = BipartiteGraph::from_original(graph);
        select_min_edges(&mut bg, graph);
        let strut = extract_strut(&bg);
        let mut uf = UnionFind::new(bg.num_fragments());
        let mut solution = MstSolution::default();
        let outcome = resolve_round(&bg, &strut, graph, &mut uf, &mut solution);
        (uf, solution, outcome)
    }

    #[test]
    fn test_resolve_round_chain() {
        // 0 -(1)- 1 -(2)- 2 -(3)- 3: every vertex joins through a chain.
        let graph =
            OriginalGraph::from_edge_list(4, &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0)]).unwrap();
        let (uf, solution, outcome) = run_round(&graph);

        assert_eq!(outcome.accepted, 3);
        assert_eq!(outcome.num_zerodiff, 1);
        assert_eq!(solution.edges, vec![0, 1, 2]);
        assert!((solution.total_cost - 6.0).abs() < 1e-12);
        assert!(uf.connected(0, 3));
    }

    #[test]
    fn test_resolve_round_two_pairs() {
        let graph =
            OriginalGraph::from_edge_list(4, &[(0, 1, 1.0), (1, 2, 9.0), (2, 3, 1.5)]).unwrap();
        let (uf, solution, outcome) = run_round(&graph);

        assert_eq!(outcome.accepted, 2);
        assert_eq!(outcome.num_zerodiff, 2);
        assert_eq!(solution.edges, vec![0, 2]);
        assert!(uf.connected(0, 1));
        assert!(uf.connected(2, 3));
        assert!(!uf.connected(1, 2));
    }

    #[test]
    fn test_resolve_round_skips_parallel_duplicate() {
        // Two parallel 0-1 edges of equal cost: both vertices pick the first.
        let graph = OriginalGraph::from_edge_list(2, &[(0, 1, 1.0), (1, 0, 1.0)]).unwrap();
        let (_, solution, outcome) = run_round(&graph);

        assert_eq!(outcome.accepted, 1);
        assert_eq!(solution.edges, vec![0]);
    }
}
