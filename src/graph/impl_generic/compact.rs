//! Contraction of a round's merged fragments into the next bipartite graph.
//!
//! Linear in the number of incidences: fragment and edge indices are dense,
//! so every grouping step is a counting sort or a direct-indexed table.

use crate::graph::traits::types::OriginalGraph;

use super::bipartite::{BipartiteEdge, BipartiteGraph, UNode, VNode};
use super::sort::{counting_sort_order, inverse_permutation};
use super::union_find::UnionFind;

/// An edge still joining two different merged fragments.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    lo: usize,
    hi: usize,
    u: usize,
}

/// Build the next round's graph from `bg` and the merges recorded in `uf`.
///
/// Edges inside a merged fragment are dropped. Of several edges joining the
/// same pair of merged fragments only the cheapest survives (the earliest on
/// equal cost). Surviving edges keep their relative order, and fragments that
/// are left without edges disappear. `num_zerodiff` is the number of mutually
/// selected edges in the round, the expected fragment count.
pub fn compact_graph(
    bg: &BipartiteGraph,
    graph: &OriginalGraph,
    uf: &UnionFind,
    num_zerodiff: usize,
) -> BipartiteGraph {
    let (fragment, roots) = label_fragments(bg, uf, num_zerodiff);
    let num_merged = roots.len();

    let mut candidates = Vec::with_capacity(bg.num_edge_nodes());
    for (i, e) in bg.edges.iter().enumerate() {
        if i > e.companion {
            continue;
        }
        let a = fragment[e.v];
        let b = fragment[bg.edges[e.companion].v];
        if a == b {
            continue;
        }
        candidates.push(Candidate {
            lo: a.min(b),
            hi: a.max(b),
            u: e.u,
        });
    }

    let survivors = dedup_parallel(bg, graph, &candidates, num_merged);

    // Renumber surviving U-nodes in their current order.
    let mut u_nodes = Vec::with_capacity(survivors.len());
    let mut inc_fragment = Vec::with_capacity(survivors.len() * 2);
    let mut inc_u = Vec::with_capacity(survivors.len() * 2);
    for (u, pair) in survivors.iter().enumerate() {
        let Some((lo, hi)) = *pair else {
            continue;
        };
        let new_u = u_nodes.len();
        u_nodes.push(UNode {
            original_edge: bg.u_nodes[u].original_edge,
        });
        // Incidences 2k and 2k + 1 are companions.
        inc_fragment.push(lo);
        inc_u.push(new_u);
        inc_fragment.push(hi);
        inc_u.push(new_u);
    }

    let order = counting_sort_order(&inc_fragment, num_merged);
    let position = inverse_permutation(&order);

    let mut new_v = vec![usize::MAX; num_merged];
    let mut v_nodes: Vec<VNode> = Vec::with_capacity(num_zerodiff);
    let mut edges = Vec::with_capacity(order.len());
    for &i in &order {
        let f = inc_fragment[i];
        if new_v[f] == usize::MAX {
            new_v[f] = v_nodes.len();
            v_nodes.push(VNode {
                id: bg.v_nodes[roots[f]].id,
                degree: 0,
                min_edge: None,
            });
        }
        v_nodes[new_v[f]].degree += 1;
        edges.push(BipartiteEdge {
            v: new_v[f],
            u: inc_u[i],
            companion: position[i ^ 1],
        });
    }

    BipartiteGraph {
        v_nodes,
        u_nodes,
        edges,
    }
}

/// Map every V-node to a dense label of its union-find root.
///
/// Returns the labels and, per label, the root's V-node index.
fn label_fragments(
    bg: &BipartiteGraph,
    uf: &UnionFind,
    num_zerodiff: usize,
) -> (Vec<usize>, Vec<usize>) {
    let n_v = bg.num_fragments();
    let mut label = vec![usize::MAX; n_v];
    let mut roots = Vec::with_capacity(num_zerodiff);
    let mut fragment = Vec::with_capacity(n_v);

    for v in 0..n_v {
        let root = uf.find(v);
        if label[root] == usize::MAX {
            label[root] = roots.len();
            roots.push(root);
        }
        fragment.push(label[root]);
    }
    (fragment, roots)
}

/// Keep the cheapest candidate per pair of merged fragments.
///
/// Candidates are grouped by their lower fragment; within a group `best`,
/// indexed by the higher fragment, holds the winner so far and is cleared
/// through `touched` before the next group. Returns, per old U-node, the
/// fragment pair of the surviving edges.
fn dedup_parallel(
    bg: &BipartiteGraph,
    graph: &OriginalGraph,
    candidates: &[Candidate],
    num_merged: usize,
) -> Vec<Option<(usize, usize)>> {
    let keys: Vec<usize> = candidates.iter().map(|c| c.lo).collect();
    let order = counting_sort_order(&keys, num_merged);

    let mut survivors = vec![None; bg.num_edge_nodes()];
    let mut best: Vec<Option<usize>> = vec![None; num_merged];
    let mut touched = Vec::new();

    let mut p = 0;
    while p < order.len() {
        let lo = candidates[order[p]].lo;
        while p < order.len() && candidates[order[p]].lo == lo {
            let c = order[p];
            let hi = candidates[c].hi;
            match best[hi] {
                None => {
                    best[hi] = Some(c);
                    touched.push(hi);
                }
                Some(b) => {
                    if precedes(bg, graph, candidates[c].u, candidates[b].u) {
                        best[hi] = Some(c);
                    }
                }
            }
            p += 1;
        }

        for hi in touched.drain(..) {
            if let Some(c) = best[hi].take() {
                survivors[candidates[c].u] = Some((lo, hi));
            }
        }
    }
    survivors
}

/// Whether U-node `a` is cheaper than `b`, ties going to the earlier input edge.
fn precedes(bg: &BipartiteGraph, graph: &OriginalGraph, a: usize, b: usize) -> bool {
    let ea = bg.u_nodes[a].original_edge;
    let eb = bg.u_nodes[b].original_edge;
    let (ca, cb) = (graph.cost(ea), graph.cost(eb));
    ca < cb || (ca == cb && ea < eb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::impl_generic::{extract_strut, resolve_round, select_min_edges};
    use crate::graph::traits::types::MstSolution;

    fn one_round(graph: &OriginalGraph) -> (BipartiteGraph, usize) {
        let mut bg = BipartiteGraph::from_original(graph);
        select_min_edges(&mut bg, graph);
        let strut = extract_strut(&bg);
        let mut uf = UnionFind::new(bg.num_fragments());
        let mut solution = MstSolution::default();
        let outcome = resolve_round(&bg, &strut, graph, &mut uf, &mut solution);
        (
            compact_graph(&bg, graph, &uf, outcome.num_zerodiff),
            outcome.num_zerodiff,
        )
    }

    fn assert_well_formed(bg: &BipartiteGraph) {
        assert_eq!(bg.edges.len(), bg.u_nodes.len() * 2);
        for (i, e) in bg.edges.iter().enumerate() {
            let c = &bg.edges[e.companion];
            assert_eq!(c.companion, i);
            assert_eq!(c.u, e.u);
            assert_ne!(c.v, e.v);
        }
        for (v, node) in bg.v_nodes.iter().enumerate() {
            let degree = bg.edges.iter().filter(|e| e.v == v).count();
            assert_eq!(node.degree, degree);
            assert!(node.degree > 0);
            assert!(node.min_edge.is_none());
        }
        // Grouped by fragment, and by U-node inside each fragment.
        for w in bg.edges.windows(2) {
            assert!((w[0].v, w[0].u) < (w[1].v, w[1].u));
        }
    }

    #[test]
    fn test_compact_two_pairs_with_parallel_edges() {
        // Round 1 merges {0, 1} and {2, 3}; three edges then join the pair.
        let graph = OriginalGraph::from_edge_list(
            4,
            &[
                (0, 1, 1.0),
                (2, 3, 1.0),
                (1, 2, 7.0),
                (0, 3, 5.0),
                (0, 2, 5.0),
            ],
        )
        .unwrap();
        let (next, num_zerodiff) = one_round(&graph);

        assert_eq!(num_zerodiff, 2);
        assert_eq!(next.num_fragments(), 2);
        assert_eq!(next.num_edge_nodes(), 1);
        // 0-3 and 0-2 tie at 5.0; the earlier one survives.
        assert_eq!(next.u_nodes[0].original_edge, 3);
        assert_eq!(next.v_nodes[0].id, 0);
        assert_eq!(next.v_nodes[1].id, 2);
        assert_well_formed(&next);
    }

    #[test]
    fn test_compact_drops_finished_components() {
        // Two components, each finished after one round.
        let graph = OriginalGraph::from_edge_list(4, &[(0, 1, 1.0), (2, 3, 2.0)]).unwrap();
        let (next, _) = one_round(&graph);

        assert_eq!(next.num_fragments(), 0);
        assert_eq!(next.num_edge_nodes(), 0);
        assert!(next.edges.is_empty());
    }

    #[test]
    fn test_compact_reference_graph_first_round() {
        let graph = OriginalGraph::from_edge_list(
            8,
            &[
                (4, 5, 0.35),
                (4, 7, 0.37),
                (5, 7, 0.28),
                (0, 7, 0.16),
                (1, 5, 0.32),
                (0, 4, 0.38),
                (2, 3, 0.17),
                (1, 7, 0.19),
                (0, 2, 0.26),
                (1, 2, 0.36),
                (1, 3, 0.29),
                (2, 7, 0.34),
                (6, 2, 0.40),
                (3, 6, 0.52),
                (6, 0, 0.58),
                (6, 4, 0.93),
            ],
        )
        .unwrap();
        let (next, num_zerodiff) = one_round(&graph);

        // {0, 1, 7, 5, 4} and {2, 3, 6} remain, joined by 0-2 as the cheapest.
        assert_eq!(num_zerodiff, 2);
        assert_eq!(next.num_fragments(), num_zerodiff);
        assert_eq!(next.num_edge_nodes(), 1);
        assert_eq!(next.u_nodes[0].original_edge, 8);
        assert_well_formed(&next);
    }
}
