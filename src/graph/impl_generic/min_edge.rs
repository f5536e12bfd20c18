//! Cheapest incident edge of every fragment.

use crate::graph::traits::types::OriginalGraph;

use super::bipartite::BipartiteGraph;

/// Record on every V-node its cheapest incidence.
///
/// Incidences are scanned in array order and a candidate replaces the current
/// best only when strictly cheaper, so among equal costs the first incidence
/// wins. Fragments without incidences are left with `min_edge == None`.
pub fn select_min_edges(bg: &mut BipartiteGraph, graph: &OriginalGraph) {
    for v in bg.v_nodes.iter_mut() {
        v.min_edge = None;
    }

    for i in 0..bg.edges.len() {
        let v = bg.edges[i].v;
        let replace = match bg.v_nodes[v].min_edge {
            None => true,
            Some(best) => bg.incidence_cost(graph, best) > bg.incidence_cost(graph, i),
        };
        if replace {
            bg.v_nodes[v].min_edge = Some(i);
        }
    }
}
