//! Minimum spanning tree via Borůvka rounds over a contracted bipartite graph.
//!
//! Each round every fragment picks its cheapest incident edge, the picks are
//! accepted unless they would close a cycle, the fragments they join are
//! merged, and the graph is contracted. On a connected graph the fragment
//! count at least halves per round, so there are O(log V) rounds of O(E)
//! work each.

use crate::graph::error::{MstError, MstResult};
use crate::graph::traits::types::{BoruvkaOptions, MstSolution, OriginalGraph, RoundStats};

use super::bipartite::BipartiteGraph;
use super::compact::compact_graph;
use super::min_edge::select_min_edges;
use super::resolve::resolve_round;
use super::strut::extract_strut;
use super::union_find::UnionFind;

/// Borůvka's minimum spanning tree.
///
/// Among equal-cost edges the one listed first in `graph` is preferred, so the
/// result is the same tree a stable-sorted Kruskal produces.
///
/// # Errors
/// - [`MstError::Disconnected`] if a round accepts no edge before the tree
///   has `n - 1` edges.
/// - [`MstError::RoundLimitExceeded`] if `options.max_rounds` is reached first.
pub fn boruvka_mst(graph: &OriginalGraph, options: &BoruvkaOptions) -> MstResult<MstSolution> {
    let target = graph.tree_size();
    let mut solution = MstSolution::with_capacity(target);
    let mut bg = BipartiteGraph::from_original(graph);
    let mut round = 0;

    while solution.len() < target {
        if let Some(max_rounds) = options.max_rounds {
            if round >= max_rounds {
                return Err(MstError::RoundLimitExceeded { max_rounds });
            }
        }

        let fragments = bg.num_fragments();
        let bipartite_edges = bg.num_incidences();

        select_min_edges(&mut bg, graph);
        let strut = extract_strut(&bg);
        let mut uf = UnionFind::new(fragments);
        let outcome = resolve_round(&bg, &strut, graph, &mut uf, &mut solution);

        solution.round_stats.push(RoundStats {
            round,
            fragments,
            bipartite_edges,
            accepted: outcome.accepted,
            zero_diff: outcome.num_zerodiff,
            solution_size: solution.len(),
            solution_cost: solution.total_cost,
        });
        round += 1;

        if outcome.accepted == 0 {
            return Err(MstError::Disconnected {
                components: graph.num_vertices() - solution.len(),
                rounds: round,
            });
        }

        if solution.len() < target {
            bg = compact_graph(&bg, graph, &uf, outcome.num_zerodiff);
        }
    }

    solution.rounds = round;
    Ok(solution)
}
