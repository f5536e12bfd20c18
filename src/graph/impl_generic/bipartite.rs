//! Contracted graph of one Borůvka round, encoded as a bipartite graph.
//!
//! Every current fragment is a V-node and every surviving original edge is a
//! U-node. An original edge `(a, b)` contributes two incidences, `(a, e)` and
//! `(b, e)`, each pointing at the other through `companion`. Following the
//! companion of a fragment's incidence is how the fragment finds the
//! neighbor on the far side of that edge.
//!
//! All links are indices into flat arrays. A graph is never patched in place
//! between rounds; compaction builds a fresh one.

use crate::graph::traits::types::OriginalGraph;

/// A fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VNode {
    /// Stable fragment identity: the original vertex the fragment descends from.
    pub id: usize,
    /// Number of incidences on this fragment.
    pub degree: usize,
    /// This round's cheapest incidence, as an index into [`BipartiteGraph::edges`].
    pub min_edge: Option<usize>,
}

/// A surviving original edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UNode {
    pub original_edge: usize,
}

/// One incidence between a fragment and an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BipartiteEdge {
    /// V-node index.
    pub v: usize,
    /// U-node index.
    pub u: usize,
    /// Index of the other incidence of the same U-node.
    pub companion: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BipartiteGraph {
    pub v_nodes: Vec<VNode>,
    pub u_nodes: Vec<UNode>,
    pub edges: Vec<BipartiteEdge>,
}

impl BipartiteGraph {
    /// Build the first-round graph: one fragment per vertex, one U-node per
    /// edge in input order. Self-loops never join two fragments and are left
    /// out.
    pub fn from_original(graph: &OriginalGraph) -> Self {
        let mut v_nodes: Vec<VNode> = (0..graph.num_vertices())
            .map(|id| VNode {
                id,
                degree: 0,
                min_edge: None,
            })
            .collect();
        let mut u_nodes = Vec::with_capacity(graph.num_edges());
        let mut edges = Vec::with_capacity(graph.num_edges() * 2);

        for (original_edge, edge) in graph.edges().iter().enumerate() {
            if edge.is_self_loop() {
                continue;
            }

            let u = u_nodes.len();
            u_nodes.push(UNode { original_edge });

            let j = edges.len();
            edges.push(BipartiteEdge {
                v: edge.v,
                u,
                companion: j + 1,
            });
            edges.push(BipartiteEdge {
                v: edge.u,
                u,
                companion: j,
            });
            v_nodes[edge.v].degree += 1;
            v_nodes[edge.u].degree += 1;
        }

        Self {
            v_nodes,
            u_nodes,
            edges,
        }
    }

    pub fn num_fragments(&self) -> usize {
        self.v_nodes.len()
    }

    pub fn num_edge_nodes(&self) -> usize {
        self.u_nodes.len()
    }

    pub fn num_incidences(&self) -> usize {
        self.edges.len()
    }

    /// Cost of the original edge behind incidence `edge`.
    pub fn incidence_cost(&self, graph: &OriginalGraph, edge: usize) -> f64 {
        graph.cost(self.original_edge_of(edge))
    }

    /// Original edge index behind incidence `edge`.
    pub fn original_edge_of(&self, edge: usize) -> usize {
        self.u_nodes[self.edges[edge].u].original_edge
    }

    /// The fragments at both ends of incidence `edge`: its own, then its
    /// companion's.
    pub fn endpoints(&self, edge: usize) -> (usize, usize) {
        let e = &self.edges[edge];
        (e.v, self.edges[e.companion].v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_original_pairs_companions() {
        let graph =
            OriginalGraph::from_edge_list(3, &[(0, 1, 1.0), (2, 1, 2.0), (0, 2, 3.0)]).unwrap();
        let bg = BipartiteGraph::from_original(&graph);

        assert_eq!(bg.num_fragments(), 3);
        assert_eq!(bg.num_edge_nodes(), 3);
        assert_eq!(bg.num_incidences(), 6);

        for (i, e) in bg.edges.iter().enumerate() {
            let c = &bg.edges[e.companion];
            assert_eq!(c.companion, i);
            assert_eq!(c.u, e.u);
            assert_ne!(c.v, e.v);
        }

        // (2, 1) is stored canonically as (1, 2)
        assert_eq!(bg.endpoints(2), (1, 2));
        assert!(bg.v_nodes.iter().all(|v| v.degree == 2));
    }

    #[test]
    fn test_from_original_skips_self_loops() {
        let graph = OriginalGraph::from_edge_list(2, &[(1, 1, 0.1), (0, 1, 0.5)]).unwrap();
        let bg = BipartiteGraph::from_original(&graph);

        assert_eq!(bg.num_edge_nodes(), 1);
        assert_eq!(bg.u_nodes[0].original_edge, 1);
        assert_eq!(bg.incidence_cost(&graph, 0), 0.5);
        assert_eq!(bg.v_nodes[1].degree, 1);
    }
}
