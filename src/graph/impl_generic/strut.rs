//! The strut: every edge chosen as some fragment's minimum this round.

use super::bipartite::BipartiteGraph;

/// A selected incidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrutEdge {
    /// Fragment that selected the edge.
    pub v: usize,
    /// U-node of the selected edge.
    pub u: usize,
    /// The selected incidence.
    pub edge: usize,
    /// Its companion, leading to the fragment on the other side.
    pub companion: usize,
}

/// Selection state of one U-node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrutNode {
    /// How many of the edge's two fragments selected it: 0, 1 or 2.
    pub degree: u8,
    /// Strut edge of the first selection.
    pub first: Option<usize>,
    /// Strut edge of the second selection, for zero-diff edges.
    pub second: Option<usize>,
}

impl StrutNode {
    pub fn is_zero_diff(&self) -> bool {
        self.degree == 2
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Strut {
    pub edges: Vec<StrutEdge>,
    /// Indexed like [`BipartiteGraph::u_nodes`].
    pub nodes: Vec<StrutNode>,
}

impl Strut {
    pub fn num_zero_diff(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_zero_diff()).count()
    }
}

/// Collect the selections made by [`select_min_edges`](super::select_min_edges).
///
/// Strut edges appear in V-node order, at most one per fragment.
pub fn extract_strut(bg: &BipartiteGraph) -> Strut {
    let mut nodes = vec![StrutNode::default(); bg.num_edge_nodes()];
    let mut edges = Vec::with_capacity(bg.num_fragments());

    for (v, v_node) in bg.v_nodes.iter().enumerate() {
        let Some(j) = v_node.min_edge else {
            continue;
        };
        let incidence = &bg.edges[j];
        let s = edges.len();
        edges.push(StrutEdge {
            v,
            u: incidence.u,
            edge: j,
            companion: incidence.companion,
        });

        let node = &mut nodes[incidence.u];
        if node.degree == 0 {
            node.first = Some(s);
        } else {
            node.second = Some(s);
        }
        node.degree += 1;
    }

    Strut { edges, nodes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::impl_generic::select_min_edges;
    use crate::graph::traits::types::OriginalGraph;

    #[test]
    fn test_extract_strut_degrees() {
        // 0 -(1)- 1 -(5)- 2 -(2)- 3
        let graph =
            OriginalGraph::from_edge_list(4, &[(0, 1, 1.0), (1, 2, 5.0), (2, 3, 2.0)]).unwrap();
        let mut bg = BipartiteGraph::from_original(&graph);
        select_min_edges(&mut bg, &graph);
        let strut = extract_strut(&bg);

        assert_eq!(strut.edges.len(), 4);
        assert_eq!(strut.nodes[0].degree, 2);
        assert_eq!(strut.nodes[1].degree, 0);
        assert_eq!(strut.nodes[2].degree, 2);
        assert_eq!(strut.num_zero_diff(), 2);

        let n0 = strut.nodes[0];
        assert_eq!(strut.edges[n0.first.unwrap()].v, 0);
        assert_eq!(strut.edges[n0.second.unwrap()].v, 1);
    }

    #[test]
    fn test_extract_strut_one_sided() {
        // Star around 0: leaves pick their only edge, 0 picks the cheapest.
        let graph =
            OriginalGraph::from_edge_list(4, &[(0, 1, 3.0), (0, 2, 1.0), (0, 3, 2.0)]).unwrap();
        let mut bg = BipartiteGraph::from_original(&graph);
        select_min_edges(&mut bg, &graph);
        let strut = extract_strut(&bg);

        let degrees: Vec<u8> = strut.nodes.iter().map(|n| n.degree).collect();
        assert_eq!(degrees, vec![1, 2, 1]);
        assert!(strut.nodes[0].second.is_none());

        let e = strut.edges[strut.nodes[0].first.unwrap()];
        assert_eq!(bg.endpoints(e.edge), (1, 0));
        assert_eq!(bg.edges[e.companion].v, 0);
    }
}
