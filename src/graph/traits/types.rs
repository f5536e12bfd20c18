//! Graph data types and result structures.

use numr::runtime::Runtime;
use numr::tensor::Tensor;

use crate::graph::error::{MstError, MstResult};

/// An undirected weighted edge of the input graph.
///
/// Endpoints are stored in canonical order, `v <= u`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub v: usize,
    pub u: usize,
    pub cost: f64,
}

impl Edge {
    /// Create an edge, swapping the endpoints if needed so that `v <= u`.
    pub fn new(a: usize, b: usize, cost: f64) -> Self {
        if a <= b {
            Self { v: a, u: b, cost }
        } else {
            Self { v: b, u: a, cost }
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.v == self.u
    }
}

/// The graph a spanning tree is computed for.
///
/// Vertices are `0..num_vertices`. Edge order is significant: among edges of
/// equal cost, the one listed first is preferred, which makes every algorithm
/// in this crate deterministic for a fixed input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OriginalGraph {
    num_vertices: usize,
    edges: Vec<Edge>,
}

impl OriginalGraph {
    /// Create a graph, validating endpoints and costs.
    ///
    /// # Errors
    /// Returns [`MstError::InvalidParameter`] if an endpoint is out of range
    /// or a cost is negative or not finite.
    pub fn new(num_vertices: usize, edges: Vec<Edge>) -> MstResult<Self> {
        for (i, edge) in edges.iter().enumerate() {
            if edge.u >= num_vertices {
                return Err(MstError::invalid_parameter(
                    "edges",
                    format!(
                        "edge {i} endpoint {} >= num_vertices {num_vertices}",
                        edge.u
                    ),
                ));
            }
            if !edge.cost.is_finite() || edge.cost < 0.0 {
                return Err(MstError::invalid_parameter(
                    "edges",
                    format!(
                        "edge {i} cost {} must be finite and non-negative",
                        edge.cost
                    ),
                ));
            }
        }
        Ok(Self {
            num_vertices,
            edges,
        })
    }

    /// Create a graph from `(a, b, cost)` triples, canonicalizing each edge.
    pub fn from_edge_list(num_vertices: usize, edges: &[(usize, usize, f64)]) -> MstResult<Self> {
        let edges = edges
            .iter()
            .map(|&(a, b, cost)| Edge::new(a, b, cost))
            .collect();
        Self::new(num_vertices, edges)
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, index: usize) -> &Edge {
        &self.edges[index]
    }

    pub fn cost(&self, index: usize) -> f64 {
        self.edges[index].cost
    }

    /// Number of edges a spanning tree of this graph has.
    pub fn tree_size(&self) -> usize {
        self.num_vertices.saturating_sub(1)
    }
}

/// Options for the Borůvka driver.
#[derive(Debug, Clone, Default)]
pub struct BoruvkaOptions {
    /// Hard cap on the number of rounds. `None` runs until the tree is
    /// complete or a round stalls.
    pub max_rounds: Option<usize>,
}

/// Progress snapshot taken at the end of each round.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RoundStats {
    /// Zero-based round number.
    pub round: usize,
    /// Fragments (V-nodes) at the start of the round.
    pub fragments: usize,
    /// Bipartite incidences at the start of the round.
    pub bipartite_edges: usize,
    /// Tree edges accepted during the round.
    pub accepted: usize,
    /// Edges selected by both of their endpoint fragments.
    pub zero_diff: usize,
    /// Accepted edges so far, including this round.
    pub solution_size: usize,
    /// Cost of the accepted edges so far.
    pub solution_cost: f64,
}

/// A minimum spanning tree expressed against its [`OriginalGraph`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MstSolution {
    /// Original edge indices, in acceptance order.
    pub edges: Vec<usize>,
    /// Sum of the accepted edge costs.
    pub total_cost: f64,
    /// Rounds executed. Always 0 for Kruskal.
    pub rounds: usize,
    /// Per-round progress, one entry per executed round.
    pub round_stats: Vec<RoundStats>,
}

impl MstSolution {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    pub(crate) fn accept(&mut self, edge_index: usize, cost: f64) {
        self.edges.push(edge_index);
        self.total_cost += cost;
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The accepted edges, resolved against the graph they were computed for.
    pub fn tree_edges<'a>(&'a self, graph: &'a OriginalGraph) -> impl Iterator<Item = &'a Edge> {
        self.edges.iter().map(move |&i| graph.edge(i))
    }
}

/// Edge-list graph held in runtime tensors.
///
/// Unlike an adjacency matrix, the edge list keeps parallel edges and the
/// input order, both of which the spanning tree algorithms rely on.
///
/// # Construction
///
/// ```ignore
/// use spanr::graph::EdgeListGraph;
///
/// let graph = EdgeListGraph::<CpuRuntime>::from_edge_list(
///     &[0, 1, 0], &[1, 2, 2], &[1.0, 2.0, 3.0], 3, &device,
/// )?;
/// ```
#[derive(Debug, Clone)]
pub struct EdgeListGraph<R: Runtime> {
    /// First endpoint of each edge [m] (I64).
    pub sources: Tensor<R>,
    /// Second endpoint of each edge [m] (I64).
    pub targets: Tensor<R>,
    /// Cost of each edge [m] (F64).
    pub weights: Tensor<R>,
    /// Number of nodes in the graph
    pub num_nodes: usize,
}

impl<R: Runtime> EdgeListGraph<R> {
    /// Create an edge-list graph.
    ///
    /// # Arguments
    ///
    /// * `sources` - First endpoint of each edge
    /// * `targets` - Second endpoint of each edge
    /// * `weights` - Edge costs
    /// * `num_nodes` - Number of nodes in the graph
    /// * `device` - Device to create tensors on
    pub fn from_edge_list(
        sources: &[i64],
        targets: &[i64],
        weights: &[f64],
        num_nodes: usize,
        device: &R::Device,
    ) -> MstResult<Self> {
        let num_edges = sources.len();
        if targets.len() != num_edges || weights.len() != num_edges {
            return Err(MstError::invalid_parameter(
                "edges",
                format!(
                    "sources, targets and weights must have equal length, got {}, {}, {}",
                    num_edges,
                    targets.len(),
                    weights.len()
                ),
            ));
        }

        Ok(Self {
            sources: Tensor::<R>::from_slice(sources, &[num_edges], device),
            targets: Tensor::<R>::from_slice(targets, &[num_edges], device),
            weights: Tensor::<R>::from_slice(weights, &[num_edges], device),
            num_nodes,
        })
    }

    /// Copy the edge list out of the tensors into an [`OriginalGraph`].
    pub fn to_original(&self) -> MstResult<OriginalGraph> {
        let shape = self.sources.shape();
        if shape.len() != 1 || self.targets.shape() != shape || self.weights.shape() != shape {
            return Err(MstError::invalid_parameter(
                "graph",
                format!(
                    "edge tensors must be 1-D with equal length, got {:?}, {:?}, {:?}",
                    self.sources.shape(),
                    self.targets.shape(),
                    self.weights.shape()
                ),
            ));
        }

        let sources: Vec<i64> = self.sources.to_vec::<i64>();
        let targets: Vec<i64> = self.targets.to_vec::<i64>();
        let weights: Vec<f64> = self.weights.to_vec::<f64>();

        let mut edges = Vec::with_capacity(sources.len());
        for (i, ((&a, &b), &cost)) in sources.iter().zip(&targets).zip(&weights).enumerate() {
            if a < 0 || b < 0 {
                return Err(MstError::invalid_parameter(
                    "graph",
                    format!("edge {i} has negative endpoint ({a}, {b})"),
                ));
            }
            edges.push(Edge::new(a as usize, b as usize, cost));
        }

        OriginalGraph::new(self.num_nodes, edges)
    }
}

/// Spanning tree held in runtime tensors.
#[derive(Debug, Clone)]
pub struct SpanningTree<R: Runtime> {
    /// Edge sources in the tree [num_tree_edges].
    pub sources: Tensor<R>,
    /// Edge targets in the tree [num_tree_edges].
    pub targets: Tensor<R>,
    /// Edge weights in the tree [num_tree_edges].
    pub weights: Tensor<R>,
    /// Total weight of the tree.
    pub total_weight: f64,
    /// Rounds the algorithm needed. 0 for Kruskal.
    pub rounds: usize,
}
