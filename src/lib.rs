//! spanr - Minimum spanning trees by Borůvka contraction
//!
//! spanr computes minimum spanning trees of weighted undirected graphs with a
//! Borůvka-style algorithm: every round each fragment picks its cheapest
//! outgoing edge, the picks are merged with a union-find, and the graph is
//! contracted in linear time. Vertices and edges are both nodes of an
//! auxiliary bipartite graph, so contraction is a pair of counting sorts over
//! flat index arrays.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      spanr                               │
//! │    (Borůvka rounds, Kruskal reference, edge-list I/O)   │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ uses
//! ┌──────────────────────────▼──────────────────────────────┐
//! │                       numr                               │
//! │             (tensors, runtimes, devices)                │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`graph`] - Spanning tree algorithms, graph types, input and reports
//!
//! # Example
//!
//! ```ignore
//! use spanr::graph::{BoruvkaOptions, OriginalGraph, boruvka_mst};
//!
//! let graph: OriginalGraph = "3\n3\n0 1 1.0\n1 2 2.0\n0 2 3.0\n".parse()?;
//! let tree = boruvka_mst(&graph, &BoruvkaOptions::default())?;
//! assert_eq!(tree.len(), 2);
//! assert!((tree.total_cost - 3.0).abs() < 1e-12);
//! ```
//!
//! Tensor edge lists go through the runtime-generic trait:
//!
//! ```ignore
//! use spanr::graph::{BoruvkaOptions, EdgeListGraph, SpanningTreeAlgorithms};
//! use numr::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime};
//!
//! let device = CpuDevice::new();
//! let client = CpuClient::new(device.clone());
//! let graph = EdgeListGraph::<CpuRuntime>::from_edge_list(
//!     &[0, 1, 0], &[1, 2, 2], &[1.0, 2.0, 3.0], 3, &device,
//! )?;
//! let tree = client.boruvka_mst(&graph, &BoruvkaOptions::default())?;
//! ```

pub mod graph;

pub use graph::{
    BoruvkaOptions, Edge, EdgeListGraph, MstError, MstResult, MstSolution, OriginalGraph,
    RoundStats, SpanningTree, SpanningTreeAlgorithms, boruvka_mst, kruskal_mst,
};

// Re-export numr types that users will commonly need
pub use numr::runtime::{Runtime, RuntimeClient};
pub use numr::tensor::Tensor;
