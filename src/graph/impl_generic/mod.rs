//! Generic implementations of spanning tree algorithms.
//!
//! The Borůvka pipeline, one call per round phase:
//!
//! ```text
//! select_min_edges -> extract_strut -> resolve_round -> compact_graph
//! ```
//!
//! driven by [`boruvka_mst`] until the tree is complete.

pub mod bipartite;
pub mod boruvka;
pub mod compact;
pub mod kruskal;
pub mod min_edge;
pub mod mst;
pub mod resolve;
pub mod sort;
pub mod strut;
pub mod union_find;

pub use bipartite::{BipartiteEdge, BipartiteGraph, UNode, VNode};
pub use boruvka::boruvka_mst;
pub use compact::compact_graph;
pub use kruskal::kruskal_mst;
pub use min_edge::select_min_edges;
pub use mst::{boruvka_impl, kruskal_impl};
pub use resolve::{RoundOutcome, resolve_round};
pub use strut::{Strut, StrutEdge, StrutNode, extract_strut};
pub use union_find::UnionFind;
