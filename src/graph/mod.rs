//! Minimum spanning trees of weighted undirected graphs.
//!
//! This module provides:
//! - Borůvka's algorithm over a contracted bipartite graph, one linear-time
//!   contraction per round
//! - Kruskal's algorithm, used as the reference result
//! - Edge-list text input and appendable run reports

mod cpu;
pub mod error;
pub mod impl_generic;
pub mod io;
pub mod traits;

pub use error::{MstError, MstResult};
pub use impl_generic::{boruvka_mst, kruskal_mst};
pub use io::{RunReport, append_report, format_report, parse_graph, read_graph};
pub use traits::*;
