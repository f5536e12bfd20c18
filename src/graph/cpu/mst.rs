//! CPU implementation of minimum spanning tree algorithms.

use crate::graph::error::MstResult;
use crate::graph::impl_generic::{boruvka_impl, kruskal_impl};
use crate::graph::traits::mst::SpanningTreeAlgorithms;
use crate::graph::traits::types::{BoruvkaOptions, EdgeListGraph, SpanningTree};
use numr::runtime::cpu::{CpuClient, CpuRuntime};

impl SpanningTreeAlgorithms<CpuRuntime> for CpuClient {
    fn boruvka_mst(
        &self,
        graph: &EdgeListGraph<CpuRuntime>,
        options: &BoruvkaOptions,
    ) -> MstResult<SpanningTree<CpuRuntime>> {
        boruvka_impl(self, graph, options)
    }

    fn kruskal_mst(
        &self,
        graph: &EdgeListGraph<CpuRuntime>,
    ) -> MstResult<SpanningTree<CpuRuntime>> {
        kruskal_impl(self, graph)
    }
}
