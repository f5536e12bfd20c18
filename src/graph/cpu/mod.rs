mod mst;
