use crate::core::graph::WordGraph;

/// CoreRank of every vertex: the sum of the core numbers of its neighbors.
pub fn core_rank(graph: &WordGraph, cores: &[u64]) -> Vec<u64> {
    (0..graph.vertex_count())
        .map(|vertex| {
            graph
                .neighbors(vertex)
                .map(|(neighbor, _)| cores[neighbor])
                .sum()
        })
        .collect()
}
