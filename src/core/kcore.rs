//! Generalized k-core decomposition on vertex strength (Batagelj & Zaversnik).
//!
//! Vertices are peeled in order of their remaining strength. The core number
//! of a vertex is the largest remaining strength seen at or before its removal.

use crate::core::graph::WordGraph;
use crate::core::heap::{HeapError, IndexedMinHeap};

pub fn core_numbers(graph: &WordGraph) -> Result<Vec<u64>, HeapError> {
    let vertex_count = graph.vertex_count();
    let mut remaining: Vec<u64> = (0..vertex_count).map(|v| graph.strength(v)).collect();
    let mut heap = IndexedMinHeap::from_keys(remaining.clone());
    let mut cores = vec![0; vertex_count];

    while let Some((core, vertex)) = heap.pop_min() {
        cores[vertex] = core;
        tracing::trace!(word = graph.word(vertex), core, "peeled vertex");

        for (neighbor, weight) in graph.neighbors(vertex) {
            if !heap.contains(neighbor) {
                continue;
            }
            remaining[neighbor] -= weight;
            heap.decrease_key(neighbor, core.max(remaining[neighbor]))?;
        }
    }

    Ok(cores)
}
