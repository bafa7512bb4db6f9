//! Graph of words: an undirected co-occurrence network over the distinct words
//! of a document.
//!
//! Vertices are inserted in lexicographic order, so a vertex index doubles as
//! the word's rank in sorted order. Edge weights count how many times the two
//! words fell inside the same sliding window. The graph is simple: no loops and
//! no parallel edges.

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::{BTreeMap, BTreeSet, HashMap};

#[derive(Debug, Clone)]
pub struct WordGraph {
    graph: UnGraph<String, u64>,
    index: HashMap<String, NodeIndex>,
    strengths: Vec<u64>,
}

impl WordGraph {
    pub fn build<S: AsRef<str>>(words: &[S], window_size: usize) -> Self {
        let vocabulary: BTreeSet<&str> = words.iter().map(|w| w.as_ref()).collect();

        let mut graph = UnGraph::with_capacity(vocabulary.len(), 0);
        let mut index = HashMap::with_capacity(vocabulary.len());
        for word in vocabulary {
            let node = graph.add_node(word.to_string());
            index.insert(word.to_string(), node);
        }

        let ids: Vec<usize> = words
            .iter()
            .map(|w| index[w.as_ref()].index())
            .collect();

        // A document shorter than the window behaves as one window over all words.
        let reach = window_size.saturating_sub(1);
        let mut edges: BTreeMap<(usize, usize), u64> = BTreeMap::new();
        for (i, &current) in ids.iter().enumerate() {
            for &previous in &ids[i.saturating_sub(reach)..i] {
                if previous == current {
                    continue;
                }
                let key = (previous.min(current), previous.max(current));
                *edges.entry(key).or_insert(0) += 1;
            }
        }

        let mut strengths = vec![0; graph.node_count()];
        for (&(a, b), &weight) in &edges {
            graph.add_edge(NodeIndex::new(a), NodeIndex::new(b), weight);
            strengths[a] += weight;
            strengths[b] += weight;
        }

        Self {
            graph,
            index,
            strengths,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).map(|node| node.index())
    }

    pub fn word(&self, vertex: usize) -> &str {
        &self.graph[NodeIndex::new(vertex)]
    }

    /// Words in vertex order, which is lexicographic order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.node_weights().map(String::as_str)
    }

    pub fn weight(&self, a: usize, b: usize) -> Option<u64> {
        self.graph
            .find_edge(NodeIndex::new(a), NodeIndex::new(b))
            .and_then(|edge| self.graph.edge_weight(edge))
            .copied()
    }

    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.graph
            .find_edge(NodeIndex::new(a), NodeIndex::new(b))
            .is_some()
    }

    /// Sum of the weights of the edges incident to `vertex`.
    pub fn strength(&self, vertex: usize) -> u64 {
        self.strengths[vertex]
    }

    /// Neighbors of `vertex` with the weight of the connecting edge.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = (usize, u64)> + '_ {
        let node = NodeIndex::new(vertex);
        self.graph.edges(node).map(move |edge| {
            let other = if edge.source() == node {
                edge.target()
            } else {
                edge.source()
            };
            (other.index(), *edge.weight())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }

    fn weight_between(graph: &WordGraph, a: &str, b: &str) -> Option<u64> {
        graph.weight(graph.index_of(a)?, graph.index_of(b)?)
    }

    const SHARE_PRICE: &str = "mathematical aspects computer-aided share trading problems \
        statistical analysis share price probabilistic characteristics price series methods \
        mathematical modelling price series probabilistic characteristics";

    #[test]
    fn test_vertices_are_sorted_unique_words() {
        let graph = WordGraph::build(&words("b a c a b"), 3);
        let vocabulary: Vec<&str> = graph.words().collect();

        assert_eq!(vocabulary, vec!["a", "b", "c"]);
        assert_eq!(graph.index_of("a"), Some(0));
        assert_eq!(graph.index_of("c"), Some(2));
        assert_eq!(graph.index_of("missing"), None);
        assert_eq!(graph.word(1), "b");
    }

    #[test]
    fn test_repeated_cooccurrence_accumulates_weight() {
        let graph = WordGraph::build(&words("a b a b"), 2);

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(weight_between(&graph, "a", "b"), Some(3));
        assert_eq!(graph.strength(0), 3);
        assert_eq!(graph.strength(1), 3);
    }

    #[test]
    fn test_no_self_loops() {
        let graph = WordGraph::build(&words("a a a b"), 3);

        assert!(!graph.are_adjacent(0, 0));
        assert_eq!(graph.edge_count(), 1);
        // (a2, b) and (a1, b) fall inside the last window.
        assert_eq!(weight_between(&graph, "a", "b"), Some(2));
    }

    #[test]
    fn test_share_price_example_window_three() {
        let graph = WordGraph::build(&words(SHARE_PRICE), 3);

        assert_eq!(graph.vertex_count(), 14);
        assert_eq!(weight_between(&graph, "price", "probabilistic"), Some(3));
        assert_eq!(weight_between(&graph, "price", "series"), Some(2));
        assert_eq!(weight_between(&graph, "series", "price"), Some(2));
        assert_eq!(weight_between(&graph, "mathematical", "aspects"), Some(1));
        assert_eq!(weight_between(&graph, "mathematical", "trading"), None);
    }

    #[test]
    fn test_document_shorter_than_window_is_fully_connected() {
        let graph = WordGraph::build(&words("x y z"), 10);

        assert_eq!(graph.edge_count(), 3);
        assert!(graph.are_adjacent(0, 1));
        assert!(graph.are_adjacent(0, 2));
        assert!(graph.are_adjacent(1, 2));
    }

    #[test]
    fn test_single_word_has_no_edges() {
        let graph = WordGraph::build(&words("alone"), 3);

        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.strength(0), 0);
        assert_eq!(graph.neighbors(0).count(), 0);
    }

    #[test]
    fn test_neighbors_report_edge_weights() {
        let graph = WordGraph::build(&words("a b c a d"), 2);
        let a = graph.index_of("a").unwrap();

        let mut neighbors: Vec<(&str, u64)> = graph
            .neighbors(a)
            .map(|(v, w)| (graph.word(v), w))
            .collect();
        neighbors.sort();

        assert_eq!(neighbors, vec![("b", 1), ("c", 1), ("d", 1)]);
        assert_eq!(graph.strength(a), 3);
    }
}
