//! Keyword set quality and its greedy maximisation.
//!
//! The quality of a keyword set `S` is the total CoreRank of its members minus
//! `lambda` times the number of member pairs that are not adjacent in the
//! graph of words. The function is submodular, so adding words one at a time
//! by best marginal gain gives a `(1 - 1/e)` approximation.

use crate::core::graph::WordGraph;

/// Quality of the keyword set given by `vertices`.
pub fn keyword_quality(graph: &WordGraph, ranks: &[u64], vertices: &[usize], lambda: f64) -> f64 {
    let score: u64 = vertices.iter().map(|&v| ranks[v]).sum();

    let mut missing_pairs = 0u64;
    for (i, &a) in vertices.iter().enumerate() {
        for &b in &vertices[i + 1..] {
            if !graph.are_adjacent(a, b) {
                missing_pairs += 1;
            }
        }
    }

    score as f64 - lambda * missing_pairs as f64
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionStep {
    pub vertex: usize,
    pub gain: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Chosen vertices in the order they were picked.
    pub steps: Vec<SelectionStep>,
    pub quality: f64,
    pub requested: usize,
}

impl Selection {
    pub fn is_complete(&self) -> bool {
        self.steps.len() == self.requested
    }

    pub fn vertices(&self) -> Vec<usize> {
        self.steps.iter().map(|step| step.vertex).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordSelector {
    lambda: f64,
    count: usize,
}

impl KeywordSelector {
    pub fn new(lambda: f64, count: usize) -> Self {
        Self { lambda, count }
    }

    /// Picks up to `count` words. A round only accepts a strictly positive
    /// gain; ties go to the word that sorts first. Selection stops early when
    /// no remaining word qualifies.
    pub fn select(&self, graph: &WordGraph, ranks: &[u64]) -> Selection {
        let vertex_count = graph.vertex_count();
        let mut chosen = vec![false; vertex_count];
        // Number of selected words each vertex is adjacent to.
        let mut links = vec![0u64; vertex_count];
        let mut steps: Vec<SelectionStep> = Vec::with_capacity(self.count.min(vertex_count));
        let mut quality = 0.0;

        for round in 0..self.count {
            let mut best: Option<SelectionStep> = None;
            for vertex in (0..vertex_count).filter(|&v| !chosen[v]) {
                let unlinked = steps.len() as u64 - links[vertex];
                let gain = ranks[vertex] as f64 - self.lambda * unlinked as f64;
                let current = best.map(|step| step.gain).unwrap_or(0.0);
                if gain > current {
                    best = Some(SelectionStep { vertex, gain });
                }
            }

            let Some(step) = best else {
                tracing::debug!(
                    round,
                    requested = self.count,
                    "no remaining word has a positive gain"
                );
                break;
            };

            chosen[step.vertex] = true;
            for (neighbor, _) in graph.neighbors(step.vertex) {
                links[neighbor] += 1;
            }
            quality += step.gain;
            steps.push(step);
        }

        Selection {
            steps,
            quality,
            requested: self.count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kcore::core_numbers;
    use crate::core::rank::core_rank;

    fn ranked(text: &str, window_size: usize) -> (WordGraph, Vec<u64>) {
        let words: Vec<&str> = text.split_whitespace().collect();
        let graph = WordGraph::build(&words, window_size);
        let cores = core_numbers(&graph).unwrap();
        let ranks = core_rank(&graph, &cores);
        (graph, ranks)
    }

    fn picked(graph: &WordGraph, selection: &Selection) -> Vec<String> {
        selection
            .steps
            .iter()
            .map(|step| graph.word(step.vertex).to_string())
            .collect()
    }

    #[test]
    fn test_quality_without_penalty() {
        let (graph, ranks) = ranked("a b c a d", 2);
        // ranks: a=5, b=4, c=4, d=2; {a, b} is a connected pair.
        assert_eq!(keyword_quality(&graph, &ranks, &[0, 1], 0.1), 9.0);
        assert_eq!(keyword_quality(&graph, &ranks, &[], 0.1), 0.0);
        assert_eq!(keyword_quality(&graph, &ranks, &[3], 0.1), 2.0);
    }

    #[test]
    fn test_quality_penalizes_unconnected_pairs() {
        let (graph, ranks) = ranked("a b c a d", 2);
        // b-d and c-d are missing among {a, b, c, d}.
        let quality = keyword_quality(&graph, &ranks, &[0, 1, 2, 3], 0.5);
        assert!((quality - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_greedy_picks_highest_rank_first() {
        let (graph, ranks) = ranked("a b c a d", 2);
        let selection = KeywordSelector::new(0.1, 2).select(&graph, &ranks);

        assert!(selection.is_complete());
        assert_eq!(picked(&graph, &selection), vec!["a", "b"]);
        assert!((selection.quality - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_quality_matches_sum_of_gains() {
        let (graph, ranks) = ranked("a b c a d", 2);
        let selection = KeywordSelector::new(0.1, 4).select(&graph, &ranks);

        assert_eq!(picked(&graph, &selection), vec!["a", "b", "c", "d"]);
        assert!((selection.quality - 14.8).abs() < 1e-9);
        let direct = keyword_quality(&graph, &ranks, &selection.vertices(), 0.1);
        assert!((selection.quality - direct).abs() < 1e-9);
    }

    #[test]
    fn test_ties_go_to_first_word() {
        let (graph, ranks) = ranked("a b c d", 2);
        // ranks: a=1, b=2, c=2, d=1
        let selection = KeywordSelector::new(0.1, 1).select(&graph, &ranks);
        assert_eq!(picked(&graph, &selection), vec!["b"]);
    }

    #[test]
    fn test_penalty_stops_selection() {
        let (graph, ranks) = ranked("a b c d", 2);
        let selection = KeywordSelector::new(3.0, 3).select(&graph, &ranks);

        assert!(!selection.is_complete());
        assert_eq!(picked(&graph, &selection), vec!["b", "c"]);
        assert!((selection.quality - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_more_keywords_than_words() {
        let (graph, ranks) = ranked("a b", 2);
        let selection = KeywordSelector::new(0.1, 3).select(&graph, &ranks);

        assert!(!selection.is_complete());
        assert_eq!(selection.steps.len(), 2);
        assert_eq!(selection.requested, 3);
    }

    #[test]
    fn test_isolated_word_is_never_selected() {
        let (graph, ranks) = ranked("solo", 3);
        let selection = KeywordSelector::new(0.1, 1).select(&graph, &ranks);
        assert!(selection.steps.is_empty());
    }
}
