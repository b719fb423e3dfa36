//! Iterative fixed-point solver
//!
//! Computes the stationary distribution analytically by repeated
//! application of the PageRank equation
//!
//! ```text
//! rank(p) = (1 - d)/n + d * Σ rank(q) / outdegree(q)    over parents q of p
//! ```
//!
//! until no page's rank moves by more than the configured tolerance.
//! Every sweep is computed from the previous sweep's snapshot, never in
//! place, so the result does not depend on page visit order. A dangling
//! page is treated as linking to every page, which makes the chain
//! irreducible and guarantees convergence for damping in (0, 1); the
//! iteration cap exists to turn any violation of that model into a
//! reported error instead of an infinite loop.

use crate::errors::{RankError, Result};
use crate::graph::LinkGraph;
use crate::types::{RankConfig, RankScores};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// Reverse adjacency: page -> pages that contribute rank to it.
///
/// Built once per solver run and read-only thereafter. A page with no
/// outbound links is recorded as a parent of every page in the graph
/// (the dangling convention), and its effective outdegree is the total
/// page count.
#[derive(Debug)]
pub struct ParentIndex {
    parents: FxHashMap<String, FxHashSet<String>>,
}

impl ParentIndex {
    /// Derive the index from a graph
    pub fn from_graph(graph: &LinkGraph) -> Self {
        let mut parents: FxHashMap<String, FxHashSet<String>> = graph
            .pages()
            .map(|page| (page.to_string(), FxHashSet::default()))
            .collect();

        for (page, links) in graph.iter() {
            if links.is_empty() {
                // Dangling page contributes to everyone, itself included
                for targets in parents.values_mut() {
                    targets.insert(page.to_string());
                }
            } else {
                for target in links {
                    if let Some(set) = parents.get_mut(target.as_str()) {
                        set.insert(page.to_string());
                    }
                }
            }
        }

        Self { parents }
    }

    /// Pages contributing rank to `page`
    pub fn parents_of(&self, page: &str) -> Option<&FxHashSet<String>> {
        self.parents.get(page)
    }
}

/// A converged ranking
#[derive(Debug, Clone)]
pub struct Solution {
    /// The stationary distribution, summing to 1.0 within tolerance
    pub ranks: RankScores,
    /// Number of sweeps it took to converge
    pub iterations: usize,
}

/// Fixed-point PageRank solver
#[derive(Debug, Clone, Default)]
pub struct IterativeSolver {
    config: RankConfig,
}

impl IterativeSolver {
    /// Create a solver with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with custom config
    pub fn with_config(config: RankConfig) -> Self {
        Self { config }
    }

    /// Solve starting from the uniform distribution `1/n`
    pub fn run(&self, graph: &LinkGraph) -> Result<Solution> {
        self.config.validate()?;
        if graph.is_empty() {
            return Err(RankError::empty_graph("cannot iterate"));
        }
        let n = graph.len() as f64;
        let uniform: RankScores = graph.pages().map(|p| (p.to_string(), 1.0 / n)).collect();
        self.solve(graph, uniform)
    }

    /// Solve starting from a caller-provided distribution.
    ///
    /// Pages missing from `initial` start at the uniform `1/n`. Running
    /// from an already-converged distribution terminates after a single
    /// sweep without moving any rank by more than the tolerance.
    pub fn run_from(&self, graph: &LinkGraph, initial: RankScores) -> Result<Solution> {
        self.config.validate()?;
        if graph.is_empty() {
            return Err(RankError::empty_graph("cannot iterate"));
        }
        let n = graph.len() as f64;
        let start: RankScores = graph
            .pages()
            .map(|p| {
                let rank = initial.get(p).copied().unwrap_or(1.0 / n);
                (p.to_string(), rank)
            })
            .collect();
        self.solve(graph, start)
    }

    fn solve(&self, graph: &LinkGraph, mut scores: RankScores) -> Result<Solution> {
        let n = graph.len() as f64;
        let damping = self.config.damping;
        let base = (1.0 - damping) / n;
        let index = ParentIndex::from_graph(graph);

        let mut last_delta = f64::INFINITY;
        for iteration in 1..=self.config.max_iterations {
            let mut next = RankScores::default();
            let mut max_delta: f64 = 0.0;

            for page in graph.pages() {
                let contribution: f64 = index
                    .parents_of(page)
                    .map(|parents| {
                        parents
                            .iter()
                            .map(|parent| {
                                // Dangling parents spread over the whole graph
                                let outdegree = match graph.outdegree(parent) {
                                    Some(0) | None => n,
                                    Some(d) => d as f64,
                                };
                                scores[parent.as_str()] / outdegree
                            })
                            .sum()
                    })
                    .unwrap_or(0.0);

                let rank = base + damping * contribution;
                max_delta = max_delta.max((rank - scores[page]).abs());
                next.insert(page.to_string(), rank);
            }

            scores = next;
            last_delta = max_delta;

            if max_delta <= self.config.tolerance {
                debug!(iteration, max_delta, "solver converged");
                return Ok(Solution {
                    ranks: scores,
                    iterations: iteration,
                });
            }
        }

        Err(RankError::convergence_failure(
            self.config.max_iterations,
            last_delta,
        ))
    }
}

/// Convenience function: solve with the default tolerance and cap.
pub fn iterate_pagerank(graph: &LinkGraph, damping: f64) -> Result<RankScores> {
    IterativeSolver::with_config(RankConfig::default().with_damping(damping))
        .run(graph)
        .map(|solution| solution.ranks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(scores: &RankScores) -> f64 {
        scores.values().sum()
    }

    #[test]
    fn test_parent_index_basic() {
        let graph = LinkGraph::from([
            ("a.html", &["b.html"][..]),
            ("b.html", &["a.html"][..]),
        ]);
        let index = ParentIndex::from_graph(&graph);

        assert!(index.parents_of("a.html").unwrap().contains("b.html"));
        assert!(index.parents_of("b.html").unwrap().contains("a.html"));
        assert!(!index.parents_of("a.html").unwrap().contains("a.html"));
    }

    #[test]
    fn test_parent_index_dangling_parents_everything() {
        let graph = LinkGraph::from([
            ("a.html", &["sink.html"][..]),
            ("sink.html", &[][..]),
        ]);
        let index = ParentIndex::from_graph(&graph);

        // The sink parents both pages, including itself
        assert!(index.parents_of("a.html").unwrap().contains("sink.html"));
        assert!(index.parents_of("sink.html").unwrap().contains("sink.html"));
        assert!(index.parents_of("sink.html").unwrap().contains("a.html"));
    }

    #[test]
    fn test_single_page_gets_rank_one() {
        let graph = LinkGraph::from([("only.html", &[][..])]);
        let solution = IterativeSolver::new().run(&graph).unwrap();

        assert_eq!(solution.ranks.len(), 1);
        assert!((solution.ranks["only.html"] - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_mutual_pair_splits_evenly() {
        let graph = LinkGraph::from([
            ("a.html", &["b.html"][..]),
            ("b.html", &["a.html"][..]),
        ]);
        let ranks = iterate_pagerank(&graph, 0.85).unwrap();

        assert!((ranks["a.html"] - 0.5).abs() < 1e-4);
        assert!((ranks["b.html"] - 0.5).abs() < 1e-4);
        assert!((sum(&ranks) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_chain_with_sink_converges() {
        // c.html is a rank sink; the dangling convention redistributes
        // its mass so neither end of the chain collapses to zero.
        let graph = LinkGraph::from([
            ("a.html", &["b.html"][..]),
            ("b.html", &["c.html"][..]),
            ("c.html", &[][..]),
        ]);
        let solution = IterativeSolver::new().run(&graph).unwrap();

        assert!(solution.iterations < 1000);
        assert!((sum(&solution.ranks) - 1.0).abs() < 1e-4);
        assert!(solution.ranks["a.html"] > 0.0);
        assert!(solution.ranks["c.html"] > 0.0);
        // Rank accumulates down the chain
        assert!(solution.ranks["c.html"] > solution.ranks["a.html"]);
    }

    #[test]
    fn test_warm_start_is_idempotent() {
        let graph = LinkGraph::from([
            ("a.html", &["b.html", "c.html"][..]),
            ("b.html", &["c.html"][..]),
            ("c.html", &["a.html"][..]),
        ]);
        let solver = IterativeSolver::new();
        let converged = solver.run(&graph).unwrap();
        let rerun = solver.run_from(&graph, converged.ranks.clone()).unwrap();

        for (page, rank) in &converged.ranks {
            assert!(
                (rerun.ranks[page] - rank).abs() <= 1e-4,
                "page {page} moved from {rank} to {}",
                rerun.ranks[page]
            );
        }
    }

    #[test]
    fn test_iteration_cap_reports_failure() {
        let graph = LinkGraph::from([
            ("a.html", &["b.html"][..]),
            ("b.html", &["a.html"][..]),
        ]);
        // A cap of 1 with a tolerance far below float noise cannot be met
        let solver = IterativeSolver::with_config(
            RankConfig::default()
                .with_max_iterations(1)
                .with_tolerance(1e-300),
        );
        let err = solver.run(&graph).unwrap_err();
        assert!(err.is_convergence_failure());
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let graph = LinkGraph::from([("a.html", &[][..])]);

        assert!(matches!(
            IterativeSolver::new().run(&LinkGraph::new()),
            Err(RankError::EmptyGraph { .. })
        ));
        assert!(matches!(
            IterativeSolver::with_config(RankConfig::default().with_damping(0.0)).run(&graph),
            Err(RankError::InvalidConfig { .. })
        ));
        assert!(matches!(
            IterativeSolver::with_config(RankConfig::default().with_tolerance(-1.0)).run(&graph),
            Err(RankError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_output_sums_to_one() {
        let graph = LinkGraph::from([
            ("a.html", &["b.html", "c.html", "d.html"][..]),
            ("b.html", &["c.html"][..]),
            ("c.html", &[][..]),
            ("d.html", &["a.html"][..]),
        ]);
        for damping in [0.3, 0.6, 0.85, 0.95] {
            let ranks = iterate_pagerank(&graph, damping).unwrap();
            assert!(
                (sum(&ranks) - 1.0).abs() < 1e-4,
                "sum at d={damping} was {}",
                sum(&ranks)
            );
        }
    }
}
