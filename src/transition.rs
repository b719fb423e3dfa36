//! Transition model for the damped random surfer
//!
//! Given the current page, the surfer follows one of its outbound links
//! with probability `damping` and jumps to a uniformly random page with
//! probability `1 - damping`. A dangling page (no outbound links) is
//! treated as linking uniformly to every page, itself included, which
//! keeps the Markov chain irreducible: no probability mass is lost.

use crate::errors::{RankError, Result};
use crate::graph::LinkGraph;
use crate::types::RankScores;

/// Compute the probability distribution over the next page.
///
/// Returns the full distribution over all pages in the graph (not just
/// the linked ones), summing to 1.0. Each page receives the base
/// random-jump term `(1 - damping) / n`; each page linked from `page`
/// additionally receives `damping / outdegree`. The two terms are
/// additive: a linked page is also a random-jump target.
///
/// # Errors
///
/// - [`RankError::EmptyGraph`] when the graph has no pages
/// - [`RankError::InvalidConfig`] when `damping` is outside (0, 1]
/// - [`RankError::UnknownPage`] when `page` is not in the graph
pub fn transition_model(graph: &LinkGraph, page: &str, damping: f64) -> Result<RankScores> {
    if graph.is_empty() {
        return Err(RankError::empty_graph("cannot compute transitions"));
    }
    if !(damping > 0.0 && damping <= 1.0) {
        return Err(RankError::invalid_config(format!(
            "damping must be in (0, 1], got {damping}"
        )));
    }
    let links = graph
        .links(page)
        .ok_or_else(|| RankError::unknown_page(page))?;

    let n = graph.len() as f64;

    // Dangling page: uniform over the whole graph, itself included.
    if links.is_empty() {
        return Ok(graph
            .pages()
            .map(|p| (p.to_string(), 1.0 / n))
            .collect());
    }

    let base = (1.0 - damping) / n;
    let follow = damping / links.len() as f64;

    let mut dist: RankScores = graph.pages().map(|p| (p.to_string(), base)).collect();
    for target in links {
        if let Some(prob) = dist.get_mut(target.as_str()) {
            *prob += follow;
        }
    }

    Ok(dist)
}
