//! Core types: configuration and rank distributions
//!
//! The tunables (damping, sample count, convergence tolerance) live in
//! [`RankConfig`] and are passed explicitly into each algorithm invocation.
//! Neither estimator holds shared mutable state, so both stay pure
//! functions of graph + config and are trivially testable in isolation.

use crate::errors::{RankError, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A rank (or transition) distribution: page name -> probability.
///
/// Values are in [0, 1] and sum to 1.0 within floating tolerance for any
/// valid graph. Iteration order is unspecified; use [`ranks_by_page`] or
/// [`ranks_by_score`] at the output boundary.
pub type RankScores = FxHashMap<String, f64>;

/// Configuration for a ranking run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankConfig {
    /// Damping factor: probability of following an outbound link rather
    /// than jumping to a uniformly random page. Must be in (0, 1].
    pub damping: f64,
    /// Number of random-walk steps for the sampling estimator
    pub samples: usize,
    /// Convergence tolerance for the iterative solver (max absolute
    /// per-page change between sweeps)
    pub tolerance: f64,
    /// Iteration cap for the iterative solver; exceeding it is reported
    /// as a convergence failure instead of looping forever
    pub max_iterations: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            samples: 10_000,
            tolerance: 1e-4,
            max_iterations: 1000,
        }
    }
}

impl RankConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(RankError::invalid_config(format!(
                "damping must be in (0, 1], got {}",
                self.damping
            )));
        }

        if self.samples == 0 {
            return Err(RankError::invalid_config("samples must be > 0"));
        }

        if self.tolerance <= 0.0 {
            return Err(RankError::invalid_config("tolerance must be > 0"));
        }

        if self.max_iterations == 0 {
            return Err(RankError::invalid_config("max_iterations must be > 0"));
        }

        Ok(())
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set sample count
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Builder method: set convergence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Builder method: set iteration cap
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Sort a distribution by page name, ascending.
///
/// Internal computation never depends on map order; sorting happens only
/// here at the presentation boundary.
pub fn ranks_by_page(scores: &RankScores) -> Vec<(&str, f64)> {
    let mut pairs: Vec<(&str, f64)> = scores.iter().map(|(p, &s)| (p.as_str(), s)).collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    pairs
}

/// Sort a distribution by score, descending, breaking ties by page name
/// so equal scores come out in a stable order.
pub fn ranks_by_score(scores: &RankScores) -> Vec<(&str, f64)> {
    let mut pairs: Vec<(&str, f64)> = scores.iter().map(|(p, &s)| (p.as_str(), s)).collect();
    pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal).then(a.0.cmp(b.0)));
    pairs
}
