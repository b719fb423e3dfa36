//! # linkrank
//!
//! Damped random-surfer PageRank over directed link graphs.
//!
//! The library models a random walk that follows an outbound link with
//! probability `damping` and jumps to a uniformly random page otherwise,
//! then estimates the walk's stationary visitation distribution two
//! independent ways:
//!
//! - **Sampling**: a long Monte-Carlo walk counting page visits
//!   ([`SamplingEstimator`])
//! - **Iteration**: fixed-point iteration on the PageRank equation until
//!   convergence ([`IterativeSolver`])
//!
//! Both consume the same immutable [`LinkGraph`] and converge to
//! approximately the same distribution. Graph irregularities are handled
//! uniformly: a page with no outbound links is modeled as linking to
//! every page, and self-links are removed at graph construction.
//!
//! ```
//! use linkrank::{iterate_pagerank, sample_pagerank, LinkGraph};
//!
//! let graph = LinkGraph::from([
//!     ("a.html", &["b.html"][..]),
//!     ("b.html", &["a.html"][..]),
//! ]);
//!
//! let sampled = sample_pagerank(&graph, 0.85, 10_000)?;
//! let iterated = iterate_pagerank(&graph, 0.85)?;
//! assert!((sampled["a.html"] - iterated["a.html"]).abs() < 0.05);
//! # Ok::<(), linkrank::RankError>(())
//! ```

pub mod corpus;
pub mod errors;
pub mod graph;
pub mod iterate;
pub mod sample;
pub mod transition;
pub mod types;

// Re-export commonly used types
pub use errors::{RankError, Result};
pub use graph::LinkGraph;
pub use iterate::{iterate_pagerank, IterativeSolver, ParentIndex, Solution};
pub use sample::{sample_pagerank, SamplingEstimator};
pub use transition::transition_model;
pub use types::{ranks_by_page, ranks_by_score, RankConfig, RankScores};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
