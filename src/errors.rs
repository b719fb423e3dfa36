//! Error types for linkrank
//!
//! This module defines the error types used throughout the library.
//! All errors are designed to be informative and actionable.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RankError>;

/// Main error type for linkrank
#[derive(Error, Debug, Clone)]
pub enum RankError {
    /// The graph contains no pages; no distribution can be normalized
    #[error("Empty graph: {message}")]
    EmptyGraph { message: String },

    /// A page was queried that is not a key of the graph
    #[error("Unknown page: {page}")]
    UnknownPage { page: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// The iterative solver did not converge within the iteration cap
    #[error("Convergence failure after {iterations} iterations (delta={delta:.6})")]
    ConvergenceFailure { iterations: usize, delta: f64 },

    /// Failed to read a corpus from disk
    #[error("Corpus I/O error: {message}")]
    Io { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Internal error (should not occur in normal usage)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl RankError {
    /// Create an empty graph error
    pub fn empty_graph(message: impl Into<String>) -> Self {
        Self::EmptyGraph {
            message: message.into(),
        }
    }

    /// Create an unknown page error
    pub fn unknown_page(page: impl Into<String>) -> Self {
        Self::UnknownPage { page: page.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a convergence failure error
    pub fn convergence_failure(iterations: usize, delta: f64) -> Self {
        Self::ConvergenceFailure { iterations, delta }
    }

    /// Create a corpus I/O error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this error indicates non-convergence of the solver
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, Self::ConvergenceFailure { .. })
    }
}

impl From<std::io::Error> for RankError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<serde_json::Error> for RankError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
