//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`RepoStatError`] which covers every failure mode of a
//! repository status check. It uses `thiserror` for ergonomic error
//! definitions.
//!
//! # Public API
//! - [`RepoStatError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, RepoStatError>`
//!
//! # Error Categories
//! - **Precondition**: Target directory is not a usable git working tree
//! - **Subprocess**: git exited non-zero, wrote to stderr, or exceeded the
//!   output capture limit
//! - **Parsing**: Combined output carried no branch section at all
//! - **Environment**: I/O, config serialization, missing home directory

use thiserror::Error;

/// Domain-specific error types for repostat
#[derive(Error, Debug)]
pub enum RepoStatError {
    // Precondition errors
    #[error("Missing .git directory")]
    MissingRepository,

    // Subprocess errors
    #[error("git exited with failure: {stderr}")]
    Subprocess { stderr: String },

    #[error("git output exceeded the {limit} byte capture limit")]
    BufferExceeded { limit: usize },

    // Parsing errors
    #[error("git produced no branch header")]
    MalformedOutput,

    // Environment errors
    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not determine home directory")]
    HomeDirNotFound,
}

/// Convenience type alias for Results using RepoStatError
pub type Result<T> = std::result::Result<T, RepoStatError>;

impl RepoStatError {
    /// Create a subprocess error from captured stderr text
    pub fn subprocess(stderr: impl Into<String>) -> Self {
        Self::Subprocess {
            stderr: stderr.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_repository_display() {
        let err = RepoStatError::MissingRepository;
        assert_eq!(err.to_string(), "Missing .git directory");
    }

    #[test]
    fn test_subprocess_error_carries_stderr() {
        let err = RepoStatError::subprocess("fatal: not a git repository");
        assert!(err.to_string().contains("fatal: not a git repository"));
    }

    #[test]
    fn test_buffer_exceeded_reports_limit() {
        let err = RepoStatError::BufferExceeded { limit: 1024 * 1024 };
        assert!(err.to_string().contains("1048576"));
    }
}
