//! Column width computation and padding.
//!
//! The path column is sized from the full repository set so lines align no
//! matter how long any single path is. The remaining columns use generous
//! fixed widths; values that outgrow them are under-padded rather than
//! truncated, so alignment degrades gracefully instead of erroring.

use crate::core::context::RepositoryRef;

/// Fixed column width for the branch name
pub const BRANCH_WIDTH: usize = 32;
/// Fixed column width for the modified-status text
pub const MODIFIED_WIDTH: usize = 14;
/// Fixed column width for the ahead/behind marker
pub const AHEAD_BEHIND_WIDTH: usize = 14;
/// Fixed column width for the stash-status text
pub const STASH_WIDTH: usize = 14;

/// Margin added after the longest display path
const PATH_MARGIN: usize = 2;

/// Per-batch column widths, computed once and reused for every line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    /// Width of the display-path column across all known repositories
    pub path: usize,
}

impl ColumnWidths {
    /// Compute widths from the full repository set of one listing pass
    pub fn from_repositories(repositories: &[RepositoryRef]) -> Self {
        let longest = repositories
            .iter()
            .map(|repo| repo.display_path().chars().count())
            .max()
            .unwrap_or(0);

        ColumnWidths {
            path: longest + PATH_MARGIN,
        }
    }
}

/// Spaces needed to fill `text` out to `width`; never negative
pub fn pad(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.chars().count()))
}
