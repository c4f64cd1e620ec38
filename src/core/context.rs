//! Explicit per-check context: repository references and their display form.
//!
//! Everything a status check needs from its surroundings — the home path used
//! for abbreviation, the full repository set used for column alignment, and
//! the tag associations — travels in a [`StatusContext`] value handed to each
//! check, rather than in ambient global state.

use crate::core::layout::ColumnWidths;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// One repository under inspection, with its precomputed display form.
///
/// Immutable for the duration of a status check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    /// Absolute path of the working tree
    pub path: PathBuf,
    /// Parent directory with the home path abbreviated to `~`, including a
    /// trailing separator
    pub display_dir: String,
    /// Basename of the working tree
    pub name: String,
    /// Associated tags, opaque short strings
    pub tags: Vec<String>,
}

impl RepositoryRef {
    pub fn new(path: &Path, home: &Path, tags: Vec<String>) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let parent = path.parent().unwrap_or(path);
        let display_dir = format!("{}{}", abbreviate_home(parent, home), MAIN_SEPARATOR);

        RepositoryRef {
            path: path.to_path_buf(),
            display_dir,
            name,
            tags,
        }
    }

    /// Display directory and basename joined, as rendered in the path column
    pub fn display_path(&self) -> String {
        format!("{}{}", self.display_dir, self.name)
    }
}

fn abbreviate_home(path: &Path, home: &Path) -> String {
    match path.strip_prefix(home) {
        Ok(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Ok(rest) => format!("~{}{}", MAIN_SEPARATOR, rest.to_string_lossy()),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}

/// Context for one listing pass over a batch of repositories
#[derive(Debug, Clone)]
pub struct StatusContext {
    pub home_path: PathBuf,
    pub repositories: Vec<RepositoryRef>,
}

impl StatusContext {
    /// Build a context from repository paths and a tag lookup
    pub fn new<F>(home_path: PathBuf, paths: &[PathBuf], tags_for: F) -> Self
    where
        F: Fn(&Path) -> Vec<String>,
    {
        let repositories = paths
            .iter()
            .map(|path| RepositoryRef::new(path, &home_path, tags_for(path)))
            .collect();

        StatusContext {
            home_path,
            repositories,
        }
    }

    /// Column widths over the full repository set; recompute if the set
    /// changes
    pub fn column_widths(&self) -> ColumnWidths {
        ColumnWidths::from_repositories(&self.repositories)
    }
}
