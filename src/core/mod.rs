//! Core functionality for the repostat tool.
//!
//! This module provides the building blocks of a repository status check:
//! section splitting, record parsing, column layout, rendering, and the
//! surrounding error handling and configuration.

pub mod colors;
pub mod config;
pub mod context;
pub mod dirs;
pub mod error;
pub mod git;
pub mod layout;
pub mod output;
pub mod record;
pub mod render;
pub mod sections;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{RepoStatError, Result};

// === Check context ===
// Explicitly passed per-batch context and repository references
pub use context::{RepositoryRef, StatusContext};

// === Configuration ===
// Configured repository set and tag associations
pub use config::RepoConfig;

// === Parsing ===
// Sentinel splitting and status record extraction
pub use record::{parse_record, StatusRecord};
pub use sections::{split_sections, SECTION_SENTINEL};

// === Layout and rendering ===
// Column width computation and status line composition
pub use colors::{style, Color};
pub use layout::{pad, ColumnWidths};
pub use render::{render_missing_repository, render_summary, render_verbose_header};

// === Output formatting ===
// Diagnostic printing for consistent CLI presentation
pub use output::{print_diagnostic, print_error};
