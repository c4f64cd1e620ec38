//! Repostat - column-aligned git status across many repositories.
//!
//! This library provides the core functionality for repostat: splitting
//! combined git output into sections, parsing status records, computing
//! column layouts over a repository set, and rendering aligned, colored
//! status lines.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which
//! provides:
//! - Sentinel-based section splitting and status record parsing
//! - Column layout and line rendering
//! - The per-batch check context and configuration
//! - Error handling and result types

pub mod commands;
pub mod core;

// === Error handling ===
pub use core::{RepoStatError, Result};

// === Check context ===
pub use core::{RepositoryRef, StatusContext};

// === Configuration ===
pub use core::RepoConfig;

// === Parsing ===
pub use core::{parse_record, split_sections, StatusRecord, SECTION_SENTINEL};

// === Layout and color system ===
pub use core::{pad, style, Color, ColumnWidths};

// === Rendering ===
pub use core::{render_missing_repository, render_summary, render_verbose_header};

// === Output formatting ===
pub use core::{print_diagnostic, print_error};
