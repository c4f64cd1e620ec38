//! Status line composition.
//!
//! Rendering is kept apart from parsing: this module takes an already parsed
//! [`StatusRecord`], the batch [`ColumnWidths`] and a [`RepositoryRef`] and
//! builds the complete output line. Each line is produced as a single string
//! so one write covers a whole repository and concurrent checks cannot
//! interleave fields.
//!
//! # Column order
//! display-path, branch name, modified status, ahead/behind marker, stash
//! status, tag list.

use crate::core::{
    colors::{style, Color},
    context::RepositoryRef,
    layout::{pad, ColumnWidths, AHEAD_BEHIND_WIDTH, BRANCH_WIDTH, MODIFIED_WIDTH, STASH_WIDTH},
    record::StatusRecord,
};

/// Compose the summary line for one repository
pub fn render_summary(
    repo: &RepositoryRef,
    record: &StatusRecord,
    widths: &ColumnWidths,
) -> String {
    let display_path = repo.display_path();

    let modified = if record.modified_count > 0 {
        format!("{} modified", record.modified_count)
    } else {
        "Clean".to_string()
    };
    let modified_color = if record.modified_count > 0 {
        Color::Red
    } else {
        Color::Green
    };

    let stashed = if record.stash_count > 0 {
        format!("{} stashes", record.stash_count)
    } else {
        String::new()
    };
    let stash_color = if record.stash_count > 0 {
        Color::Red
    } else {
        Color::Green
    };

    let tags = repo
        .tags
        .iter()
        .map(|tag| format!("@{tag}"))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "{}{}{} {}{} {}{}{}{}{}{}{}",
        style(&repo.display_dir, Color::Gray),
        style(&repo.name, Color::White),
        pad(&display_path, widths.path),
        record.branch_name,
        pad(&record.branch_name, BRANCH_WIDTH),
        style(&modified, modified_color),
        pad(&modified, MODIFIED_WIDTH),
        record.ahead_behind,
        pad(&record.ahead_behind, AHEAD_BEHIND_WIDTH),
        style(&stashed, stash_color),
        pad(&stashed, STASH_WIDTH),
        tags,
    )
}

/// Single informational line for a directory without a usable working tree
pub fn render_missing_repository(repo: &RepositoryRef, widths: &ColumnWidths) -> String {
    format!(
        "{}{}{} {}",
        style(&repo.display_dir, Color::Gray),
        style(&repo.name, Color::White),
        pad(&repo.display_path(), widths.path),
        style("Missing .git directory", Color::Red),
    )
}

/// Header block printed before the verbose pass-through report
pub fn render_verbose_header(repo: &RepositoryRef) -> String {
    format!(
        "\n{}{}\n",
        style(&format!("in {}", repo.display_dir), Color::Gray),
        style(&repo.name, Color::White),
    )
}
