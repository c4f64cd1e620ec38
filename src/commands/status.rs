//! The status check orchestrator.
//!
//! Each repository runs through a small state machine: check the
//! precondition, then either skip with an informational line, stream the
//! verbose report, or run the combined summary queries through splitting,
//! parsing and rendering. Every path completes with a [`CheckOutcome`] so a
//! batch always covers the full repository set, failures included.

use crate::core::{
    context::{RepositoryRef, StatusContext},
    error::{RepoStatError, Result},
    git,
    layout::ColumnWidths,
    output::print_diagnostic,
    record::parse_record,
    render::{render_missing_repository, render_summary, render_verbose_header},
    sections::{split_sections, SECTION_SENTINEL},
    RepoConfig,
};
use std::path::PathBuf;

/// Completion signal of one repository check; produced exactly once per
/// check, regardless of success or failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// A status line (or verbose report) was written
    Rendered,
    /// Precondition failed; an informational line was written instead
    MissingRepository,
    /// The subprocess or parsing failed; diagnostics were written
    Failed,
}

pub fn execute_status(paths: Vec<PathBuf>, verbose: bool) -> Result<()> {
    let config = RepoConfig::load_or_create()?;
    let home_path = dirs::home_dir().ok_or(RepoStatError::HomeDirNotFound)?;

    let mut repo_paths = if paths.is_empty() {
        config.repositories.clone()
    } else {
        paths
    };
    if repo_paths.is_empty() {
        // Nothing configured and nothing requested: check the current
        // directory, like running against a single-repository set.
        repo_paths.push(std::env::current_dir()?);
    }

    let ctx = StatusContext::new(home_path, &repo_paths, |path| config.tags_for(path));
    run_batch(&ctx, verbose);

    Ok(())
}

/// Check every repository in the context, one complete line per write.
///
/// Column widths are computed once over the full set so the output aligns
/// regardless of path length.
pub fn run_batch(ctx: &StatusContext, verbose: bool) -> Vec<CheckOutcome> {
    let widths = ctx.column_widths();

    ctx.repositories
        .iter()
        .map(|repo| {
            let outcome = run_check(repo, &widths, verbose);
            log::debug!("check done for {}: {:?}", repo.path.display(), outcome);
            outcome
        })
        .collect()
}

/// Run one repository check to completion.
///
/// Never propagates an error: precondition, subprocess and parsing failures
/// all render a line or a diagnostic and report through the returned
/// [`CheckOutcome`], so sibling checks always proceed.
pub fn run_check(repo: &RepositoryRef, widths: &ColumnWidths, verbose: bool) -> CheckOutcome {
    if !git::is_git_worktree(&repo.path) {
        println!("{}", render_missing_repository(repo, widths));
        return CheckOutcome::MissingRepository;
    }

    if verbose {
        run_verbose_check(repo)
    } else {
        run_summary_check(repo, widths)
    }
}

fn run_verbose_check(repo: &RepositoryRef) -> CheckOutcome {
    println!("{}", render_verbose_header(repo));

    match git::stream_branch_status(&repo.path) {
        Ok(true) => CheckOutcome::Rendered,
        Ok(false) => CheckOutcome::Failed,
        Err(err) => {
            print_diagnostic(&repo.display_path(), &err.to_string());
            CheckOutcome::Failed
        }
    }
}

fn run_summary_check(repo: &RepositoryRef, widths: &ColumnWidths) -> CheckOutcome {
    let output = match git::run_status_queries(&repo.path) {
        Ok(output) => output,
        Err(err) => {
            print_diagnostic(&repo.display_path(), &err.to_string());
            return CheckOutcome::Failed;
        }
    };

    // Render whatever partial record is derivable even when git exited
    // non-zero; the diagnostics follow the line.
    let sections = split_sections(&output.stdout, SECTION_SENTINEL);
    let outcome = match parse_record(&sections) {
        Ok(record) => {
            println!("{}", render_summary(repo, &record, widths));
            if output.success {
                CheckOutcome::Rendered
            } else {
                CheckOutcome::Failed
            }
        }
        Err(err) => {
            print_diagnostic(&repo.display_path(), &err.to_string());
            CheckOutcome::Failed
        }
    };

    if !output.success {
        print_diagnostic("exec error", "git exited with failure");
    }
    if !output.stderr.trim().is_empty() {
        print_diagnostic("stderr", &output.stderr);
    }

    outcome
}
