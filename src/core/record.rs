//! Structured status record extraction from split git output.
//!
//! Git's `status --branch --porcelain`, `stash list` and plain `status`
//! listings are loosely structured text with no formal grammar. This module
//! keeps the tokenizing isolated from rendering so it can be tested on its
//! own.
//!
//! # Public API
//! - [`StatusRecord`]: Parsed per-repository status fields
//! - [`parse_record`]: Extract a record from sentinel-split sections
//!
//! # Section layout on a fully successful run
//! 1. Branch header plus one porcelain line per changed entity
//! 2. `git stash list` output
//! 3. Plain `git status`, used only to recover a detached-HEAD description

use crate::core::error::{RepoStatError, Result};

/// Length of the porcelain status-marker prefix on the branch header ("## ")
const BRANCH_HEADER_PREFIX: usize = 3;

/// Parsed status fields for one repository
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusRecord {
    /// Branch name, or the detached-HEAD description; never empty on success
    pub branch_name: String,
    /// The literal bracketed divergence token such as `[ahead 2]`, or empty
    pub ahead_behind: String,
    /// Number of changed entities, excluding the branch header itself
    pub modified_count: usize,
    /// Number of `stash@{n}:` entries
    pub stash_count: usize,
}

/// Parse split sections into a [`StatusRecord`].
///
/// Fails with [`RepoStatError::MalformedOutput`] only when the branch section
/// is absent or empty — git produced no branch header at all. Every other
/// missing section degrades to a zero count or empty marker.
pub fn parse_record(sections: &[Vec<String>]) -> Result<StatusRecord> {
    let branch_section = sections
        .first()
        .filter(|section| !section.is_empty())
        .ok_or(RepoStatError::MalformedOutput)?;

    let header = &branch_section[0];
    let modified_count = branch_section.len() - 1;

    let ahead_behind = extract_bracketed(header).unwrap_or_default();

    let mut branch_name = branch_header_name(header);
    if branch_name.contains("no branch") {
        // Detached HEAD: the porcelain header says "## HEAD (no branch)", so
        // recover the description from the plain status listing instead.
        branch_name = sections
            .get(2)
            .and_then(|section| section.first())
            .cloned()
            .unwrap_or_else(|| "(detached)".to_string());
    }

    let stash_count = sections
        .get(1)
        .map(|section| section.iter().filter(|line| is_stash_line(line)).count())
        .unwrap_or(0);

    Ok(StatusRecord {
        branch_name,
        ahead_behind,
        modified_count,
        stash_count,
    })
}

/// Branch name from the porcelain header: drop the 3-character status-marker
/// prefix and truncate at the `...` upstream separator if present.
fn branch_header_name(header: &str) -> String {
    let unprefixed: String = header.chars().skip(BRANCH_HEADER_PREFIX).collect();
    match unprefixed.split_once("...") {
        Some((name, _)) => name.to_string(),
        None => unprefixed,
    }
}

/// First `[...]` run in the branch header, spanning to the last closing
/// bracket so combined annotations like `[ahead 1, behind 2]` stay whole.
fn extract_bracketed(header: &str) -> Option<String> {
    let open = header.find('[')?;
    let close = header.rfind(']')?;
    (close > open).then(|| header[open..=close].to_string())
}

/// Matches `stash@{n}: ...` entries from `git stash list`
fn is_stash_line(line: &str) -> bool {
    let Some(rest) = line.strip_prefix("stash@{") else {
        return false;
    };
    let Some(end) = rest.find('}') else {
        return false;
    };
    !rest[..end].is_empty()
        && rest[..end].bytes().all(|b| b.is_ascii_digit())
        && rest[end + 1..].starts_with(':')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_parse_branch_with_divergence_and_changes() {
        let sections = vec![
            section(&[
                "## main...origin/main [ahead 1]",
                " M src/lib.rs",
                "?? notes.txt",
            ]),
            section(&["stash@{0}: WIP on main: abc1234 tweak"]),
            section(&["On branch main"]),
        ];

        let record = parse_record(&sections).unwrap();
        assert_eq!(record.branch_name, "main");
        assert_eq!(record.ahead_behind, "[ahead 1]");
        assert_eq!(record.modified_count, 2);
        assert_eq!(record.stash_count, 1);
    }

    #[test]
    fn test_parse_clean_branch_without_upstream() {
        let sections = vec![section(&["## feature/padding"])];

        let record = parse_record(&sections).unwrap();
        assert_eq!(record.branch_name, "feature/padding");
        assert_eq!(record.ahead_behind, "");
        assert_eq!(record.modified_count, 0);
        assert_eq!(record.stash_count, 0);
    }

    #[test]
    fn test_parse_combined_ahead_behind_marker() {
        let sections = vec![section(&["## main...origin/main [ahead 3, behind 2]"])];

        let record = parse_record(&sections).unwrap();
        assert_eq!(record.ahead_behind, "[ahead 3, behind 2]");
    }

    #[test]
    fn test_parse_detached_head_recovers_from_plain_status() {
        let sections = vec![
            section(&["## HEAD (no branch)"]),
            section(&[]),
            section(&["HEAD detached at abc1234", "nothing to commit"]),
        ];

        let record = parse_record(&sections).unwrap();
        assert_eq!(record.branch_name, "HEAD detached at abc1234");
    }

    #[test]
    fn test_parse_detached_head_with_truncated_output() {
        // Third section missing, e.g. the chained queries short-circuited
        let sections = vec![section(&["## HEAD (no branch)"])];

        let record = parse_record(&sections).unwrap();
        assert_eq!(record.branch_name, "(detached)");
    }

    #[test]
    fn test_parse_missing_stash_section_counts_zero() {
        let sections = vec![section(&["## main", " M a.txt"])];

        let record = parse_record(&sections).unwrap();
        assert_eq!(record.modified_count, 1);
        assert_eq!(record.stash_count, 0);
    }

    #[test]
    fn test_parse_counts_only_stash_entries() {
        let sections = vec![
            section(&["## main"]),
            section(&[
                "stash@{0}: WIP on main: 1111111 one",
                "stash@{1}: On main: saved",
                "warning: unrelated noise",
            ]),
        ];

        let record = parse_record(&sections).unwrap();
        assert_eq!(record.stash_count, 2);
    }

    #[test]
    fn test_parse_no_sections_is_malformed() {
        let err = parse_record(&[]).unwrap_err();
        assert!(matches!(err, RepoStatError::MalformedOutput));
    }

    #[test]
    fn test_parse_empty_branch_section_is_malformed() {
        let err = parse_record(&[Vec::new()]).unwrap_err();
        assert!(matches!(err, RepoStatError::MalformedOutput));
    }

    #[test]
    fn test_stash_line_matching() {
        assert!(is_stash_line("stash@{0}: WIP on main: abc tweak"));
        assert!(is_stash_line("stash@{12}: On main: saved"));
        assert!(!is_stash_line("stash@{}: missing index"));
        assert!(!is_stash_line("stash@{x}: not a number"));
        assert!(!is_stash_line("  stash@{0}: indented"));
    }
}
