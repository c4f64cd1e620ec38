//! Reusable stdout assertions for CLI integration tests

#![allow(dead_code)]

use predicates::prelude::*;
use predicates::str::ContainsPredicate;

/// The repository renders as clean
pub fn has_clean_status() -> ContainsPredicate {
    predicate::str::contains("Clean")
}

/// The repository renders with a modified count
pub fn has_modified_count(count: usize) -> ContainsPredicate {
    predicate::str::contains(format!("{count} modified"))
}

/// The repository renders with a stash count
pub fn has_stash_count(count: usize) -> ContainsPredicate {
    predicate::str::contains(format!("{count} stashes"))
}

/// The fixed precondition-failure phrase
pub fn has_missing_repo_message() -> ContainsPredicate {
    predicate::str::contains("Missing .git directory")
}
