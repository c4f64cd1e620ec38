//! Sentinel-based splitting of combined subprocess output.
//!
//! The summary path runs three git queries in one shell invocation with a
//! sentinel echoed between them. This module cuts the captured blob back
//! into the per-query sections.

/// Literal token echoed between the chained git queries
pub const SECTION_SENTINEL: &str = "---";

/// Split raw subprocess output into ordered groups of non-empty lines.
///
/// Whitespace-only lines are dropped. A line equal to `sentinel` closes the
/// current group, which is appended even when empty. An unterminated trailing
/// group is kept, since the last chained query emits no extra sentinel.
/// Malformed or short input simply yields fewer groups; there is no error
/// condition.
pub fn split_sections(raw: &str, sentinel: &str) -> Vec<Vec<String>> {
    let mut sections = Vec::new();
    let mut current = Vec::new();

    for line in raw.lines().filter(|line| !line.trim().is_empty()) {
        if line == sentinel {
            sections.push(std::mem::take(&mut current));
        } else {
            current.push(line.to_string());
        }
    }

    if !current.is_empty() {
        sections.push(current);
    }

    sections
}
