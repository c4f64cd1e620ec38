//! Output formatting utilities for consistent CLI presentation.
//!
//! Status lines themselves are built by [`crate::core::render`]; this module
//! covers the surrounding diagnostics so errors look the same from every
//! command.

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
/// ✕ Error: <message>
/// ```
///
/// # Colors
/// - "✕ Error:" in red
/// - Message in white
pub fn print_error(message: &str) {
    println!("{} {}", "✕ Error:".red(), message.white());
}

/// Formats and prints a subprocess diagnostic without aborting the batch
///
/// # Format
/// ```text
/// <context>: <detail>
/// ```
pub fn print_diagnostic(context: &str, detail: &str) {
    println!("{} {}", format!("{context}:").red(), detail.trim().white());
}
