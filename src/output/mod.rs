//! Output formatting for CLI display

use colored::Colorize;
use serde::Serialize;

use crate::validation::ValidationMode;

/// Format the final tag list for display
#[must_use]
pub fn tag_list(tags: &[String], quiet: bool) -> String {
    if quiet {
        return tags.join("\n");
    }
    if tags.is_empty() {
        return "(no tags)".dimmed().to_string();
    }
    tags.iter()
        .map(|tag| format!("  {} {}", "•".cyan(), tag))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a candidate that was not added
#[must_use]
pub fn rejected(candidate: &str) -> String {
    format!("{} '{}' was not added", "✗".yellow(), candidate)
}

/// Format a summary of how many candidates were accepted
#[must_use]
pub fn summary(accepted: usize, offered: usize) -> String {
    format!("{} {accepted} of {offered} candidate(s) added", "✓".green())
}

/// Format the validation modes accepting a candidate
#[must_use]
pub fn check_result(candidate: &str, modes: &[ValidationMode], quiet: bool) -> String {
    let names: Vec<&str> = modes.iter().map(|mode| mode.as_str()).collect();
    if quiet {
        names.join("\n")
    } else {
        format!("'{}' is accepted by: {}", candidate, names.join(", ").bold())
    }
}

/// Serialize any value as a single JSON line
///
/// # Errors
///
/// Returns `serde_json::Error` if the value cannot be serialized.
pub fn json_line<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}
