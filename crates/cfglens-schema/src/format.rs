//! # Path Diff Formatter
//!
//! Renders validation violations for display. Consecutive lines usually
//! share a path prefix; repeating it drowns the signal, so segments that
//! match the previous line's path are rendered as blank padding of equal
//! width and only the differing tail is shown.

use cfglens_core::{Segment, PATH_DELIM};

use crate::validate::Violation;

/// Format violations into display lines.
///
/// An empty violation list produces no output at all — the header is
/// suppressed even when `source` is non-empty. Otherwise a non-empty
/// `source` contributes a leading header line, and each violation
/// produces one line of the form `{compacted path}:{message}\n` with the
/// trailing newline part of the line content.
pub fn format_errors(errors: &[Violation], source: &str) -> Vec<String> {
    let mut lines = Vec::new();
    if errors.is_empty() {
        return lines;
    }

    if !source.is_empty() {
        lines.push(format!("Config validation errors from {source}:"));
    }

    let mut prev_path: &[Segment] = &[];
    for violation in errors {
        let rendered = format_path(violation.path.segments(), prev_path);
        prev_path = violation.path.segments();
        lines.push(format!("{rendered}:{}\n", violation.message));
    }
    lines
}

/// Render `path`, blanking the leading segments it shares with `prev_path`.
///
/// A segment matches while every earlier segment also matched; the first
/// difference and everything after it is rendered as delimiter-joined
/// text. Matched segments become spaces covering the same width the text
/// would have taken. The spurious leading delimiter (or pad column) is
/// stripped.
pub fn format_path(path: &[Segment], prev_path: &[Segment]) -> String {
    let mut out = String::new();
    let mut matches = true;
    for (i, segment) in path.iter().enumerate() {
        matches = matches && prev_path.get(i) == Some(segment);
        if matches {
            out.push_str(&" ".repeat(segment.display_len() + PATH_DELIM.len()));
        } else {
            out.push_str(PATH_DELIM);
            out.push_str(&segment.to_string());
        }
    }
    out.chars().skip(1).collect()
}
