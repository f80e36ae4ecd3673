use serde::{Deserialize, Serialize};

use crate::types::RuleKind;

/// Comment marker of the public suffix list format
const COMMENT_PREFIX: &str = "//";

/// How a suffix list source should be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ListMode {
    /// Upstream list: comments and blank lines are skipped, and every line
    /// is also expanded into its ASCII-compatible form
    #[default]
    Raw,
    /// Previously exported list: comments are already stripped and encoded
    /// variants already materialized, so only empty lines are skipped
    Frozen,
}

/// Iterate over the rule lines of a suffix list.
///
/// Lines are returned as written (not trimmed).
pub fn rule_lines(text: &str, mode: ListMode) -> impl Iterator<Item = &str> {
    text.split(is_newline)
        .filter(move |line| keep_line(line, mode))
}

fn keep_line(line: &str, mode: ListMode) -> bool {
    match mode {
        ListMode::Frozen => !line.is_empty(),
        ListMode::Raw => !line.starts_with(COMMENT_PREFIX) && !line.trim().is_empty(),
    }
}

/// LF, VT, FF, CR, NEL, LS and PS all terminate a line.
fn is_newline(c: char) -> bool {
    matches!(
        c,
        '\n' | '\u{0B}' | '\u{0C}' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Classify a rule line. Wildcards take priority over the exception marker.
pub fn classify(line: &str) -> RuleKind {
    if line.contains('*') {
        RuleKind::Wildcard
    } else if line.starts_with('!') {
        RuleKind::Exception
    } else {
        RuleKind::Normal
    }
}
