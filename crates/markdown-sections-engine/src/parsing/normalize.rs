use crate::models::BlockKind;

use super::lexer::normalize_line_endings;

/// Marker that starts an unordered list item.
pub const LIST_MARKER: &str = "- ";

/// Canonicalize a block's raw text before it is stored as section content.
///
/// - Line endings become `\n`.
/// - Code keeps every internal line byte-for-byte; only blank lines at the
///   start and end are removed.
/// - Text containing a list item after a newline is kept as-is once trimmed.
/// - Anything else is split into lines, each trimmed, and rejoined with
///   exactly one blank line between them.
///
/// The result is stable: normalizing it again with the same kind returns it unchanged.
pub fn normalize(raw: &str, kind: &BlockKind) -> String {
    let content = normalize_line_endings(raw);

    if kind.is_code() {
        return strip_blank_edges(&content);
    }

    let content = content.trim();

    if content.contains("\n- ") {
        return content.to_string();
    }

    content
        .split('\n')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// True if the text begins with an unordered list marker.
pub fn is_list_item(text: &str) -> bool {
    text.starts_with(LIST_MARKER)
}

fn strip_blank_edges(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let is_blank = |line: &&str| line.trim().is_empty();

    let Some(first) = lines.iter().position(|l| !is_blank(l)) else {
        return String::new();
    };
    let last = lines.iter().rposition(|l| !is_blank(l)).unwrap_or(first);

    lines[first..=last].join("\n")
}
