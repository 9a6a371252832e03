//! Textual recognition of quoted `#include` directives.

/// Extract the filename from a quoted include directive.
///
/// Returns `Some(name)` when the line contains `#include` and splitting on
/// `"` yields exactly one quoted segment (`before"name"after`). Angle-bracket
/// system includes, lines without quotes and lines with any other quote
/// count all yield `None` and are ignored by the caller.
pub fn quoted_include(line: &str) -> Option<&str> {
    if !line.contains("#include") {
        return None;
    }
    let mut segments = line.split('"');
    match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(_), Some(name), Some(_), None) => Some(name),
        _ => None,
    }
}
