//! String helpers for emitting HTML fragments
//!
//! No escaping happens here: interpolated values are trusted as-is and
//! sanitizing untrusted input is the caller's responsibility.

use std::fmt::Write;

/// Format a single `name="value"` attribute, with a leading space
pub(crate) fn attr(name: &str, value: &str) -> String {
    format!(" {name}=\"{value}\"")
}

/// Join class fragments into a class attribute value, skipping empties
pub(crate) fn join_classes(classes: &[&str]) -> String {
    let mut out = String::new();
    for class in classes {
        if class.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(class);
    }
    out
}

/// Emit `<name attrs>body</name>` into the output buffer
pub(crate) fn content_tag(out: &mut String, name: &str, attrs: &str, body: &str) {
    // String's fmt::Write never fails
    let _ = write!(out, "<{name}{attrs}>{body}</{name}>");
}
