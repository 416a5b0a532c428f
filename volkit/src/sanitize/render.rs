//! Textual rendering of redacted message copies.

use std::fmt::{self, Write as _};

/// Renders the single-line `Debug` form of a redacted copy.
///
/// This is the schema's default textual form: field names followed by their
/// values, with the marker already substituted into sensitive mappings.
/// Message types keep their sensitive mappings in `BTreeMap`s, so the output
/// is deterministic for a given schema and value. A formatter error here is
/// an invariant violation in the message's `Debug` impl and is surfaced to
/// the caller, which fails the one sanitization attempt.
pub(crate) fn render<M: fmt::Debug>(copy: &M) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write!(out, "{copy:?}")?;
    Ok(out)
}
