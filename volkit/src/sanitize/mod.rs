//! Secret-aware message sanitization.
//!
//! This module produces a loggable textual form of a protocol message with
//! every schema-annotated secret replaced by a fixed marker:
//!
//! - **`schema`**: Field descriptors and the [`FieldSchema`] capability
//! - **`redact`**: The [`SecretFields`] accessors and in-place redaction
//! - **`render`**: The textual form of the redacted copy
//!
//! The flow of [`sanitize`] is: inspect the schema; if nothing is flagged
//! sensitive, produce nothing; otherwise redact a private clone and render
//! it. Any failure along the way also produces nothing: the sanitizer
//! never emits an unredacted or partially redacted message, and it never
//! makes the surrounding log statement fail.

mod redact;
mod render;
mod schema;

use std::fmt;

use redact::redact_in_place;
use render::render;

pub use redact::{SANITIZED_MARKER, SecretField, SecretFields, SecretMap, SecretSlot};
pub use schema::{FieldDescriptor, FieldSchema, sensitive_descriptors};

// =============================================================================
// SanitizeError / SanitizeOutcome
// =============================================================================

/// Why a sanitization attempt produced no output.
///
/// These causes are distinguishable internally for tests and diagnostics;
/// the public [`sanitize`] entrypoint collapses all of them into an empty
/// string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SanitizeError {
    /// A field flagged sensitive does not hold a string-to-string mapping.
    #[error("sensitive field `{field}` is not a string-to-string mapping")]
    MalformedField {
        /// Name of the offending field.
        field: &'static str,
    },
    /// The redacted value cannot be written back into the copy.
    #[error("sensitive field `{field}` cannot be written back")]
    UnwritableField {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A [`SecretFields`] implementation returned a different number of
    /// accessors than the schema declares sensitive fields.
    #[error("expected {expected} sensitive field accessors, got {actual}")]
    AccessorMismatch {
        /// Sensitive descriptor count from the schema.
        expected: usize,
        /// Accessor count actually returned.
        actual: usize,
    },
    /// The redacted copy could not be rendered.
    #[error("failed to render the sanitized copy")]
    RenderFailed,
}

/// Result of a successful sanitization attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SanitizeOutcome {
    /// The schema declares no sensitive fields; there is nothing to redact.
    NoSensitiveFields,
    /// The rendered form of the redacted copy.
    Sanitized(String),
}

// =============================================================================
// Entrypoints
// =============================================================================

/// Sanitizes `msg` and reports the precise outcome.
///
/// Redaction runs against a private clone; `msg` itself is never mutated
/// and can still be sent over the wire after the call.
pub fn try_sanitize<M>(msg: &M) -> Result<SanitizeOutcome, SanitizeError>
where
    M: SecretFields + Clone + fmt::Debug,
{
    if sensitive_descriptors(msg).is_empty() {
        return Ok(SanitizeOutcome::NoSensitiveFields);
    }
    let mut copy = msg.clone();
    redact_in_place(&mut copy)?;
    let rendered = render(&copy).map_err(|_| SanitizeError::RenderFailed)?;
    Ok(SanitizeOutcome::Sanitized(rendered))
}

/// Sanitizes `msg` for logging.
///
/// Returns the rendered redacted form, or the empty string when the schema
/// has no sensitive fields or the message could not be safely sanitized.
/// Callers must treat an empty result as "do not log a sanitized form of
/// this message", never as "no secrets present".
#[must_use]
pub fn sanitize<M>(msg: &M) -> String
where
    M: SecretFields + Clone + fmt::Debug,
{
    match try_sanitize(msg) {
        Ok(SanitizeOutcome::Sanitized(rendered)) => rendered,
        Ok(SanitizeOutcome::NoSensitiveFields) | Err(_) => String::new(),
    }
}

// =============================================================================
// Sanitizable - User-facing .sanitized() method
// =============================================================================

/// Public entrypoint for sanitization on message types.
///
/// Blanket-implemented for every type that can be sanitized, so call sites
/// read `msg.sanitized()` rather than threading the free function around.
pub trait Sanitizable: SecretFields + Clone + fmt::Debug {
    /// Equivalent to [`sanitize`] on `self`.
    #[must_use]
    fn sanitized(&self) -> String {
        sanitize(self)
    }
}

impl<T> Sanitizable for T where T: SecretFields + Clone + fmt::Debug {}

// =============================================================================
// Tests
// =============================================================================
