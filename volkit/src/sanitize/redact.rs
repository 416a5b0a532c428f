//! Redaction of sensitive field values on a private message copy.
//!
//! The sanitizer never edits the caller's message: redaction runs against a
//! clone, through the accessors handed out by [`SecretFields`]. A sensitive
//! field must hold a string-to-string mapping; every value in that mapping
//! is replaced with [`SANITIZED_MARKER`] while every key is preserved.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use super::SanitizeError;
use super::schema::{FieldSchema, sensitive_descriptors};

/// Fixed placeholder substituted for every value of a sensitive mapping.
pub const SANITIZED_MARKER: &str = "* * * Sanitized * * *";

// =============================================================================
// SecretMap - The string-to-string mapping shape of sensitive values
// =============================================================================

/// The string-to-string mapping shape required of sensitive field values.
///
/// Keys are non-secret identifiers (e.g. credential names) and are left
/// untouched; only values are replaced.
pub trait SecretMap {
    /// Replaces every value with `marker`, preserving every key.
    fn redact_values(&mut self, marker: &str);
}

impl SecretMap for BTreeMap<String, String> {
    fn redact_values(&mut self, marker: &str) {
        for value in self.values_mut() {
            marker.clone_into(value);
        }
    }
}

impl<S: BuildHasher> SecretMap for HashMap<String, String, S> {
    fn redact_values(&mut self, marker: &str) {
        for value in self.values_mut() {
            marker.clone_into(value);
        }
    }
}

// =============================================================================
// SecretSlot / SecretField - Accessors for sensitive fields
// =============================================================================

/// Mutable view of one sensitive field on a private message copy.
pub enum SecretSlot<'m> {
    /// The field holds the required string-to-string mapping.
    Map(&'m mut dyn SecretMap),
    /// The field is annotated sensitive but holds some other shape.
    Malformed,
    /// Mutable access to the field cannot be handed out.
    Unwritable,
}

/// Accessor for one sensitive field, as produced by [`SecretFields`].
pub struct SecretField<'m> {
    name: &'static str,
    slot: SecretSlot<'m>,
}

impl<'m> SecretField<'m> {
    /// Accessor over a field holding a string-to-string mapping.
    #[must_use]
    pub fn map(name: &'static str, map: &'m mut dyn SecretMap) -> Self {
        Self {
            name,
            slot: SecretSlot::Map(map),
        }
    }

    /// Accessor for a sensitive field whose runtime value is not a
    /// string-to-string mapping.
    #[must_use]
    pub fn malformed(name: &'static str) -> Self {
        Self {
            name,
            slot: SecretSlot::Malformed,
        }
    }

    /// Accessor for a sensitive field that cannot be written back.
    #[must_use]
    pub fn unwritable(name: &'static str) -> Self {
        Self {
            name,
            slot: SecretSlot::Unwritable,
        }
    }

    /// Field name as declared in the schema.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

// =============================================================================
// SecretFields - Capability: hand out accessors for every sensitive field
// =============================================================================

/// A message type that hands out mutable accessors for its sensitive fields.
///
/// Implemented by `#[derive(SecretFields)]`. Manual implementations are the
/// escape hatch for schemas the derive cannot express; they must return one
/// accessor per sensitive descriptor, in declaration order, and may report
/// [`SecretSlot::Malformed`] or [`SecretSlot::Unwritable`] when the field
/// cannot be redacted in place.
pub trait SecretFields: FieldSchema {
    /// Accessors for every sensitive field, in declaration order.
    fn secret_fields(&mut self) -> Vec<SecretField<'_>>;
}

/// Replaces every value of every sensitive mapping with [`SANITIZED_MARKER`].
///
/// All-or-nothing: the first malformed or unwritable field aborts the whole
/// operation, so a half-sanitized message is never rendered. The partially
/// redacted copy is discarded by the caller on error.
pub(crate) fn redact_in_place<M: SecretFields>(copy: &mut M) -> Result<(), SanitizeError> {
    let expected = sensitive_descriptors(copy).len();
    let fields = copy.secret_fields();
    if fields.len() != expected {
        return Err(SanitizeError::AccessorMismatch {
            expected,
            actual: fields.len(),
        });
    }
    for field in fields {
        match field.slot {
            SecretSlot::Map(map) => map.redact_values(SANITIZED_MARKER),
            SecretSlot::Malformed => {
                return Err(SanitizeError::MalformedField { field: field.name });
            }
            SecretSlot::Unwritable => {
                return Err(SanitizeError::UnwritableField { field: field.name });
            }
        }
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
