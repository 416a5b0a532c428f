//! Message schema introspection.
//!
//! Protocol messages expose their own field schema through [`FieldSchema`]:
//! a static table of [`FieldDescriptor`]s recording each field's name and
//! whether it was annotated as secret-bearing when the schema was defined.
//! Sensitivity is a schema-time property; it is never inferred from field
//! contents.

// =============================================================================
// FieldDescriptor - Schema-time metadata for one field
// =============================================================================

/// Schema-time metadata about a single message field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    name: &'static str,
    sensitive: bool,
}

impl FieldDescriptor {
    /// A field with no sensitivity annotation.
    #[must_use]
    pub const fn plain(name: &'static str) -> Self {
        Self {
            name,
            sensitive: false,
        }
    }

    /// A field annotated as secret-bearing at schema-definition time.
    #[must_use]
    pub const fn secret(name: &'static str) -> Self {
        Self {
            name,
            sensitive: true,
        }
    }

    /// Field name as declared in the schema.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the schema marks this field as secret-bearing.
    #[must_use]
    pub const fn is_sensitive(&self) -> bool {
        self.sensitive
    }
}

// =============================================================================
// FieldSchema - Capability: message types that describe their own fields
// =============================================================================

/// A message type that exposes its own field schema.
///
/// This trait is implemented by `#[derive(SecretFields)]`, which builds the
/// descriptor table from the struct definition and its `#[secret]`
/// annotations. A type may also implement it by hand when its schema cannot
/// be expressed through the derive.
pub trait FieldSchema {
    /// Descriptors for every field, in declaration order.
    ///
    /// The table is fixed when the schema is defined; the same slice is
    /// returned on every invocation.
    fn field_descriptors(&self) -> &'static [FieldDescriptor];
}

/// Returns the descriptors flagged sensitive, in declaration order.
///
/// An empty result means the schema declares nothing to sanitize. That is
/// the expected answer for most message types, not an error.
#[must_use]
pub fn sensitive_descriptors<M: FieldSchema + ?Sized>(msg: &M) -> Vec<FieldDescriptor> {
    msg.field_descriptors()
        .iter()
        .copied()
        .filter(|descriptor| descriptor.is_sensitive())
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
