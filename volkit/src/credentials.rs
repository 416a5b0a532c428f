//! Credential resolution for storage-plugin requests.
//!
//! Requests reference their credentials indirectly: a [`SecretReference`]
//! names a secret held by an external source, and the plugin resolves it to
//! key/value pairs just before use. The source itself (and how callers are
//! authorized against it) is outside this crate; [`CredentialResolver`] is
//! the boundary, and [`MemoryCredentialResolver`] backs it for embedding
//! and tests.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

// =============================================================================
// SecretReference
// =============================================================================

/// Indirect, by-name reference to a credential set.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SecretReference {
    /// Name of the secret within its namespace.
    pub name: String,
    /// Namespace the secret lives in.
    pub namespace: String,
}

impl SecretReference {
    /// Creates a reference to `namespace`/`name`.
    #[must_use]
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

impl fmt::Display for SecretReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

// =============================================================================
// CredentialError / CredentialResolver
// =============================================================================

/// Failure modes of credential resolution.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// No secret exists under the referenced name.
    #[error("secret {reference} not found")]
    NotFound {
        /// The reference that failed to resolve.
        reference: SecretReference,
    },
    /// The secret exists but the caller may not read it.
    #[error("access to secret {reference} denied")]
    AccessDenied {
        /// The reference that was refused.
        reference: SecretReference,
    },
}

/// Resolves indirect secret references to credential key/value pairs.
pub trait CredentialResolver {
    /// Resolves `secret_ref` to its key/value pairs.
    fn resolve(
        &self,
        secret_ref: &SecretReference,
    ) -> Result<BTreeMap<String, String>, CredentialError>;
}

// =============================================================================
// MemoryCredentialResolver
// =============================================================================

/// In-process resolver backed by a map.
///
/// References on the deny list resolve to [`CredentialError::AccessDenied`]
/// even when a credential set is stored under them, which mirrors a source
/// that holds the secret but refuses the caller.
#[derive(Clone, Debug, Default)]
pub struct MemoryCredentialResolver {
    secrets: HashMap<SecretReference, BTreeMap<String, String>>,
    denied: HashSet<SecretReference>,
}

impl MemoryCredentialResolver {
    /// Creates an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a credential set under `secret_ref`.
    pub fn insert(&mut self, secret_ref: SecretReference, data: BTreeMap<String, String>) {
        self.secrets.insert(secret_ref, data);
    }

    /// Marks `secret_ref` as unreadable by callers.
    pub fn deny(&mut self, secret_ref: SecretReference) {
        self.denied.insert(secret_ref);
    }
}

impl CredentialResolver for MemoryCredentialResolver {
    fn resolve(
        &self,
        secret_ref: &SecretReference,
    ) -> Result<BTreeMap<String, String>, CredentialError> {
        if self.denied.contains(secret_ref) {
            error!(secret = %secret_ref, "access to secret denied");
            return Err(CredentialError::AccessDenied {
                reference: secret_ref.clone(),
            });
        }
        match self.secrets.get(secret_ref) {
            Some(data) => Ok(data.clone()),
            None => {
                error!(secret = %secret_ref, "failed to find secret");
                Err(CredentialError::NotFound {
                    reference: secret_ref.clone(),
                })
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{CredentialError, CredentialResolver, MemoryCredentialResolver, SecretReference};

    fn resolver_with_secret() -> (MemoryCredentialResolver, SecretReference) {
        let secret_ref = SecretReference::new("node-publish-secret", "storage");
        let mut resolver = MemoryCredentialResolver::new();
        resolver.insert(
            secret_ref.clone(),
            BTreeMap::from([
                ("username".to_string(), "alice".to_string()),
                ("password".to_string(), "p@ss".to_string()),
            ]),
        );
        (resolver, secret_ref)
    }

    #[test]
    fn resolves_stored_credentials() {
        let (resolver, secret_ref) = resolver_with_secret();
        let credentials = resolver.resolve(&secret_ref).unwrap();
        assert_eq!(credentials["username"], "alice");
        assert_eq!(credentials["password"], "p@ss");
    }

    #[test]
    fn unknown_reference_is_not_found() {
        let (resolver, _) = resolver_with_secret();
        let missing = SecretReference::new("other", "storage");
        assert_eq!(
            resolver.resolve(&missing),
            Err(CredentialError::NotFound {
                reference: missing.clone()
            })
        );
    }

    #[test]
    fn denied_reference_is_refused_even_when_stored() {
        let (mut resolver, secret_ref) = resolver_with_secret();
        resolver.deny(secret_ref.clone());
        assert_eq!(
            resolver.resolve(&secret_ref),
            Err(CredentialError::AccessDenied {
                reference: secret_ref.clone()
            })
        );
    }

    #[test]
    fn display_is_namespace_then_name() {
        let secret_ref = SecretReference::new("creds", "storage");
        assert_eq!(secret_ref.to_string(), "storage/creds");
    }
}
