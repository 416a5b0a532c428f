//! Runtime support for storage-plugin integrations.
//!
//! This crate covers the three ambient concerns a storage-plugin driver
//! needs around its wire protocol:
//!
//! - **Sanitization**: a loggable form of any protocol message with every
//!   schema-annotated secret replaced by a fixed marker (`sanitize`,
//!   `Sanitizable`, and the `SecretFields` derive).
//! - **Credentials**: resolution of by-name secret references to key/value
//!   credential pairs (`credentials`).
//! - **Volume metadata**: persistence of per-volume mount state as small
//!   JSON files under a plugin-owned directory (`metadata`).
//!
//! What this crate does not do:
//! - mount or attach volumes
//! - register plugins or speak the storage wire protocol
//! - authenticate callers against the credential source
//!
//! The `SecretFields` derive macro lives in `volkit-derive` and is
//! re-exported from this crate.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use volkit_derive::SecretFields;

#[allow(unused_extern_crates)]
extern crate self as volkit;

// Module declarations
pub mod credentials;
pub mod metadata;
mod sanitize;

// Re-exports from the credentials module
pub use credentials::{
    CredentialError, CredentialResolver, MemoryCredentialResolver, SecretReference,
};
// Re-exports from the metadata module
pub use metadata::{
    MetadataError, VOLUME_DATA_FILE, escape_volume_id, load_volume_data, save_volume_data,
    unescape_volume_id, volume_device_data_dir, volume_device_dir,
};
// Re-exports from the sanitize module
pub use sanitize::{
    FieldDescriptor, FieldSchema, SANITIZED_MARKER, Sanitizable, SanitizeError, SanitizeOutcome,
    SecretField, SecretFields, SecretMap, SecretSlot, sanitize, sensitive_descriptors,
    try_sanitize,
};
