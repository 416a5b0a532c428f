//! Derive macro for `volkit` secret-field introspection.
//!
//! This crate generates the schema table and accessor code behind
//! `#[derive(SecretFields)]`. It:
//! - reads `#[secret]` field attributes
//! - emits `FieldSchema` and `SecretFields` trait implementations
//!
//! It does **not** perform redaction or rendering. Those live in the main
//! `volkit` crate and run at sanitization time.

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
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input, spanned::Spanned};

mod derive_struct;
mod types;

use derive_struct::derive_struct;

/// Derives `volkit::FieldSchema` and `volkit::SecretFields` for a struct
/// with named fields.
///
/// # Field Attributes
///
/// - **No annotation**: the field appears in the descriptor table without a
///   sensitivity mark and is rendered as-is.
///
/// - `#[secret]`: marks the field secret-bearing at schema-definition time.
///   The field must hold a string-to-string mapping
///   (`BTreeMap<String, String>` or `HashMap<String, String>`); at
///   sanitization time every value in the mapping is replaced with the
///   redaction marker while keys are preserved.
///
/// A `#[secret]` field of any other type binds a malformed accessor: the
/// derive does not guess at unrecognized shapes, and sanitization of such a
/// message fails safe with empty output instead of leaking. Prefer
/// `BTreeMap` for secret fields so the rendered form is deterministic.
///
/// Enums, unions, and tuple structs are rejected at compile time; protocol
/// messages are named-field structs.
#[proc_macro_derive(SecretFields, attributes(secret))]
pub fn derive_secret_fields(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        ..
    } = input;

    match data {
        Data::Struct(data) => derive_struct(&ident, data, &generics),
        Data::Enum(data) => Err(syn::Error::new(
            data.enum_token.span(),
            "`SecretFields` can only be derived for structs with named fields",
        )),
        Data::Union(data) => Err(syn::Error::new(
            data.union_token.span(),
            "`SecretFields` cannot be derived for unions",
        )),
    }
}

/// Returns the token stream to reference the volkit crate root.
///
/// Handles crate renaming (e.g., `my_volkit = { package = "volkit", ... }`)
/// and internal usage (when the derive is used inside the volkit crate
/// itself).
fn crate_root() -> TokenStream {
    match crate_name("volkit") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::volkit },
    }
}
