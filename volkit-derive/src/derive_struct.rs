//! Struct-specific `FieldSchema` / `SecretFields` derivation.
//!
//! This module builds the static descriptor table and the sensitive-field
//! accessor list from a struct definition and its `#[secret]` annotations.

use proc_macro2::{Ident, TokenStream};
use quote::{quote, quote_spanned};
use syn::{Attribute, DataStruct, Fields, Meta, Result, spanned::Spanned};

use crate::{crate_root, types::is_string_map};

pub(crate) fn derive_struct(
    name: &Ident,
    data: DataStruct,
    generics: &syn::Generics,
) -> Result<TokenStream> {
    let fields = match data.fields {
        Fields::Named(fields) => fields.named,
        Fields::Unnamed(fields) => {
            return Err(syn::Error::new(
                fields.span(),
                "`SecretFields` requires named fields",
            ));
        }
        // Unit structs carry no fields and therefore nothing to sanitize.
        Fields::Unit => syn::punctuated::Punctuated::new(),
    };

    let root = crate_root();
    let mut descriptor_entries = Vec::new();
    let mut accessor_entries = Vec::new();

    for field in fields {
        let span = field.span();
        let is_secret = parse_secret_attr(&field.attrs)?;
        let ident = field
            .ident
            .clone()
            .expect("named field should have an identifier");

        if is_secret {
            descriptor_entries.push(quote_spanned! { span =>
                #root::FieldDescriptor::secret(stringify!(#ident))
            });
            if is_string_map(&field.ty) {
                accessor_entries.push(quote_spanned! { span =>
                    #root::SecretField::map(stringify!(#ident), &mut self.#ident)
                });
            } else {
                accessor_entries.push(quote_spanned! { span =>
                    #root::SecretField::malformed(stringify!(#ident))
                });
            }
        } else {
            descriptor_entries.push(quote_spanned! { span =>
                #root::FieldDescriptor::plain(stringify!(#ident))
            });
        }
    }

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics #root::FieldSchema for #name #ty_generics #where_clause {
            fn field_descriptors(&self) -> &'static [#root::FieldDescriptor] {
                const FIELDS: &[#root::FieldDescriptor] = &[
                    #(#descriptor_entries),*
                ];
                FIELDS
            }
        }

        impl #impl_generics #root::SecretFields for #name #ty_generics #where_clause {
            fn secret_fields(&mut self) -> ::std::vec::Vec<#root::SecretField<'_>> {
                ::std::vec![
                    #(#accessor_entries),*
                ]
            }
        }
    })
}

fn parse_secret_attr(attrs: &[Attribute]) -> Result<bool> {
    let mut seen = false;
    for attr in attrs {
        if !attr.path().is_ident("secret") {
            continue;
        }
        match &attr.meta {
            Meta::Path(_) => {
                if seen {
                    return Err(syn::Error::new(
                        attr.span(),
                        "multiple #[secret] attributes on the same field",
                    ));
                }
                seen = true;
            }
            _ => {
                return Err(syn::Error::new(
                    attr.span(),
                    "#[secret] does not take arguments",
                ));
            }
        }
    }
    Ok(seen)
}
