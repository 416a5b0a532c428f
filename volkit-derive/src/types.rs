//! Type utilities for the derive macro.

/// Checks if a type is syntactically a string-to-string map.
///
/// Recognizes `BTreeMap<String, String>` and `HashMap<String, String>`,
/// optionally path-qualified (e.g. `std::collections::BTreeMap<...>`).
///
/// This is intentionally conservative: type aliases, custom hashers, and
/// anything else that cannot be definitively recognized bind a malformed
/// accessor, and sanitization of the message fails safe at runtime instead
/// of guessing at the field's shape.
pub(crate) fn is_string_map(ty: &syn::Type) -> bool {
    let syn::Type::Path(path) = ty else {
        return false;
    };
    let Some(segment) = path.path.segments.last() else {
        return false;
    };
    if segment.ident != "BTreeMap" && segment.ident != "HashMap" {
        return false;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return false;
    };
    let mut type_args = args.args.iter().filter_map(|arg| match arg {
        syn::GenericArgument::Type(ty) => Some(ty),
        _ => None,
    });
    matches!(
        (type_args.next(), type_args.next(), type_args.next()),
        (Some(key), Some(value), None) if is_string(key) && is_string(value)
    )
}

fn is_string(ty: &syn::Type) -> bool {
    let syn::Type::Path(path) = ty else {
        return false;
    };
    path.path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == "String" && segment.arguments.is_empty())
}
