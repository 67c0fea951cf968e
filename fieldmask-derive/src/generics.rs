//! Generic type parameter handling and trait bound management.
//!
//! Bounds are added only for generics that appear in recorded field types.
//!
//! ## PhantomData Handling
//!
//! `PhantomData<T>` fields are skipped when collecting generics: they carry
//! no data to record, so `T` must not be forced to implement `ToValue`. This
//! keeps patterns like `struct TypedId<T> { id: String, _marker: PhantomData<T> }`
//! working when `T` is an external type.

use proc_macro2::TokenStream;
use syn::{parse_quote, Ident};

pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    if let syn::Type::Path(path) = ty {
        if let Some(segment) = path.path.segments.last() {
            if segment.ident == "PhantomData" {
                return;
            }

            if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                for arg in &args.args {
                    if let syn::GenericArgument::Type(inner_ty) = arg {
                        collect_generics_from_type(inner_ty, generics, result);
                    }
                }
            }

            for param in generics.type_params() {
                if segment.ident == param.ident && !result.iter().any(|g| g == &param.ident) {
                    result.push(param.ident.clone());
                }
            }
        }
    }
}

/// Adds `ToValue` bounds to generic parameters used in recorded fields.
pub(crate) fn add_to_value_bounds(
    mut generics: syn::Generics,
    used_generics: &[Ident],
    crate_root: &TokenStream,
) -> syn::Generics {
    for param in generics.type_params_mut() {
        if used_generics.iter().any(|g| g == &param.ident) {
            param.bounds.push(parse_quote!(#crate_root::ToValue));
        }
    }
    generics
}
