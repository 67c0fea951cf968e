//! Derive macro for `fieldmask`.
//!
//! This crate generates the adapter code behind `#[derive(Maskable)]`. It:
//! - reads `#[masked(...)]` field attributes
//! - emits a `ToValue` implementation that builds a `Value::Record` from the
//!   struct's fields, preserving declaration order and field names
//!
//! It does **not** classify fields or apply masking policies. Those live in
//! the main `fieldmask` crate and are applied at runtime, driven by the field
//! names this macro records.

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
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod attrs;
mod derive_struct;
mod generics;
use derive_struct::derive_struct;
use generics::add_to_value_bounds;

/// Derives `fieldmask::ToValue` for structs with named fields.
///
/// The generated impl builds a `Value::Record` whose entries appear in field
/// declaration order, under the fields' declared names. Since classification
/// is driven by field names, the record names are the contract: use
/// `rename` when the Rust identifier differs from the wire name.
///
/// # Field Attributes
///
/// - **No annotation**: the field is recorded under its own name.
///
/// - `#[masked(rename = "mobileNO")]`: records the field under the given
///   name instead of the Rust identifier.
///
/// - `#[masked(skip)]`: omits the field from the record entirely. Skipped
///   fields need no `ToValue` impl.
///
/// Tuple structs, enums, and unions are rejected at compile time: without
/// field names there is nothing for a policy to classify.
///
/// # Generics
///
/// Generic parameters used by recorded fields receive a `ToValue` bound;
/// `PhantomData` fields are ignored.
#[proc_macro_derive(Maskable, attributes(masked))]
pub fn derive_maskable(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the fieldmask crate root.
///
/// Handles crate renaming (e.g., `my_mask = { package = "fieldmask", ... }`)
/// and internal usage (when the derive is used inside fieldmask itself).
fn crate_root() -> TokenStream {
    match crate_name("fieldmask") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::fieldmask },
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    // No container-level options exist; reject rather than silently ignore.
    if let Some(attr) = attrs.iter().find(|attr| attr.path().is_ident("masked")) {
        return Err(syn::Error::new(
            attr.span(),
            "#[masked(...)] is a field attribute and has no meaning on the container",
        ));
    }

    let crate_root = crate_root();

    let output = match &data {
        Data::Struct(data) => derive_struct(data.clone(), &generics, &crate_root)?,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span(),
                "`Maskable` cannot be derived for enums: variants have no stable \
field names for a policy to classify",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "`Maskable` cannot be derived for unions",
            ));
        }
    };

    let bounded_generics = add_to_value_bounds(generics, &output.used_generics, &crate_root);
    let (impl_generics, ty_generics, where_clause) = bounded_generics.split_for_impl();
    let body = &output.body;

    Ok(quote! {
        impl #impl_generics #crate_root::ToValue for #ident #ty_generics #where_clause {
            fn to_value(&self) -> #crate_root::Value {
                #body
            }
        }
    })
}
