//! Struct-specific `ToValue` derivation.
//!
//! This module generates the record-building body for named structs and
//! collects the generic parameters that need `ToValue` bounds.

use proc_macro2::{Ident, TokenStream};
use quote::{quote, quote_spanned};
use syn::{spanned::Spanned, DataStruct, Fields, Result};

use crate::{attrs::parse_field_options, generics::collect_generics_from_type};

pub(crate) struct StructDeriveOutput {
    /// The body of the generated `to_value`.
    pub(crate) body: TokenStream,
    /// Generic parameters that appear in recorded field types.
    pub(crate) used_generics: Vec<Ident>,
}

pub(crate) fn derive_struct(
    data: DataStruct,
    generics: &syn::Generics,
    crate_root: &TokenStream,
) -> Result<StructDeriveOutput> {
    match data.fields {
        Fields::Named(fields) => derive_named_struct(fields, generics, crate_root),
        Fields::Unnamed(fields) => Err(syn::Error::new(
            fields.span(),
            "`Maskable` cannot be derived for tuple structs: positional fields \
have no names for a policy to classify",
        )),
        Fields::Unit => Ok(StructDeriveOutput {
            body: quote! {
                #crate_root::Value::Record(::std::vec::Vec::new())
            },
            used_generics: Vec::new(),
        }),
    }
}

fn derive_named_struct(
    fields: syn::FieldsNamed,
    generics: &syn::Generics,
    crate_root: &TokenStream,
) -> Result<StructDeriveOutput> {
    let mut entries = Vec::new();
    let mut used_generics = Vec::new();

    for field in fields.named {
        let span = field.span();
        let options = parse_field_options(&field.attrs)?;
        if options.skip {
            continue;
        }

        let ident = field.ident.expect("named field should have an identifier");
        let name = options.rename.unwrap_or_else(|| ident.to_string());
        collect_generics_from_type(&field.ty, generics, &mut used_generics);

        entries.push(quote_spanned! { span =>
            fields.push((
                ::std::string::String::from(#name),
                #crate_root::ToValue::to_value(&self.#ident),
            ));
        });
    }

    let capacity = entries.len();
    Ok(StructDeriveOutput {
        body: quote! {
            let mut fields: ::std::vec::Vec<(::std::string::String, #crate_root::Value)> =
                ::std::vec::Vec::with_capacity(#capacity);
            #(#entries)*
            #crate_root::Value::Record(fields)
        },
        used_generics,
    })
}
