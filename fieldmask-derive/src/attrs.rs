//! Parsing of `#[masked(...)]` field attributes.
//!
//! This module maps attribute syntax to per-field options and produces
//! structured errors for invalid forms.

use syn::{spanned::Spanned, Attribute, LitStr, Meta, Result};

/// Options parsed from a field's `#[masked(...)]` attributes.
///
/// ## Option Mapping
///
/// | Attribute | Effect |
/// |-----------|--------|
/// | None | Field recorded under its own name |
/// | `#[masked(rename = "name")]` | Field recorded under `name` |
/// | `#[masked(skip)]` | Field omitted from the record |
#[derive(Clone, Debug, Default)]
pub(crate) struct FieldOptions {
    /// Record the field under this name instead of the Rust identifier.
    pub(crate) rename: Option<String>,
    /// Omit the field from the record entirely.
    pub(crate) skip: bool,
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut seen = false;
    let mut options = FieldOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("masked") {
            continue;
        }
        if seen {
            return Err(syn::Error::new(
                attr.span(),
                "multiple #[masked] attributes specified on the same field",
            ));
        }
        seen = true;

        match &attr.meta {
            Meta::List(_) => {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("rename") {
                        let value: LitStr = meta.value()?.parse()?;
                        options.rename = Some(value.value());
                        Ok(())
                    } else if meta.path.is_ident("skip") {
                        options.skip = true;
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown field option `{}`; expected `rename` or `skip`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            Meta::Path(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "bare #[masked] has no meaning; use #[masked(rename = \"...\")] or #[masked(skip)]",
                ));
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[masked]",
                ));
            }
        }
    }

    if options.skip && options.rename.is_some() {
        return Err(syn::Error::new(
            attrs
                .iter()
                .find(|attr| attr.path().is_ident("masked"))
                .map_or_else(proc_macro2::Span::call_site, Spanned::span),
            "`skip` cannot be combined with `rename`",
        ));
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn parse_attrs(tokens: proc_macro2::TokenStream) -> Vec<Attribute> {
        let input: DeriveInput = syn::parse2(quote! {
            #tokens
            struct Dummy;
        })
        .expect("should parse as DeriveInput");
        input.attrs
    }

    #[test]
    fn no_attribute_returns_defaults() {
        let options = parse_field_options(&parse_attrs(quote! {})).unwrap();
        assert!(options.rename.is_none());
        assert!(!options.skip);
    }

    #[test]
    fn rename_is_parsed() {
        let options =
            parse_field_options(&parse_attrs(quote! { #[masked(rename = "mobileNO")] })).unwrap();
        assert_eq!(options.rename.as_deref(), Some("mobileNO"));
        assert!(!options.skip);
    }

    #[test]
    fn skip_is_parsed() {
        let options = parse_field_options(&parse_attrs(quote! { #[masked(skip)] })).unwrap();
        assert!(options.skip);
    }

    #[test]
    fn bare_masked_errors() {
        let result = parse_field_options(&parse_attrs(quote! { #[masked] }));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("bare #[masked] has no meaning"));
    }

    #[test]
    fn name_value_syntax_errors() {
        let result = parse_field_options(&parse_attrs(quote! { #[masked = "value"] }));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("name-value syntax is not supported"));
    }

    #[test]
    fn unknown_option_errors() {
        let result = parse_field_options(&parse_attrs(quote! { #[masked(flatten)] }));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unknown field option `flatten`"));
    }

    #[test]
    fn multiple_masked_attributes_error() {
        let result = parse_field_options(&parse_attrs(quote! {
            #[masked(skip)]
            #[masked(rename = "x")]
        }));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("multiple #[masked] attributes"));
    }

    #[test]
    fn skip_combined_with_rename_errors() {
        let result =
            parse_field_options(&parse_attrs(quote! { #[masked(skip, rename = "x")] }));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("`skip` cannot be combined with `rename`"));
    }

    #[test]
    fn other_attributes_ignored() {
        let options = parse_field_options(&parse_attrs(quote! {
            #[derive(Clone)]
            #[serde(skip)]
        }))
        .unwrap();
        assert!(!options.skip);
        assert!(options.rename.is_none());
    }
}
