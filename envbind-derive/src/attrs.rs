//! Attribute parsing for `#[env(...)]` annotations.

use syn::{Field, Lit};

/// Parsed `#[env(...)]` attributes from a struct field.
///
/// A field participates in binding only when `name` is present; a `default`
/// without a `name` leaves the field unbound.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Source key the field is bound from.
    pub name: Option<String>,

    /// Default literal used when the variable is unset or empty. Always a
    /// string: the literal is coerced the same way a live value is.
    pub default: Option<String>,
}

impl FieldAttrs {
    /// Extract and parse `#[env(...)]` attributes from a struct field.
    ///
    /// Attributes other than `env` are left for other macros; malformed
    /// `env` attributes are compile errors.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // name = "KEY"
                if meta.path.is_ident("name") {
                    let lit: Lit = meta.value()?.parse()?;
                    let Lit::Str(s) = lit else {
                        return Err(meta.error("name must be a string literal"));
                    };
                    attrs.name = Some(s.value());
                    return Ok(());
                }

                // default = "literal"
                if meta.path.is_ident("default") {
                    let lit: Lit = meta.value()?.parse()?;
                    let Lit::Str(s) = lit else {
                        return Err(meta.error("default must be a string literal"));
                    };
                    attrs.default = Some(s.value());
                    return Ok(());
                }

                Err(meta.error("unsupported env attribute"))
            })?;
        }

        Ok(attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn parses_name() {
        let field: Field = parse_quote! {
            #[env(name = "PORT")]
            pub port: i64
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.name, Some("PORT".to_string()));
        assert_eq!(attrs.default, None);
    }

    #[test]
    fn parses_name_and_default() {
        let field: Field = parse_quote! {
            #[env(name = "PORT", default = "8080")]
            pub port: i64
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.name, Some("PORT".to_string()));
        assert_eq!(attrs.default, Some("8080".to_string()));
    }

    #[test]
    fn unannotated_fields_have_no_attrs() {
        let field: Field = parse_quote! {
            pub name: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.name, None);
        assert_eq!(attrs.default, None);
    }

    #[test]
    fn attributes_of_other_macros_are_ignored() {
        let field: Field = parse_quote! {
            #[serde(rename = "port")]
            pub port: i64
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.name, None);
    }

    #[test]
    fn split_attributes_accumulate() {
        let field: Field = parse_quote! {
            #[env(name = "PORT")]
            #[env(default = "8080")]
            pub port: i64
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.name, Some("PORT".to_string()));
        assert_eq!(attrs.default, Some("8080".to_string()));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let field: Field = parse_quote! {
            #[env(nmae = "PORT")]
            pub port: i64
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn non_string_literals_are_rejected() {
        let field: Field = parse_quote! {
            #[env(name = "PORT", default = 8080)]
            pub port: i64
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }
}
