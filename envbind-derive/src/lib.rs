//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod attrs;
mod kind;

use attrs::FieldAttrs;
use kind::{classify, FieldKind};

/// `Bindable` derive macro
///
/// Implements `envbind::Bindable` for a struct with named fields: one
/// binding statement per `#[env(name = ...)]` field, in declaration order.
/// A failing field aborts the pass with every earlier field already written
/// and every later field untouched.
///
/// # Supported attributes
///
/// **Field-level**:
/// - `#[env(name = "KEY")]`: the variable the field is bound from; fields
///   without it are not configuration-bound
/// - `#[env(default = "literal")]`: fallback text when the variable is
///   unset or empty, coerced exactly like a live value
///
/// # Unsupported targets
///
/// Anything other than a struct with named fields is rejected at compile
/// time:
///
/// ```compile_fail
/// use envbind::Bindable;
///
/// #[derive(Bindable)]
/// enum Mode {
///     On,
///     Off,
/// }
/// ```
///
/// ```compile_fail
/// use envbind::Bindable;
///
/// #[derive(Bindable)]
/// struct Wrapper(String);
/// ```
#[proc_macro_derive(Bindable, attributes(env))]
pub fn derive_bindable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(
                    &input,
                    "Bindable only supports structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(&input, "Bindable only supports structs")
                .to_compile_error()
                .into();
        }
    };

    // One statement per annotated field, in declaration order.
    let bind_stmts = fields.iter().filter_map(|field| {
        let field_name = field.ident.as_ref().unwrap();

        let attrs = match FieldAttrs::from_field(field) {
            Ok(attrs) => attrs,
            Err(err) => return Some(err.to_compile_error()),
        };

        // No source key: the field is not configuration-bound.
        let key = attrs.name?;
        // An absent default is the empty literal, coerced like any value.
        let default = attrs.default.unwrap_or_default();

        Some(match classify(&field.ty) {
            FieldKind::Text => quote! {
                self.#field_name = _source.lookup(#key, #default);
            },
            FieldKind::Boolean => quote! {
                self.#field_name =
                    ::envbind::de::boolean(#key, &_source.lookup(#key, #default))?;
            },
            FieldKind::Integer => quote! {
                self.#field_name =
                    ::envbind::de::integer(#key, &_source.lookup(#key, #default))?;
            },
            FieldKind::Duration => quote! {
                self.#field_name =
                    ::envbind::de::duration(#key, &_source.lookup(#key, #default))?;
            },
            FieldKind::Unsupported(declared_type) => quote! {
                ::envbind::de::unsupported(#key, #declared_type)?;
            },
        })
    });

    let expanded = quote! {
        impl ::envbind::Bindable for #struct_name {
            fn bind_from(
                &mut self,
                _source: &dyn ::envbind::VarSource,
            ) -> ::std::result::Result<(), ::envbind::BindError> {
                #(#bind_stmts)*
                ::std::result::Result::Ok(())
            }
        }
    };

    TokenStream::from(expanded)
}
