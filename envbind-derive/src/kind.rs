//! Classification of declared field types into the closed kind set.

use quote::ToTokens;
use syn::Type;

/// The closed set of bindable field kinds.
///
/// Computed once per field at expansion time; code generation is a total
/// match over this enum, so every annotated field compiles to exactly one
/// coercion call (or to an unconditional unsupported-kind failure).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// `String`: assigned verbatim.
    Text,
    /// `bool`.
    Boolean,
    /// `i64`: the plain signed integer kind.
    Integer,
    /// `std::time::Duration`.
    Duration,
    /// Anything else; carries the declared type as written.
    Unsupported(String),
}

const TEXT_PATHS: &[&[&str]] = &[
    &["String"],
    &["std", "string", "String"],
    &["alloc", "string", "String"],
];
const BOOL_PATHS: &[&[&str]] = &[&["bool"]];
const INTEGER_PATHS: &[&[&str]] = &[&["i64"]];
/// `Duration` is matched by name *and* namespace: a `Duration` under any
/// other path (for example `chrono::Duration`) is not the duration kind.
const DURATION_PATHS: &[&[&str]] = &[
    &["Duration"],
    &["time", "Duration"],
    &["std", "time", "Duration"],
    &["core", "time", "Duration"],
];

pub fn classify(ty: &Type) -> FieldKind {
    let Type::Path(type_path) = ty else {
        return FieldKind::Unsupported(render(ty));
    };
    if type_path.qself.is_some()
        || type_path
            .path
            .segments
            .iter()
            .any(|seg| !seg.arguments.is_empty())
    {
        return FieldKind::Unsupported(render(ty));
    }

    let segments: Vec<String> = type_path
        .path
        .segments
        .iter()
        .map(|seg| seg.ident.to_string())
        .collect();
    let matches = |table: &[&[&str]]| table.iter().any(|candidate| segments == *candidate);

    if matches(TEXT_PATHS) {
        FieldKind::Text
    } else if matches(BOOL_PATHS) {
        FieldKind::Boolean
    } else if matches(INTEGER_PATHS) {
        FieldKind::Integer
    } else if matches(DURATION_PATHS) {
        FieldKind::Duration
    } else {
        FieldKind::Unsupported(render(ty))
    }
}

/// Render a type roughly as written, without the whitespace `quote`
/// inserts between tokens.
fn render(ty: &Type) -> String {
    ty.to_token_stream()
        .to_string()
        .replace(" :: ", "::")
        .replace(" < ", "<")
        .replace(" > ", ">")
        .replace(" >", ">")
        .replace("& ", "&")
}
