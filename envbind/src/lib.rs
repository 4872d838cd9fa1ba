//! Bind environment variables onto annotated struct fields
//!
//! `envbind` maps external key-value configuration (environment variables)
//! onto a caller-declared struct. Each participating field names its source
//! key and an optional default literal with the `#[env(...)]` attribute;
//! `#[derive(Bindable)]` derives the binding pass, and a [`Binder`] walks the
//! fields in declaration order, resolves each key through a [`VarSource`],
//! coerces the text into the field's declared type, and writes it in place.
//!
//! # Supported field types
//!
//! The set of bindable types is closed:
//!
//! - `String` — assigned verbatim, never fails
//! - `bool` — `1`, `t`, `T`, `true`, `TRUE`, `True` and the matching false
//!   literals
//! - `i64` — base-10 signed decimal
//! - `std::time::Duration` — human duration literals (`"5s"`, `"2h30m"`,
//!   `"1.5h"`); a bare integer is a nanosecond count
//!
//! A field of any other type that carries a `name` annotation fails the
//! binding pass with [`BindError::UnsupportedKind`]. Fields without a `name`
//! annotation are not configuration-bound and are never touched.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use std::time::Duration;
//!
//! use envbind::{Bindable, Binder};
//!
//! #[derive(Debug, Default, Bindable)]
//! struct ServerConfig {
//!     #[env(name = "PORT", default = "8080")]
//!     port: i64,
//!
//!     #[env(name = "TIMEOUT", default = "5s")]
//!     timeout: Duration,
//!
//!     #[env(name = "VERBOSE", default = "false")]
//!     verbose: bool,
//!
//!     // Not configuration-bound: no `name` annotation.
//!     build_tag: String,
//! }
//!
//! # fn main() -> Result<(), envbind::BindError> {
//! let mut source = HashMap::new();
//! source.insert("PORT".to_string(), "9090".to_string());
//!
//! let mut config = ServerConfig::default();
//! Binder::new(&source).bind(&mut config)?;
//!
//! assert_eq!(config.port, 9090);
//! assert_eq!(config.timeout, Duration::from_secs(5));
//! assert!(!config.verbose);
//! # Ok(())
//! # }
//! ```
//!
//! Binding against the live process environment uses
//! [`Binder::from_os_env`], or [`Binder::from_dotenv`] to load a `.env` file
//! first.
//!
//! # Attributes
//!
//! ## `#[env(name = "KEY")]`
//!
//! Names the variable the field is bound from. Binding is opt-in: only
//! fields with a `name` participate.
//!
//! ## `#[env(default = "literal")]`
//!
//! Fallback text used when the variable is unset or empty. The literal is
//! always a string and goes through the same coercion as a live value, so a
//! malformed default fails the pass with the field's parse error. Without a
//! `default`, an unset variable binds the empty string — fine for `String`
//! fields, a parse error for the other kinds.
//!
//! # Failure semantics
//!
//! A pass stops at the first failing field and returns its error; fields
//! bound before the failure keep their new values, later fields are left
//! untouched. See [`BindError`].

#[doc(hidden)]
pub mod de;

mod error;
mod source;

pub use error::{BindError, DurationError};
pub use source::{OsEnv, VarSource};

pub use envbind_derive::Bindable;

/// A record whose annotated fields can be bound from a [`VarSource`].
///
/// Implemented by `#[derive(Bindable)]`; not intended to be written by
/// hand. The derive only applies to structs with named fields.
pub trait Bindable {
    /// Bind every annotated field from `source`, in declaration order.
    ///
    /// Usually called through [`Binder::bind`].
    fn bind_from(&mut self, source: &dyn VarSource) -> Result<(), BindError>;
}

/// Binds configuration records against a held [`VarSource`].
///
/// A binder is stateless aside from its source: one instance can bind any
/// number of records of any number of types.
#[derive(Debug, Clone)]
pub struct Binder<S = OsEnv> {
    source: S,
}

impl Binder<OsEnv> {
    /// A binder over the process environment.
    pub fn from_os_env() -> Self {
        Binder::new(OsEnv)
    }

    /// A binder over the process environment, loading `./.env` first.
    ///
    /// A missing `.env` file is not an error; a malformed or unreadable one
    /// is surfaced as [`BindError::Dotenv`].
    pub fn from_dotenv() -> Result<Self, BindError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(err) => return Err(BindError::Dotenv(err)),
        }
        Ok(Binder::new(OsEnv))
    }
}

impl Default for Binder<OsEnv> {
    fn default() -> Self {
        Self::from_os_env()
    }
}

impl<S: VarSource> Binder<S> {
    /// A binder over an arbitrary source. Pass a reference to share one
    /// source between binders.
    pub fn new(source: S) -> Self {
        Binder { source }
    }

    /// Bind `record`'s annotated fields in place.
    ///
    /// Stops at the first coercion failure and returns it unchanged; fields
    /// already bound keep their values (no rollback).
    pub fn bind<T: Bindable>(&self, record: &mut T) -> Result<(), BindError> {
        record.bind_from(&self.source)
    }
}
