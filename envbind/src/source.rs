//! Variable sources: the lookup capability the binder reads through

use std::collections::HashMap;
use std::env;

/// A key-value lookup capability.
///
/// `lookup` is total: it returns the source's value for `key` when one is
/// set and non-empty, and `default` verbatim otherwise. A variable that is
/// set but empty is indistinguishable from an unset one.
pub trait VarSource {
    /// Resolve `key`, falling back to `default` (which may itself be empty).
    fn lookup(&self, key: &str, default: &str) -> String;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEnv;

impl VarSource for OsEnv {
    fn lookup(&self, key: &str, default: &str) -> String {
        match env::var(key) {
            Ok(value) if !value.is_empty() => value,
            _ => default.to_owned(),
        }
    }
}

/// In-memory source, for tests and for binding against captured snapshots
/// instead of the live environment.
impl VarSource for HashMap<String, String> {
    fn lookup(&self, key: &str, default: &str) -> String {
        match self.get(key) {
            Some(value) if !value.is_empty() => value.clone(),
            _ => default.to_owned(),
        }
    }
}

impl<S: VarSource + ?Sized> VarSource for &S {
    fn lookup(&self, key: &str, default: &str) -> String {
        (**self).lookup(key, default)
    }
}
