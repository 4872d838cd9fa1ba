//! Binding from a custom source instead of the process environment

use std::collections::HashMap;

use envbind::{Bindable, Binder, VarSource};

/// A source that namespaces every lookup, reading `PORT` as `APP_PORT`.
struct Prefixed<S> {
    prefix: &'static str,
    inner: S,
}

impl<S: VarSource> VarSource for Prefixed<S> {
    fn lookup(&self, key: &str, default: &str) -> String {
        self.inner.lookup(&format!("{}{}", self.prefix, key), default)
    }
}

#[derive(Debug, Default, Bindable)]
struct Config {
    #[env(name = "DATABASE_URL", default = "postgres://localhost/dev")]
    database_url: String,

    #[env(name = "POOL_SIZE", default = "4")]
    pool_size: i64,
}

fn main() -> anyhow::Result<()> {
    let mut snapshot = HashMap::new();
    snapshot.insert(
        "APP_DATABASE_URL".to_string(),
        "postgres://db/prod".to_string(),
    );
    snapshot.insert("APP_POOL_SIZE".to_string(), "16".to_string());

    let source = Prefixed {
        prefix: "APP_",
        inner: snapshot,
    };

    let mut config = Config::default();
    Binder::new(source).bind(&mut config)?;

    println!("Database: {}", config.database_url);
    println!("Pool size: {}", config.pool_size);

    Ok(())
}
