//! Basic usage demo

use std::time::Duration;

use envbind::{Bindable, Binder};

#[derive(Debug, Default, Bindable)]
struct Config {
    // Loaded from PORT, falling back to the default.
    #[env(name = "PORT", default = "8080")]
    port: i64,

    // Human duration literals: "250ms", "5s", "2h30m".
    #[env(name = "REQUEST_TIMEOUT", default = "2s")]
    request_timeout: Duration,

    #[env(name = "VERBOSE", default = "false")]
    verbose: bool,

    // No annotation: never touched by the binder.
    build_tag: String,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("PORT", "3000");
    std::env::set_var("REQUEST_TIMEOUT", "750ms");

    let mut config = Config {
        build_tag: "local".to_string(),
        ..Config::default()
    };
    Binder::from_os_env().bind(&mut config)?;

    println!("Configuration loaded:");
    println!("  Port: {}", config.port);
    println!("  Request timeout: {:?}", config.request_timeout);
    println!("  Verbose: {}", config.verbose);
    println!("  Build tag: {}", config.build_tag);

    Ok(())
}
