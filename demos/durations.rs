//! Duration literal formats accepted by binding

use std::time::Duration;

use envbind::{Bindable, Binder};

#[derive(Debug, Default, Bindable)]
struct Timeouts {
    #[env(name = "CONNECT_TIMEOUT", default = "250ms")]
    connect: Duration,

    #[env(name = "READ_TIMEOUT", default = "2h30m")]
    read: Duration,

    // A bare integer counts nanoseconds.
    #[env(name = "SPIN_INTERVAL", default = "1500")]
    spin: Duration,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("CONNECT_TIMEOUT", "1.5s");

    let mut timeouts = Timeouts::default();
    Binder::from_os_env().bind(&mut timeouts)?;

    println!("connect: {:?}", timeouts.connect);
    println!("read:    {:?}", timeouts.read);
    println!("spin:    {:?}", timeouts.spin);

    Ok(())
}
