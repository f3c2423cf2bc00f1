//! Demo daemon front end: a two-field configuration bound from the
//! command line.
//!
//! ```bash
//! cargo run --example daemon -- --daemon=true
//! cargo run --example daemon -- --daemon=false --config=/tmp/x.conf
//! ```

use std::process::ExitCode;

use argbind::{BindTarget, Binder, FieldBinding, FieldSpec, Slot};

/// Command-line surface of the demo daemon
#[derive(Debug, Default)]
struct DaemonArgs {
    configfile: String,
    daemon: bool,
}

impl BindTarget for DaemonArgs {
    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        vec![
            FieldBinding::new(
                FieldSpec::new("config", "Path to the configuration file")
                    .default_value("/etc/daemon.conf"),
                Slot::Text(&mut self.configfile),
            ),
            FieldBinding::new(
                FieldSpec::new("daemon", "Run the application in daemon mode")
                    .default_value("false")
                    .required(true),
                Slot::Bool(&mut self.daemon),
            ),
        ]
    }
}

fn main() -> ExitCode {
    let mut args = DaemonArgs::default();
    if let Err(err) = Binder::new("daemon").bind(&mut args) {
        argbind::report::fail(&err);
        return ExitCode::FAILURE;
    }

    println!("Configuration file: {}", args.configfile);
    println!("Daemon: {}", args.daemon);
    ExitCode::SUCCESS
}
