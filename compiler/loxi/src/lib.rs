//! Lox command-line driver.
//!
//! Argument parsing, the scan/parse/run session shared by file and prompt
//! modes, process exit codes and logging setup. `main.rs` only wires these
//! to the process.

mod config;
mod session;

use std::sync::Once;

pub use config::{DriverConfig, Invocation, USAGE};
pub use session::Session;

/// Successful run.
pub const EX_OK: i32 = 0;
/// Bad command-line arguments.
pub const EX_USAGE: i32 = 64;
/// Script had a scan, syntax or runtime error.
pub const EX_DATAERR: i32 = 65;
/// Script could not be read.
pub const EX_IOERR: i32 = 74;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `LOX_LOG` or `RUST_LOG` is set, so normal output is
/// untouched. `LOX_LOG` wins when both are present. Safe to call more than
/// once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if std::env::var_os("LOX_LOG").is_some() {
            EnvFilter::from_env("LOX_LOG")
        } else if std::env::var_os("RUST_LOG").is_some() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
