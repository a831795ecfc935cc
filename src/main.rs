//! Ready Check secret scanner - PreToolUse hook entry point.
//!
//! Exit 0 allows the write, exit 2 blocks it with the message on stderr.

use ready_check_scan::config::{Config, LOG_ENV};
use ready_check_scan::hook::{self, HookError, Outcome};

use std::any::Any;
use std::io;
use std::panic;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    setup_logging();

    // stderr belongs to the hook protocol; report panics through the outcome.
    panic::set_hook(Box::new(|info| error!("{}", info)));

    let outcome = panic::catch_unwind(|| match Config::load() {
        Ok(config) => hook::run(io::stdin().lock(), &config),
        Err(e) => Outcome::from_error(HookError::from(e)),
    })
    .unwrap_or_else(|payload| {
        Outcome::FailOpen(format!(
            "Warning: Secret scanner error: {}",
            panic_message(payload.as_ref())
        ))
    });

    if let Some(msg) = outcome.diagnostic() {
        eprintln!("{}", msg);
    }
    ExitCode::from(outcome.exit_code())
}

/// Internal logging is off unless READY_CHECK_LOG sets a filter.
fn setup_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unexpected internal fault"
    }
}
