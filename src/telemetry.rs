//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `logging.level` when set. Log lines go to
/// stderr so stdout carries only the solve result. Calling this more than
/// once is a no-op.
pub fn init_tracing(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.level));

        let registry = tracing_subscriber::registry().with(filter);
        let installed = if config.json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .try_init()
        };

        if let Err(e) = installed {
            eprintln!("tracing subscriber already installed: {e}");
        }
    });
}
