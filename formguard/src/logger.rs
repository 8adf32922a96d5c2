// formguard/src/logger.rs
//! Logger setup for the CLI. Logs go to stderr so stdout stays parseable.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Installs `env_logger`.
///
/// An explicit `level` wins over `RUST_LOG`; without one, `RUST_LOG` is
/// honoured and falls back to `warn`. Calling it twice is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = match level {
        Some(level) => {
            let mut b = Builder::new();
            b.filter_level(level);
            b
        }
        None => Builder::from_env(Env::default().default_filter_or("warn")),
    };
    builder.format_timestamp(None).target(env_logger::Target::Stderr);
    let _ = builder.try_init();
}
