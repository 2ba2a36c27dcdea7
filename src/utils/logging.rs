use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants::LOG_JSON_ENV;

/// Installs the global log subscriber. Output goes to stderr.
///
/// `RUST_LOG` wins over the default level; `FCFS_LOG_JSON=1` (or `true`)
/// switches to JSON lines. Calling this twice is harmless.
pub fn init_logging(quiet: bool) {
    let default_level = if quiet { "error" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let use_json = std::env::var(LOG_JSON_ENV)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let _ = if use_json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr).with_target(true))
            .try_init()
    } else {
        registry
            .with(fmt::layer().compact().with_writer(std::io::stderr).with_target(false))
            .try_init()
    };
}
