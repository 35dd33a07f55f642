//! Logging setup for the command line front end.
//!
//! - stderr layer, so stdout stays clean for resolved output
//! - `EnvFilter`: respects `JSON_UI_LOG`, defaults to "warn"
//! - `-v` / `-vv` on the command line override the environment
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::Registry;

pub const LOG_ENV: &str = "JSON_UI_LOG";

pub fn init_tracing(verbosity: u8) {
    let env_filter = match verbosity {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter);

    Registry::default().with(stderr_layer).init();
}
