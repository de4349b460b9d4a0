use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "AQI_PREDICT_LOG";

/// Stderr subscriber. `AQI_PREDICT_LOG` takes precedence over `--quiet`.
pub fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
