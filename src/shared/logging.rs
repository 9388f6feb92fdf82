use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the `tracing` filter directives
pub const LOG_ENV: &str = "DEVCONTROL_LOG";

/// Initialize tracing with the DEVCONTROL_LOG environment variable.
///
/// Defaults to "warn". Logs go to stderr so stdout carries only the report.
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
