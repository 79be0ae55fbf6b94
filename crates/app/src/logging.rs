use tracing_subscriber::EnvFilter;

/// Filter used when neither `--log` nor `TRACKER_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the stderr subscriber.
///
/// Stdout stays reserved for menu and command output.
///
/// # Errors
///
/// Returns an error if `filter` is not a valid `EnvFilter` directive or a
/// global subscriber is already installed.
pub fn init_logging(filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
