use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Maximum log file size before it is rolled over (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;

/// Roll the log file aside once it exceeds `max_size`. The previous log is
/// kept as `<name>.1`, replacing any earlier rollover.
pub(crate) fn roll_log_if_needed(log_path: &Path, max_size: u64) -> std::io::Result<()> {
    let Ok(metadata) = fs::metadata(log_path) else {
        return Ok(());
    };
    if metadata.len() <= max_size {
        return Ok(());
    }

    let rolled = log_path.with_extension("log.1");
    fs::rename(log_path, rolled)
}

/// Initialize logging to a file in the data directory.
///
/// Logs go to `{data_dir}/complexify.log`; stdout belongs to the terminal UI
/// and must stay clean. The level can be overridden with the `RUST_LOG`
/// environment variable.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join("complexify.log");

    if let Err(e) = roll_log_if_needed(&log_path, MAX_LOG_SIZE) {
        eprintln!("Warning: failed to roll log file: {e}");
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let default_filter = format!("complexify={level},complexify_client={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!(
        "Complexify logging initialized (log_path={})",
        log_path.display()
    );
    Ok(())
}
