// Logging setup for Reflex Pong
// Installs a tracing subscriber; --debug sends everything to a log file

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing::Level;

pub const LOG_FILE_PATH: &str = "/tmp/reflex-pong-debug.log";

/// Initialize logging
///
/// # Arguments
/// * `debug` - Log at DEBUG level to `LOG_FILE_PATH` (truncated per session)
/// * `level` - Level for stderr output when `debug` is off
///
/// # Behavior
/// - Only the first call installs a subscriber; later calls are no-ops
pub fn init(debug: bool, level: Level) -> io::Result<()> {
    if debug {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(LOG_FILE_PATH)?;

        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init();

        tracing::info!("debug logging to {} (tail -f to monitor)", LOG_FILE_PATH);
    } else {
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .try_init();
    }

    Ok(())
}
