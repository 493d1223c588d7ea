use std::str::FromStr;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Environment variable holding the maximum log level, e.g. `debug`.
pub const LOG_LEVEL_ENV: &str = "MAZEPATH_LOG";

/// Send `tracing` output to `file_name` in the working directory so stdout stays free
/// for the maze. Keep the returned guard alive until exit to flush buffered lines.
pub fn init(file_name: &str) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level_from_env())
        .init();
    guard
}

fn level_from_env() -> Level {
    std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|value| parse_level(&value))
        .unwrap_or(Level::INFO)
}

fn parse_level(value: &str) -> Option<Level> {
    Level::from_str(value.trim()).ok()
}
