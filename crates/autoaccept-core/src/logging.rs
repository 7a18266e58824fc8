use tracing::Level;

use crate::{errors::Error, Result};

/// Initialize tracing for the bot.
///
/// `RUST_LOG` wins when set; otherwise `level` applies to our crates and
/// everything else is capped at `warn`.
pub fn init(service_name: &str, level: Level) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(service_name, level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .try_init()
        .map_err(|e| Error::Config(format!("failed to initialize logging: {e}")))
}

fn default_filter(service_name: &str, level: Level) -> tracing_subscriber::EnvFilter {
    let level = level.as_str().to_lowercase();
    let service = service_name.replace('-', "_");
    tracing_subscriber::EnvFilter::new(format!(
        "warn,{service}={level},autoaccept_core={level},autoaccept_telegram={level}"
    ))
}

/// Map a conventional level name to a tracing level.
///
/// Accepts the Python-style names (`WARNING`, `CRITICAL`) alongside tracing's
/// own; unknown values fall back to `INFO`.
pub fn parse_log_level(raw: &str) -> Level {
    match raw.trim().to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "INFO" => Level::INFO,
        "WARN" | "WARNING" => Level::WARN,
        "ERROR" | "CRITICAL" | "FATAL" => Level::ERROR,
        _ => Level::INFO,
    }
}
