//! Logging setup for the CLI

use tracing_subscriber::EnvFilter;

/// Parse log level from config string
fn parse_log_level(level: &str) -> tracing::Level {
  match level.to_lowercase().as_str() {
    "off" | "error" => tracing::Level::ERROR,
    "warn" => tracing::Level::WARN,
    "info" => tracing::Level::INFO,
    "debug" => tracing::Level::DEBUG,
    "trace" => tracing::Level::TRACE,
    _ => tracing::Level::WARN,
  }
}

/// Initialize console logging on stderr so it never mixes with prompts.
///
/// `RUST_LOG` overrides the configured level.
pub fn init_cli_logging(level: &str) {
  let env_filter = EnvFilter::builder()
    .with_default_directive(parse_log_level(level).into())
    .from_env_lossy();

  tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .init();
}
